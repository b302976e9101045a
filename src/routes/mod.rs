//! src/routes/mod.rs

pub mod admin;
mod health_check;
mod home;
mod navigate;

pub use health_check::*;
pub use home::*;
pub use navigate::*;
