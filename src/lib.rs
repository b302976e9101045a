//! lib.rs

pub mod configuration;
pub mod domain;
pub mod navigation;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;

#[cfg(test)] extern crate proptest;
