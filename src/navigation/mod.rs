mod admin;
mod dispatcher;
mod lazy;
mod table;

pub use admin::{admin_routes, root_routes, AdminTableLoader};
pub use dispatcher::{Dispatcher, NavigationError, Resolution};
pub use lazy::{LazyTable, TableLoader};
pub use table::{RedirectTo, RouteEntry, RouteTable, RouteTableBuilder, RouteTableError, Target};
