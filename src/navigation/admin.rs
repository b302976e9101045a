//! Route declarations for the admin console.

use std::sync::Arc;

use anyhow::Context;

use crate::domain::PageId;
use crate::navigation::{LazyTable, RouteTable, RouteTableError, TableLoader};

/// The pages under the admin prefix. The bare prefix lands on the login page.
pub fn admin_routes() -> Result<RouteTable, RouteTableError> {
    RouteTable::builder()
        .redirect("", "login")
        .page("login", PageId::Login)
        .page("dashboard", PageId::Dashboard)
        .page("users", PageId::Users)
        .page("listings", PageId::Listings)
        .build()
}

/// The top level table: only the admin prefix, mounted lazily.
pub fn root_routes(admin_prefix: &str, admin: Arc<LazyTable>) -> Result<RouteTable, RouteTableError> {
    RouteTable::builder().mount(admin_prefix, admin).build()
}

pub struct AdminTableLoader;

#[async_trait::async_trait]
impl TableLoader for AdminTableLoader {
    async fn load(&self) -> Result<RouteTable, anyhow::Error> {
        admin_routes().context("Failed to build the admin route table")
    }
}
