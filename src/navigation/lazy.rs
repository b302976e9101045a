use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::OnceCell;

use crate::navigation::RouteTable;

/// Produces a route table on demand.
#[async_trait::async_trait]
pub trait TableLoader: Send + Sync {
    async fn load(&self) -> Result<RouteTable, anyhow::Error>;
}

/// A route table fetched the first time it is needed and cached afterwards.
///
/// Concurrent first callers share one fetch. A failed fetch leaves the cell
/// empty, so the next caller tries again.
pub struct LazyTable {
    name: String,
    loader: Box<dyn TableLoader>,
    table: OnceCell<RouteTable>,
    fetches: AtomicUsize,
}

impl LazyTable {
    pub fn new(name: impl Into<String>, loader: impl TableLoader + 'static) -> Self {
        Self {
            name: name.into(),
            loader: Box::new(loader),
            table: OnceCell::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.table.initialized()
    }

    /// How many times the loader has been invoked.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub async fn get(&self) -> Result<&RouteTable, anyhow::Error> {
        self.table.get_or_try_init(|| self.fetch()).await
    }

    #[tracing::instrument(name = "Fetch deferred route table", skip(self), fields(table = %self.name))]
    async fn fetch(&self) -> Result<RouteTable, anyhow::Error> {
        let attempt = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        let table = self.loader.load().await?;
        tracing::info!(
            attempt,
            entries = table.entries().len(),
            "Deferred route table loaded"
        );
        Ok(table)
    }
}

impl std::fmt::Debug for LazyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyTable")
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
