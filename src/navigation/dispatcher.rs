use crate::domain::{PageId, RequestPath, RequestPathError};
use crate::navigation::{RedirectTo, RouteTable, Target};
use crate::utils::error_chain_fmt;

/// The outcome of a successful navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub page: PageId,
    /// The canonical path of `page` after any redirects.
    pub path: RequestPath,
    /// The path originally asked for, when at least one redirect was followed.
    pub redirected_from: Option<RequestPath>,
}

impl Resolution {
    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

enum Step {
    Page(PageId),
    Redirect(RequestPath),
}

/// Resolves navigation paths against a root route table.
pub struct Dispatcher {
    root: RouteTable,
    max_redirects: usize,
}

impl Dispatcher {
    pub fn new(root: RouteTable, max_redirects: usize) -> Self {
        Self {
            root,
            max_redirects,
        }
    }

    #[tracing::instrument(name = "Resolve navigation", skip(self))]
    pub async fn resolve(&self, path: &str) -> Result<Resolution, NavigationError> {
        let requested = RequestPath::parse(path)?;
        let mut current = requested.clone();
        let mut redirects = 0;

        loop {
            match self.resolve_once(&current).await? {
                Step::Page(page) => {
                    tracing::debug!(%page, path = %current, redirects, "Navigation resolved");
                    return Ok(Resolution {
                        page,
                        path: current,
                        redirected_from: (redirects > 0).then_some(requested),
                    });
                }
                Step::Redirect(next) => {
                    redirects += 1;
                    if redirects > self.max_redirects {
                        return Err(NavigationError::TooManyRedirects {
                            path: requested.to_string(),
                            limit: self.max_redirects,
                        });
                    }
                    tracing::debug!(from = %current, to = %next, "Following redirect");
                    current = next;
                }
            }
        }
    }

    /// Walks down the tables for `path` until it hits a page or a redirect.
    async fn resolve_once(&self, path: &RequestPath) -> Result<Step, NavigationError> {
        let mut table = &self.root;
        let mut mount = RequestPath::root();
        let mut rest = path.clone();

        loop {
            let (entry, remainder) = table
                .find(&rest)
                .ok_or_else(|| NavigationError::NotFound(path.to_string()))?;

            match entry.target() {
                Target::Page(page) => return Ok(Step::Page(*page)),
                Target::Redirect(RedirectTo::Relative(to)) => {
                    return Ok(Step::Redirect(mount.join(to)))
                }
                Target::Redirect(RedirectTo::Absolute(to)) => return Ok(Step::Redirect(to.clone())),
                Target::Mount(lazy) => {
                    mount = mount.join(entry.pattern());
                    rest = remainder;
                    table = lazy.get().await.map_err(|source| NavigationError::LoadFailed {
                        table: lazy.name().to_string(),
                        source,
                    })?;
                }
            }
        }
    }
}

#[derive(thiserror::Error)]
pub enum NavigationError {
    #[error(transparent)]
    InvalidPath(#[from] RequestPathError),
    #[error("No route is declared for {0}")]
    NotFound(String),
    #[error("Gave up on {path} after {limit} redirects")]
    TooManyRedirects { path: String, limit: usize },
    #[error("Failed to load the `{table}` route table")]
    LoadFailed {
        table: String,
        #[source]
        source: anyhow::Error,
    },
}

impl std::fmt::Debug for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
