use std::sync::Arc;

use crate::domain::{PageId, RequestPath, RequestPathError};
use crate::navigation::LazyTable;
use crate::utils::error_chain_fmt;

/// Where a matched route sends the navigation.
#[derive(Debug, Clone)]
pub enum Target {
    Page(PageId),
    Redirect(RedirectTo),
    /// A sub-table fetched on first use and mounted under the entry's pattern.
    Mount(Arc<LazyTable>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTo {
    /// Resolved against the table that declares the redirect.
    Relative(RequestPath),
    /// Re-dispatched from the root table.
    Absolute(RequestPath),
}

#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: RequestPath,
    target: Target,
}

impl RouteEntry {
    pub fn pattern(&self) -> &RequestPath {
        &self.pattern
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    fn matches(&self, path: &RequestPath) -> bool {
        match self.target {
            Target::Mount(_) => path.starts_with(&self.pattern),
            Target::Page(_) | Target::Redirect(_) => *path == self.pattern,
        }
    }
}

/// An ordered, immutable list of route entries.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    pub fn new(entries: Vec<RouteEntry>) -> Result<RouteTable, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.pattern == entry.pattern) {
                return Err(RouteTableError::DuplicatePattern(entry.pattern.to_string()));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Finds the entry for `path` along with the segments it leaves unmatched.
    ///
    /// Pages and redirects match exactly, mounts match as a prefix. When
    /// several entries match the longest pattern wins, and among equally long
    /// patterns the one declared first.
    pub fn find(&self, path: &RequestPath) -> Option<(&RouteEntry, RequestPath)> {
        let mut best: Option<&RouteEntry> = None;
        for entry in self.entries.iter().filter(|e| e.matches(path)) {
            let longer = best.map_or(true, |b| {
                entry.pattern.segments().len() > b.pattern.segments().len()
            });
            if longer {
                best = Some(entry);
            }
        }
        let entry = best?;
        let rest = path.strip_prefix(&entry.pattern)?;
        Some((entry, rest))
    }
}

#[derive(Default)]
pub struct RouteTableBuilder {
    entries: Vec<(String, PendingTarget)>,
}

enum PendingTarget {
    Page(PageId),
    Redirect(String),
    Mount(Arc<LazyTable>),
}

impl RouteTableBuilder {
    pub fn page(mut self, pattern: &str, page: PageId) -> Self {
        self.entries.push((pattern.into(), PendingTarget::Page(page)));
        self
    }

    /// A leading `/` makes `to` absolute, otherwise it is relative to this table.
    pub fn redirect(mut self, pattern: &str, to: &str) -> Self {
        self.entries
            .push((pattern.into(), PendingTarget::Redirect(to.into())));
        self
    }

    pub fn mount(mut self, pattern: &str, table: Arc<LazyTable>) -> Self {
        self.entries.push((pattern.into(), PendingTarget::Mount(table)));
        self
    }

    pub fn build(self) -> Result<RouteTable, RouteTableError> {
        let mut entries = Vec::with_capacity(self.entries.len());
        for (pattern, target) in self.entries {
            let parsed = parse_pattern(&pattern)?;
            let target = match target {
                PendingTarget::Page(page) => Target::Page(page),
                PendingTarget::Redirect(to) => {
                    let path = parse_pattern(&to)?;
                    if to.starts_with('/') {
                        Target::Redirect(RedirectTo::Absolute(path))
                    } else {
                        Target::Redirect(RedirectTo::Relative(path))
                    }
                }
                PendingTarget::Mount(table) => Target::Mount(table),
            };
            entries.push(RouteEntry {
                pattern: parsed,
                target,
            });
        }
        RouteTable::new(entries)
    }
}

fn parse_pattern(pattern: &str) -> Result<RequestPath, RouteTableError> {
    RequestPath::parse(pattern).map_err(|source| RouteTableError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[derive(thiserror::Error)]
pub enum RouteTableError {
    #[error("The pattern `{0}` is declared more than once")]
    DuplicatePattern(String),
    #[error("`{pattern}` is not a valid route pattern")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: RequestPathError,
    },
}

impl std::fmt::Debug for RouteTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
