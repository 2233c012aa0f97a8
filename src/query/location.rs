//! Owner of navigable state: route path, query parameters, back stack

use std::mem;

use crate::query::QueryParams;

/// One navigation entry: a route path plus its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    path: String,
    query: QueryParams,
}

/// The navigable/shareable location owned by the host page. Exactly one
/// logical owner mutates it; views borrow it per operation.
///
/// `replace_query` is the channel for state that mirrors what is already on
/// screen (slot edits): it must not grow the back stack. `push` is real
/// navigation and does.
#[derive(Debug, Clone)]
pub struct Location {
    current: Entry,
    back_stack: Vec<Entry>,
}

impl Location {
    /// Create a location at `path` with an empty query.
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_query(path, QueryParams::new())
    }

    /// Create a location at `path` with the given query.
    pub fn with_query(path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            current: Entry {
                path: path.into(),
                query,
            },
            back_stack: Vec::new(),
        }
    }

    /// Current route path.
    pub fn path(&self) -> &str {
        &self.current.path
    }

    /// Current query parameters.
    pub fn query(&self) -> &QueryParams {
        &self.current.query
    }

    /// Replace the current entry's query in place. History depth is
    /// unchanged and back/forward behavior is unaffected.
    pub fn replace_query(&mut self, query: QueryParams) {
        self.current.query = query;
    }

    /// Navigate to a new path and query, growing the back stack.
    pub fn push(&mut self, path: impl Into<String>, query: QueryParams) {
        let path = path.into();
        tracing::debug!(path = %path, depth = self.back_stack.len() + 1, "navigate");
        let next = Entry { path, query };
        self.back_stack.push(mem::replace(&mut self.current, next));
    }

    /// Step back one entry. Returns false at the root.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                self.current = previous;
                tracing::debug!(path = %self.current.path, "navigate back");
                true
            }
            None => false,
        }
    }

    /// Number of entries behind the current one.
    pub fn history_depth(&self) -> usize {
        self.back_stack.len()
    }
}
