//! The route table
//!
//! A static mapping from URL path to page loader. Tables are immutable once
//! built; duplicate paths or names are rejected at build time.

use super::loader::PageLoader;
use super::route::Route;
use super::{RouterError, RouterResult};
use std::collections::HashMap;
use std::sync::Arc;

/// One table entry: route metadata plus the loader for its component
#[derive(Debug)]
pub struct RouteEntry<C> {
    route: Route,
    loader: PageLoader<C>,
}

impl<C> RouteEntry<C> {
    /// Route metadata for this entry
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The loader backing this entry
    pub fn loader(&self) -> &PageLoader<C> {
        &self.loader
    }

    /// Load (or fetch the already-loaded) page component for this entry
    pub async fn page(&self) -> RouterResult<Arc<C>> {
        self.loader.get().await
    }
}

/// Static mapping from navigable paths to page loaders
#[derive(Debug)]
pub struct RouteTable<C> {
    entries: Vec<RouteEntry<C>>,
    by_path: HashMap<String, usize>,
}

impl<C> RouteTable<C> {
    /// Start building a table
    pub fn builder() -> RouteTableBuilder<C> {
        RouteTableBuilder::new()
    }

    /// Resolve a path to its table entry; unmatched paths resolve to `None`
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<C>> {
        self.by_path.get(path).map(|&index| &self.entries[index])
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[RouteEntry<C>] {
        &self.entries
    }

    /// Number of routes in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no routes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`RouteTable`]
pub struct RouteTableBuilder<C> {
    entries: Vec<RouteEntry<C>>,
}

impl<C> RouteTableBuilder<C> {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a route with its page loader
    pub fn route(
        mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        loader: PageLoader<C>,
    ) -> Self {
        self.entries.push(RouteEntry {
            route: Route::new(path, name),
            loader,
        });
        self
    }

    /// Build the table, rejecting duplicate paths and duplicate names
    pub fn build(self) -> RouterResult<RouteTable<C>> {
        let mut by_path = HashMap::with_capacity(self.entries.len());
        let mut names = HashMap::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter().enumerate() {
            if by_path.insert(entry.route.path.clone(), index).is_some() {
                return Err(RouterError::DuplicatePath(entry.route.path.clone()));
            }
            if names.insert(entry.route.name.clone(), index).is_some() {
                return Err(RouterError::DuplicateName(entry.route.name.clone()));
            }
        }

        Ok(RouteTable {
            entries: self.entries,
            by_path,
        })
    }
}

impl<C> Default for RouteTableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
