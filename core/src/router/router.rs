//! Navigation state on top of a route table
//!
//! The table is the contract; this layer only tracks which path is current
//! and keeps a bounded back-history. Navigating to a path that is not in
//! the table is an error and leaves the state untouched.

use super::table::{RouteEntry, RouteTable};
use super::{RouterError, RouterResult};

/// Current navigation state
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Currently active path
    current: String,
    /// Previously visited paths (most recent first)
    history: Vec<String>,
    /// Maximum number of history entries to keep
    max_history: usize,
}

impl RouterState {
    fn new(initial: String) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
            max_history: 50,
        }
    }

    fn navigate_to(&mut self, path: String) {
        if self.current == path {
            return;
        }
        self.history.insert(0, std::mem::replace(&mut self.current, path));
        if self.history.len() > self.max_history {
            self.history.truncate(self.max_history);
        }
    }

    fn go_back(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.current = self.history.remove(0);
        true
    }

    /// The currently active path
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Previously visited paths, most recent first
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// Router combining a static table with navigation state
#[derive(Debug)]
pub struct Router<C> {
    table: RouteTable<C>,
    state: RouterState,
}

impl<C> Router<C> {
    /// Create a router positioned on `initial`, which must be in the table
    pub fn new(table: RouteTable<C>, initial: &str) -> RouterResult<Self> {
        if table.is_empty() {
            return Err(RouterError::NoRoutes);
        }
        if table.resolve(initial).is_none() {
            return Err(RouterError::RouteNotFound(initial.to_string()));
        }

        Ok(Self {
            table,
            state: RouterState::new(initial.to_string()),
        })
    }

    /// The route table backing this router
    pub fn table(&self) -> &RouteTable<C> {
        &self.table
    }

    /// The current navigation state
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// The currently active path
    pub fn current_path(&self) -> &str {
        self.state.current()
    }

    /// The table entry for the current path
    pub fn current(&self) -> &RouteEntry<C> {
        // current() always resolves: new() and navigate() only ever store
        // paths that are in the table
        self.table
            .resolve(self.state.current())
            .expect("current path is always a table entry")
    }

    /// Navigate to a path and return its table entry
    pub fn navigate(&mut self, path: &str) -> RouterResult<&RouteEntry<C>> {
        if self.table.resolve(path).is_none() {
            return Err(RouterError::RouteNotFound(path.to_string()));
        }
        self.state.navigate_to(path.to_string());
        Ok(self.current())
    }

    /// Go back to the previously visited path
    pub fn go_back(&mut self) -> bool {
        self.state.go_back()
    }

    /// Check if there is a previous path to go back to
    pub fn can_go_back(&self) -> bool {
        !self.state.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::PageLoader;

    fn sample_router() -> Router<&'static str> {
        let table = RouteTable::builder()
            .route("/", "home", PageLoader::eager("home"))
            .route("/docs", "docs", PageLoader::lazy(|| async { Ok("docs") }))
            .route("/faqs", "faqs", PageLoader::lazy(|| async { Ok("faqs") }))
            .build()
            .unwrap();
        Router::new(table, "/").unwrap()
    }

    #[test]
    fn test_initial_route_must_exist() {
        let table = RouteTable::builder()
            .route("/", "home", PageLoader::eager("home"))
            .build()
            .unwrap();
        assert!(matches!(
            Router::new(table, "/missing"),
            Err(RouterError::RouteNotFound(_))
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = RouteTable::<&'static str>::builder().build().unwrap();
        assert!(matches!(Router::new(table, "/"), Err(RouterError::NoRoutes)));
    }

    #[test]
    fn test_navigate_and_go_back() {
        let mut router = sample_router();
        assert_eq!(router.current_path(), "/");
        assert!(!router.can_go_back());

        router.navigate("/docs").unwrap();
        assert_eq!(router.current_path(), "/docs");
        assert!(router.can_go_back());

        router.navigate("/faqs").unwrap();
        assert_eq!(router.state().history(), ["/docs", "/"]);

        assert!(router.go_back());
        assert_eq!(router.current_path(), "/docs");
        assert!(router.go_back());
        assert_eq!(router.current_path(), "/");
        assert!(!router.go_back());
    }

    #[test]
    fn test_navigate_to_unknown_path_is_error() {
        let mut router = sample_router();
        assert!(matches!(
            router.navigate("/nope"),
            Err(RouterError::RouteNotFound(path)) if path == "/nope"
        ));
        assert_eq!(router.current_path(), "/");
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_renavigating_current_path_does_not_grow_history() {
        let mut router = sample_router();
        router.navigate("/docs").unwrap();
        router.navigate("/docs").unwrap();
        assert_eq!(router.state().history(), ["/"]);
    }
}
