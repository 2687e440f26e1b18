//! Route definitions
//!
//! A route pairs a navigable URL path with a human-readable name. Paths and
//! names are both unique within a table; the table enforces that at build
//! time.

/// Route metadata: a navigable path and its unique name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path this route matches, e.g. `/docs`
    pub path: String,
    /// Unique name for this route, e.g. `docs`
    pub name: String,
}

impl Route {
    /// Create a new route with the given path and name
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.path, self.name)
    }
}
