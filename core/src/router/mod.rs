//! Path-based routing for page components
//!
//! A [`RouteTable`] is a static mapping from URL paths to page loaders;
//! [`Router`] adds navigation state on top of it. Tables are generic over
//! the component type so this crate stays agnostic of how pages render.

pub mod loader;
pub mod route;
pub mod router;
pub mod table;

use thiserror::Error;

// Re-export commonly used types
pub use loader::PageLoader;
pub use route::Route;
pub use router::{Router, RouterState};
pub use table::{RouteEntry, RouteTable, RouteTableBuilder};

/// Structured error type for router operations
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    #[error("Duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("Duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("Failed to load page: {0}")]
    LoadFailed(String),
}

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_error_messages() {
        assert_eq!(RouterError::NoRoutes.to_string(), "No routes configured");
        assert_eq!(
            RouterError::RouteNotFound("/sort".to_string()).to_string(),
            "Route '/sort' not found"
        );
        assert_eq!(
            RouterError::LoadFailed("chunk missing".to_string()).to_string(),
            "Failed to load page: chunk missing"
        );
    }
}
