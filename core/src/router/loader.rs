//! On-demand page loading
//!
//! A [`PageLoader`] decides when a route's component comes into existence.
//! Eager loaders hold the component from the moment the table is built;
//! lazy loaders run a deferred constructor on first access and reuse the
//! result for every later navigation. A failed lazy load is not cached, so
//! a later navigation retries it.

use super::RouterResult;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

type LazyFuture<C> = BoxFuture<'static, RouterResult<C>>;
type LazyFn<C> = Box<dyn Fn() -> LazyFuture<C> + Send + Sync>;

/// Loader for one route's page component
pub struct PageLoader<C> {
    kind: LoaderKind<C>,
}

enum LoaderKind<C> {
    Eager(Arc<C>),
    Lazy {
        load: LazyFn<C>,
        cell: OnceCell<Arc<C>>,
    },
}

impl<C> PageLoader<C> {
    /// A component that is available from the moment the table is built
    pub fn eager(component: C) -> Self {
        Self {
            kind: LoaderKind::Eager(Arc::new(component)),
        }
    }

    /// A component constructed on first navigation and cached afterwards
    pub fn lazy<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = RouterResult<C>> + Send + 'static,
    {
        Self {
            kind: LoaderKind::Lazy {
                load: Box::new(move || -> LazyFuture<C> { Box::pin(load()) }),
                cell: OnceCell::new(),
            },
        }
    }

    /// Whether this loader defers construction to first access
    pub fn is_lazy(&self) -> bool {
        matches!(self.kind, LoaderKind::Lazy { .. })
    }

    /// Get the component, running the deferred constructor if this is the
    /// first access of a lazy loader
    pub async fn get(&self) -> RouterResult<Arc<C>> {
        match &self.kind {
            LoaderKind::Eager(component) => Ok(component.clone()),
            LoaderKind::Lazy { load, cell } => cell
                .get_or_try_init(|| async { load().await.map(Arc::new) })
                .await
                .cloned(),
        }
    }
}

impl<C> std::fmt::Debug for PageLoader<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            LoaderKind::Eager(_) => f.write_str("PageLoader::Eager"),
            LoaderKind::Lazy { cell, .. } => f
                .debug_struct("PageLoader::Lazy")
                .field("loaded", &cell.initialized())
                .finish(),
        }
    }
}
