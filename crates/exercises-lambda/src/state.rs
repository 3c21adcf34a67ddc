use std::sync::Arc;

use exercises_catalog::Catalog;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Built once per process; the catalog and its SDK clients are read-only
/// after startup.
pub struct AppState<S, U> {
    pub catalog: Arc<Catalog<S, U>>,
}

impl<S, U> AppState<S, U> {
    pub fn new(catalog: Catalog<S, U>) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl<S, U> Clone for AppState<S, U> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}
