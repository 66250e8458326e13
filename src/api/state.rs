//! Application state for the rental charge engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::CatalogLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded tool catalog.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tool catalog.
    catalog: Arc<CatalogLoader>,
}

impl AppState {
    /// Creates a new application state with the given catalog loader.
    pub fn new(catalog: CatalogLoader) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the catalog loader.
    pub fn catalog(&self) -> &CatalogLoader {
        &self.catalog
    }
}
