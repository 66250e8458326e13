//! HTTP API module for the rental charge engine.
//!
//! This module provides the REST endpoints for checking tools out and
//! listing the catalog.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::ApiError;
pub use state::AppState;
