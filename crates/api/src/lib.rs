//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST endpoints over the aggregation engine
//! - JSON error responses
//! - The clock seam used for "today" in calendar views
//!
//! Callers post an already-scoped expense snapshot; nothing is stored.

pub mod clock;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use clock::{Clock, FixedClock, LocalClock};
pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of the current local date.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state backed by the local system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Arc::new(LocalClock),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
