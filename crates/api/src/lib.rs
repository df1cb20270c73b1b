//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for quotes, prices, currencies and balance checks
//! - JSON error responses built from `AppError`

pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use pricedesk_core::Converter;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Converter (and, through it, the price service).
    pub converter: Arc<Converter>,
}

impl AppState {
    /// Creates the shared state.
    #[must_use]
    pub fn new(converter: Converter) -> Self {
        Self {
            converter: Arc::new(converter),
        }
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
