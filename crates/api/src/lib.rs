//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - Entry intake and report routes
//! - Session middleware for the report routes
//! - Error to response mapping

pub mod error;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use livro_core::ledger::EntryStore;
use livro_core::reports::{ReportGenerator, ReportSettings};
use livro_shared::JwtService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Entry store used by the intake route.
    pub entries: Arc<dyn EntryStore>,
    /// Report generator over the same store.
    pub reports: ReportGenerator,
    /// JWT service for session tokens.
    pub jwt_service: Arc<JwtService>,
    /// Redirect target for requests without a session.
    pub login_path: Arc<str>,
}

impl AppState {
    /// Wires the state around one entry store.
    #[must_use]
    pub fn new(
        entries: Arc<dyn EntryStore>,
        settings: ReportSettings,
        jwt_service: Arc<JwtService>,
        login_path: &str,
    ) -> Self {
        Self {
            reports: ReportGenerator::new(Arc::clone(&entries), settings),
            entries,
            jwt_service,
            login_path: Arc::from(login_path),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::app_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
