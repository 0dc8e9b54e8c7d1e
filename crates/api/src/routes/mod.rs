//! Route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::session_middleware};

pub mod entries;
pub mod health;
pub mod reports;

/// Creates the application routes.
///
/// Report routes sit behind the session middleware; intake and health
/// are public.
#[allow(clippy::needless_pass_by_value)]
pub fn app_routes(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(reports::routes())
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware));

    Router::new()
        .merge(health::routes())
        .merge(entries::routes())
        .merge(protected_routes)
}
