//! Session middleware for the report routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::{AppState, error::ApiError};
use livro_shared::{AppError, Claims, types::CompanyId};

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Finds a session token in the Authorization header or the session cookie.
fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .map(str::to_string);

    bearer.or_else(|| {
        CookieJar::from_headers(headers)
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
    })
}

/// Requires a valid session before reaching the wrapped routes.
///
/// Valid claims are stored in the request extensions. Requests without a
/// usable session are sent to the login page with `303 See Other`.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(request.headers()) else {
        debug!(path = %request.uri().path(), "No session, redirecting to login");
        return Redirect::to(&state.login_path).into_response();
    };

    match state.jwt_service.validate_token(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            debug!(error = %e, "Rejected session token, redirecting to login");
            Redirect::to(&state.login_path).into_response()
        }
    }
}

/// Extractor for the authenticated company.
///
/// Only available behind [`session_middleware`].
#[derive(Debug, Clone)]
pub struct AuthCompany(pub Claims);

impl AuthCompany {
    /// Returns the company ID from the claims.
    #[must_use]
    pub const fn company_id(&self) -> CompanyId {
        self.0.company_id()
    }
}

impl<S> FromRequestParts<S> for AuthCompany
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthCompany)
            .ok_or_else(|| ApiError(AppError::Unauthorized("Authentication required".to_string())))
    }
}
