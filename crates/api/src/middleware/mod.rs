//! Request middleware.

pub mod auth;

pub use auth::{AuthCompany, SESSION_COOKIE, session_middleware};
