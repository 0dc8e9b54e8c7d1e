//! Shared types, errors, and configuration for Livro.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for companies and ledger entries
//! - Application-wide error types
//! - Configuration management
//! - Session claims and token signing

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;


pub use auth::Claims;
pub use config::{AppConfig, ReportsConfig, SessionConfig};
pub use error::AppError;
pub use jwt::{JwtError, JwtService};
