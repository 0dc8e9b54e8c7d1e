//! Session claims carried by the signed session token.
//!
//! Issuing sessions (login, registration) happens outside this workspace.
//! The services here only read the authenticated company from a token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::CompanyId;

/// JWT claims for a company session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (company ID).
    pub sub: Uuid,
    /// Company display name.
    pub name: String,
    /// Company email.
    pub email: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a company.
    #[must_use]
    pub fn new(company_id: CompanyId, name: &str, email: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: company_id.into_inner(),
            name: name.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the company ID from claims.
    #[must_use]
    pub const fn company_id(&self) -> CompanyId {
        CompanyId::from_uuid(self.sub)
    }
}
