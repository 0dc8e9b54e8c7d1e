//! Helpers shared by the route tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, response::Response};
use http_body_util::BodyExt;

use crate::AppState;
use livro_core::ledger::{Entry, EntryFilter, EntryStore, NewEntry, StoreError};
use livro_core::reports::ReportSettings;
use livro_shared::{JwtService, SessionConfig, types::CompanyId};

pub const TEST_SECRET: &str = "segredo-de-teste-com-tamanho-suficiente";

pub fn session_config() -> SessionConfig {
    SessionConfig {
        secret: TEST_SECRET.to_string(),
        expiry_secs: 3600,
        login_path: "/login".to_string(),
    }
}

pub fn test_state(store: Arc<dyn EntryStore>) -> AppState {
    test_state_with(store, ReportSettings::default())
}

pub fn test_state_with(store: Arc<dyn EntryStore>, settings: ReportSettings) -> AppState {
    let config = session_config();
    AppState::new(
        store,
        settings,
        Arc::new(JwtService::new(&config)),
        &config.login_path,
    )
}

pub fn session_token(company_id: CompanyId) -> String {
    JwtService::new(&session_config())
        .generate_session_token(company_id, "Empresa Teste", "empresa@example.com")
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Store whose every operation fails.
pub struct FailingStore;

#[async_trait]
impl EntryStore for FailingStore {
    async fn append(&self, _entry: NewEntry) -> Result<Entry, StoreError> {
        Err(StoreError::Persistence("connection refused".to_string()))
    }

    async fn query(
        &self,
        _company_id: CompanyId,
        _filter: &EntryFilter,
    ) -> Result<Vec<Entry>, StoreError> {
        Err(StoreError::Query("connection refused".to_string()))
    }
}

/// Store whose reads never finish in time.
pub struct SlowStore;

#[async_trait]
impl EntryStore for SlowStore {
    async fn append(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        entry.stamp(chrono::Utc::now())
    }

    async fn query(
        &self,
        _company_id: CompanyId,
        _filter: &EntryFilter,
    ) -> Result<Vec<Entry>, StoreError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(Vec::new())
    }
}
