//! Entry intake route.

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{error, info};

use crate::{AppState, error::ApiError};
use livro_core::ledger::{Entry, NewEntry, StoreError, parse_amount};
use livro_shared::{AppError, types::CompanyId};

/// Creates the entry routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/registros/add", post(add_entry))
}

/// Body of `POST /registros/add`.
///
/// Field names follow the form the entries are typed into. Amounts may be
/// numbers or numeric strings; anything else is kept as missing. A blank
/// company id counts as missing.
#[derive(Debug, Default, Deserialize)]
pub struct AddEntryRequest {
    /// Account label.
    #[serde(default)]
    pub conta: String,
    /// Debit amount.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub debito: Option<Decimal>,
    /// Credit amount.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub credito: Option<Decimal>,
    /// Owning company, as sent.
    #[serde(default, deserialize_with = "non_blank_text")]
    pub id_empresa: Option<String>,
    /// Description.
    #[serde(default)]
    pub historico: String,
    /// Month label.
    #[serde(default)]
    pub mes_registro: String,
}

impl TryFrom<AddEntryRequest> for NewEntry {
    type Error = StoreError;

    fn try_from(req: AddEntryRequest) -> Result<Self, Self::Error> {
        let company_id = req
            .id_empresa
            .map(|raw| {
                raw.parse::<CompanyId>().map_err(|_| {
                    StoreError::Validation(format!("invalid company id: {raw}"))
                })
            })
            .transpose()?;

        Ok(Self {
            company_id,
            account: req.conta,
            debit: req.debito,
            credit: req.credito,
            description: req.historico,
            month: req.mes_registro,
        })
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => parse_amount(&n.to_string()),
        Value::String(s) => parse_amount(&s),
        _ => None,
    })
}

fn non_blank_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    })
}

/// Intake body read as JSON or as an urlencoded form, by content type.
///
/// Unreadable bodies are rejected as validation errors.
#[derive(Debug)]
pub struct EntryBody(pub AddEntryRequest);

impl<S> FromRequest<S> for EntryBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let body = if is_form {
            Form::<AddEntryRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| ApiError(AppError::Validation(e.body_text())))?
        } else {
            Json::<AddEntryRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| ApiError(AppError::Validation(e.body_text())))?
        };

        Ok(Self(body))
    }
}

fn intake_failed(e: StoreError) -> ApiError {
    error!(error = %e, "Failed to record entry");
    ApiError::from(e)
}

async fn add_entry(
    State(state): State<AppState>,
    EntryBody(req): EntryBody,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    let input = NewEntry::try_from(req).map_err(intake_failed)?;
    let entry = state.entries.append(input).await.map_err(intake_failed)?;

    info!(
        entry_id = %entry.id,
        company_id = %entry.company_id,
        account = %entry.account,
        "Entry added"
    );
    Ok((StatusCode::CREATED, Json(entry)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, header::CONTENT_TYPE},
    };
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    use super::*;
    use crate::create_router;
    use crate::test_support::{FailingStore, body_json, test_state};
    use livro_core::ledger::{EntryFilter, EntryStore, MemoryEntryStore};

    fn post_entry(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/registros/add")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_request_accepts_numbers_and_numeric_strings() {
        let req: AddEntryRequest = serde_json::from_str(
            r#"{"conta":"Caixa","debito":100.5,"credito":"30","mes_registro":"2024-01"}"#,
        )
        .unwrap();

        assert_eq!(req.debito, Some(dec!(100.5)));
        assert_eq!(req.credito, Some(dec!(30)));
        assert_eq!(req.id_empresa, None);
    }

    #[test]
    fn test_request_keeps_non_numeric_amount_as_missing() {
        let req: AddEntryRequest =
            serde_json::from_str(r#"{"conta":"Caixa","debito":"abc","credito":null}"#).unwrap();

        assert_eq!(req.debito, None);
        assert_eq!(req.credito, None);
    }

    #[tokio::test]
    async fn test_add_entry_stores_entry() {
        let store = Arc::new(MemoryEntryStore::new());
        let app = create_router(test_state(store.clone()));
        let company_id = CompanyId::new();

        let response = app
            .oneshot(post_entry(&format!(
                r#"{{"conta":"Caixa","debito":"100","credito":0,"id_empresa":"{company_id}","historico":"Venda","mes_registro":"2024-01"}}"#
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["account"], "Caixa");
        assert_eq!(body["month"], "2024-01");

        let stored = store
            .query(company_id, &EntryFilter::default())
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].debit, Some(dec!(100)));
        assert_eq!(stored[0].credit, Some(dec!(0)));
        assert_eq!(stored[0].description, "Venda");
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/registros/add")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_entry_accepts_form_post() {
        let store = Arc::new(MemoryEntryStore::new());
        let app = create_router(test_state(store.clone()));
        let company_id = CompanyId::new();

        let response = app
            .oneshot(post_form(&format!(
                "conta=Capital+Social&debito=&credito=500&id_empresa={company_id}&historico=Integraliza%C3%A7%C3%A3o&mes_registro=2024-01"
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let stored = store
            .query(company_id, &EntryFilter::default())
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].account, "Capital Social");
        assert_eq!(stored[0].debit, None);
        assert_eq!(stored[0].credit, Some(dec!(500)));
        assert_eq!(stored[0].description, "Integralização");
    }

    #[tokio::test]
    async fn test_add_entry_form_with_blank_company_is_rejected() {
        let app = create_router(test_state(Arc::new(MemoryEntryStore::new())));

        let response = app
            .oneshot(post_form("conta=Caixa&debito=10&id_empresa="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_add_entry_with_empty_company_id_is_rejected() {
        let app = create_router(test_state(Arc::new(MemoryEntryStore::new())));

        let response = app
            .oneshot(post_entry(r#"{"conta":"Caixa","debito":10,"id_empresa":""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_add_entry_with_malformed_company_id_is_rejected() {
        let store = Arc::new(MemoryEntryStore::new());
        let app = create_router(test_state(store.clone()));

        let response = app
            .oneshot(post_entry(
                r#"{"conta":"Caixa","debito":10,"id_empresa":"empresa-1"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("empresa-1"));
    }

    #[tokio::test]
    async fn test_add_entry_unreadable_body_is_validation_error() {
        let app = create_router(test_state(Arc::new(MemoryEntryStore::new())));

        let response = app.oneshot(post_entry("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_add_entry_amount_beyond_column_is_rejected() {
        let app = create_router(test_state(Arc::new(MemoryEntryStore::new())));

        let response = app
            .oneshot(post_entry(&format!(
                r#"{{"conta":"Caixa","debito":"10000000000000000000000000","id_empresa":"{}"}}"#,
                CompanyId::new()
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_add_entry_without_company_is_rejected() {
        let store = Arc::new(MemoryEntryStore::new());
        let app = create_router(test_state(store));

        let response = app
            .oneshot(post_entry(r#"{"conta":"Caixa","debito":10}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_add_entry_persistence_failure() {
        let app = create_router(test_state(Arc::new(FailingStore)));

        let response = app
            .oneshot(post_entry(&format!(
                r#"{{"conta":"Caixa","debito":10,"id_empresa":"{}"}}"#,
                CompanyId::new()
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "DATABASE_ERROR");
    }
}
