//! Conversion of application errors into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use livro_core::ledger::StoreError;
use livro_core::reports::ReportError;
use livro_shared::AppError;

/// Message shown for every failed report lookup.
pub const REPORT_LOOKUP_FAILED: &str = "Erro ao buscar registros.";

/// HTTP facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Query(_) => Self(AppError::Query(REPORT_LOOKUP_FAILED.to_string())),
            ReportError::Timeout(_) => Self(AppError::Timeout(REPORT_LOOKUP_FAILED.to_string())),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => Self(AppError::Validation(msg)),
            StoreError::Query(msg) => Self(AppError::Query(msg)),
            StoreError::Persistence(_) => {
                Self(AppError::Database("Erro ao salvar registro.".to_string()))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.message(),
            })),
        )
            .into_response()
    }
}
