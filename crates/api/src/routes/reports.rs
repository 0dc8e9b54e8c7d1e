//! Report routes.
//!
//! Every route reads the company from the session and rebuilds its report
//! from the entry store on each request.

use axum::{Json, Router, extract::State, routing::get};
use tracing::{debug, error};

use crate::{AppState, error::ApiError, middleware::AuthCompany};
use livro_core::reports::{
    CumulativeBalanceSheet, JournalReport, MonthlyBalanceSheet, ReportError, TrialBalanceReport,
};

/// Creates the report routes (requires the session middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/razao", get(get_trial_balance))
        .route("/balancete", get(get_monthly_balance_sheet))
        .route("/balanco", get(get_cumulative_balance_sheet))
        .route("/diario", get(get_journal))
}

fn report_failed(report: &'static str) -> impl FnOnce(ReportError) -> ApiError {
    move |e| {
        error!(error = %e, report, "Failed to build report");
        ApiError::from(e)
    }
}

async fn get_trial_balance(
    State(state): State<AppState>,
    company: AuthCompany,
) -> Result<Json<TrialBalanceReport>, ApiError> {
    let report = state
        .reports
        .trial_balance(company.company_id())
        .await
        .map_err(report_failed("trial_balance"))?;

    debug!(company_id = %company.company_id(), months = report.months.len(), "Trial balance built");
    Ok(Json(report))
}

async fn get_monthly_balance_sheet(
    State(state): State<AppState>,
    company: AuthCompany,
) -> Result<Json<MonthlyBalanceSheet>, ApiError> {
    let report = state
        .reports
        .monthly_balance_sheet(company.company_id())
        .await
        .map_err(report_failed("monthly_balance_sheet"))?;

    debug!(company_id = %company.company_id(), months = report.months.len(), "Monthly balance sheet built");
    Ok(Json(report))
}

async fn get_cumulative_balance_sheet(
    State(state): State<AppState>,
    company: AuthCompany,
) -> Result<Json<CumulativeBalanceSheet>, ApiError> {
    let report = state
        .reports
        .cumulative_balance_sheet(company.company_id())
        .await
        .map_err(report_failed("cumulative_balance_sheet"))?;

    debug!(company_id = %company.company_id(), accounts = report.accounts.len(), "Cumulative balance sheet built");
    Ok(Json(report))
}

async fn get_journal(
    State(state): State<AppState>,
    company: AuthCompany,
) -> Result<Json<JournalReport>, ApiError> {
    let report = state
        .reports
        .journal(company.company_id())
        .await
        .map_err(report_failed("journal"))?;

    Ok(Json(report))
}
