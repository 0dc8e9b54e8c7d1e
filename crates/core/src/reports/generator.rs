//! Report generation over an entry store.
//!
//! Each call re-queries the store for the company and rebuilds the report
//! from scratch. Nothing is cached between calls.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use livro_shared::{ReportsConfig, types::CompanyId};

use super::error::ReportError;
use super::service::ReportService;
use super::types::{CumulativeBalanceSheet, JournalReport, MonthlyBalanceSheet, TrialBalanceReport};
use crate::ledger::{Entry, EntryFilter, EntryOrder, EntryStore, EquityAccounts};

/// Settings shared by all report builders.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// Equity accounts of the monthly balance sheet.
    pub monthly_equity: EquityAccounts,
    /// Equity accounts of the cumulative balance sheet.
    pub cumulative_equity: EquityAccounts,
    /// Upper bound for loading a company's entries.
    pub query_timeout: Duration,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            monthly_equity: EquityAccounts::monthly_default(),
            cumulative_equity: EquityAccounts::cumulative_default(),
            query_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&ReportsConfig> for ReportSettings {
    fn from(config: &ReportsConfig) -> Self {
        Self {
            monthly_equity: EquityAccounts::new(config.monthly_equity_accounts.iter().cloned()),
            cumulative_equity: EquityAccounts::new(
                config.cumulative_equity_accounts.iter().cloned(),
            ),
            query_timeout: Duration::from_millis(config.query_timeout_ms),
        }
    }
}

/// Builds reports for a company from the current contents of an entry store.
#[derive(Clone)]
pub struct ReportGenerator {
    store: Arc<dyn EntryStore>,
    settings: ReportSettings,
}

impl std::fmt::Debug for ReportGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportGenerator")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ReportGenerator {
    /// Creates a generator reading from `store`.
    #[must_use]
    pub fn new(store: Arc<dyn EntryStore>, settings: ReportSettings) -> Self {
        Self { store, settings }
    }

    /// Returns the settings in use.
    #[must_use]
    pub const fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Trial balance of the company.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the entries cannot be loaded in time.
    pub async fn trial_balance(&self, company_id: CompanyId) -> Result<TrialBalanceReport, ReportError> {
        let entries = self.load(company_id, EntryOrder::OldestFirst).await?;
        Ok(ReportService::generate_trial_balance(company_id, &entries))
    }

    /// Monthly balance sheet of the company.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the entries cannot be loaded in time.
    pub async fn monthly_balance_sheet(
        &self,
        company_id: CompanyId,
    ) -> Result<MonthlyBalanceSheet, ReportError> {
        let entries = self.load(company_id, EntryOrder::NewestFirst).await?;
        Ok(ReportService::generate_monthly_balance_sheet(
            company_id,
            &entries,
            &self.settings.monthly_equity,
        ))
    }

    /// Cumulative balance sheet of the company.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the entries cannot be loaded in time.
    pub async fn cumulative_balance_sheet(
        &self,
        company_id: CompanyId,
    ) -> Result<CumulativeBalanceSheet, ReportError> {
        let entries = self.load(company_id, EntryOrder::NewestFirst).await?;
        Ok(ReportService::generate_cumulative_balance_sheet(
            company_id,
            &entries,
            &self.settings.cumulative_equity,
        ))
    }

    /// Journal of the company.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` if the entries cannot be loaded in time.
    pub async fn journal(&self, company_id: CompanyId) -> Result<JournalReport, ReportError> {
        let entries = self.load(company_id, EntryOrder::NewestFirst).await?;
        Ok(ReportService::generate_journal(company_id, entries))
    }

    async fn load(&self, company_id: CompanyId, order: EntryOrder) -> Result<Vec<Entry>, ReportError> {
        let filter = EntryFilter {
            order,
            ..EntryFilter::default()
        };

        let entries = tokio::time::timeout(
            self.settings.query_timeout,
            self.store.query(company_id, &filter),
        )
        .await
        .map_err(|_| ReportError::Timeout(self.settings.query_timeout))??;

        debug!(%company_id, entries = entries.len(), "Loaded ledger entries");
        Ok(entries)
    }
}
