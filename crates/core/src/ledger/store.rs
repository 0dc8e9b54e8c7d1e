//! The entry store seam.
//!
//! Report builders never talk to a database directly; they read through
//! [`EntryStore`]. The database crate provides the persistent implementation,
//! and [`MemoryEntryStore`] backs tests and local runs.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use livro_shared::types::CompanyId;

use super::entry::{Entry, NewEntry};

/// Errors surfaced by an entry store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The entry cannot be stored as given.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading entries failed.
    #[error("Failed to query entries: {0}")]
    Query(String),

    /// Writing the entry failed.
    #[error("Failed to persist entry: {0}")]
    Persistence(String),
}

/// Ordering of query results by creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Most recent first.
    #[default]
    NewestFirst,
    /// Oldest first.
    OldestFirst,
}

/// Optional narrowing of a company's entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Exact account label.
    pub account: Option<String>,
    /// Exact month label.
    pub month: Option<String>,
    /// Result ordering.
    pub order: EntryOrder,
}

impl EntryFilter {
    /// Returns true if the entry passes the account and month filters.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.account.as_ref().is_none_or(|a| *a == entry.account)
            && self.month.as_ref().is_none_or(|m| *m == entry.month)
    }
}

/// Append-only storage of ledger entries, scoped by company.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Stores a new entry, assigning its id and timestamp.
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` when the owning company is missing,
    /// `StoreError::Persistence` when the write fails.
    async fn append(&self, entry: NewEntry) -> Result<Entry, StoreError>;

    /// Returns the entries of one company.
    ///
    /// # Errors
    ///
    /// `StoreError::Query` when the read fails.
    async fn query(
        &self,
        company_id: CompanyId,
        filter: &EntryFilter,
    ) -> Result<Vec<Entry>, StoreError>;
}

/// In-memory entry store.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: RwLock<Vec<Entry>>,
}

impl MemoryEntryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding already stamped entries.
    #[must_use]
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn append(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        let entry = entry.stamp(Utc::now())?;
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn query(
        &self,
        company_id: CompanyId,
        filter: &EntryFilter,
    ) -> Result<Vec<Entry>, StoreError> {
        let mut found: Vec<Entry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.company_id == company_id && filter.matches(e))
            .cloned()
            .collect();

        match filter.order {
            EntryOrder::NewestFirst => {
                found.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            }
            EntryOrder::OldestFirst => {
                found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
            }
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn new_entry(company_id: CompanyId, account: &str, month: &str) -> NewEntry {
        NewEntry {
            company_id: Some(company_id),
            account: account.to_string(),
            debit: Some(dec!(10)),
            credit: None,
            description: String::new(),
            month: month.to_string(),
        }
    }

    fn stamped(company_id: CompanyId, account: &str, minutes: i64) -> Entry {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        new_entry(company_id, account, "2024-01")
            .stamp(base + Duration::minutes(minutes))
            .unwrap()
    }

    #[tokio::test]
    async fn test_append_assigns_id_and_returns_entry() {
        let store = MemoryEntryStore::new();
        let company_id = CompanyId::new();

        let stored = store
            .append(new_entry(company_id, "Caixa", "2024-01"))
            .await
            .unwrap();

        assert_eq!(stored.company_id, company_id);
        let all = store.query(company_id, &EntryFilter::default()).await.unwrap();
        assert_eq!(all, vec![stored]);
    }

    #[tokio::test]
    async fn test_append_without_company_is_rejected() {
        let store = MemoryEntryStore::new();
        let input = NewEntry {
            account: "Caixa".to_string(),
            ..Default::default()
        };

        let result = store.append(input).await;

        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_query_is_scoped_to_company() {
        let mine = CompanyId::new();
        let theirs = CompanyId::new();
        let store = MemoryEntryStore::with_entries(vec![
            stamped(mine, "Caixa", 0),
            stamped(theirs, "Caixa", 1),
        ]);

        let found = store.query(mine, &EntryFilter::default()).await.unwrap();

        assert_eq!(found.len(), 1);
        assert!(found.iter().all(|e| e.company_id == mine));
    }

    #[tokio::test]
    async fn test_query_orders_newest_first_by_default() {
        let company_id = CompanyId::new();
        let store = MemoryEntryStore::with_entries(vec![
            stamped(company_id, "Caixa", 0),
            stamped(company_id, "Bancos", 10),
            stamped(company_id, "Estoque", 5),
        ]);

        let found = store
            .query(company_id, &EntryFilter::default())
            .await
            .unwrap();
        let accounts: Vec<&str> = found.iter().map(|e| e.account.as_str()).collect();

        assert_eq!(accounts, vec!["Bancos", "Estoque", "Caixa"]);

        let oldest_first = EntryFilter {
            order: EntryOrder::OldestFirst,
            ..Default::default()
        };
        let found = store.query(company_id, &oldest_first).await.unwrap();
        let accounts: Vec<&str> = found.iter().map(|e| e.account.as_str()).collect();

        assert_eq!(accounts, vec!["Caixa", "Estoque", "Bancos"]);
    }

    #[tokio::test]
    async fn test_query_filters_are_exact() {
        let company_id = CompanyId::new();
        let store = MemoryEntryStore::new();
        store
            .append(new_entry(company_id, "Caixa", "2024-01"))
            .await
            .unwrap();
        store
            .append(new_entry(company_id, "caixa", "2024-01"))
            .await
            .unwrap();
        store
            .append(new_entry(company_id, "Caixa", "2024-02"))
            .await
            .unwrap();

        let filter = EntryFilter {
            account: Some("Caixa".to_string()),
            month: Some("2024-01".to_string()),
            ..Default::default()
        };
        let found = store.query(company_id, &filter).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].account, "Caixa");
        assert_eq!(found[0].month, "2024-01");
    }
}
