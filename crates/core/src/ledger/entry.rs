//! Ledger entry domain types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use livro_shared::types::{CompanyId, EntryId};

use super::store::StoreError;

/// A single stored ledger line: one account, a debit side and a credit side.
///
/// Amounts are optional because the intake path accepts whatever the caller
/// sends. A missing or non-numeric amount is kept as `None` and counts as zero
/// everywhere totals are computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier for this entry.
    pub id: EntryId,
    /// The company that owns this entry.
    pub company_id: CompanyId,
    /// Free-text account label, compared exactly.
    pub account: String,
    /// Debit amount, if a numeric one was supplied.
    pub debit: Option<Decimal>,
    /// Credit amount, if a numeric one was supplied.
    pub credit: Option<Decimal>,
    /// Description ("histórico").
    pub description: String,
    /// Month label, e.g. `2024-01`.
    pub month: String,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Debit amount with missing values counted as zero.
    #[must_use]
    pub fn debit_amount(&self) -> Decimal {
        self.debit.unwrap_or(Decimal::ZERO)
    }

    /// Credit amount with missing values counted as zero.
    #[must_use]
    pub fn credit_amount(&self) -> Decimal {
        self.credit.unwrap_or(Decimal::ZERO)
    }

    /// Debit minus credit.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit_amount() - self.credit_amount()
    }
}

/// Input for appending an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Owning company. Required; `None` fails validation.
    pub company_id: Option<CompanyId>,
    /// Account label.
    pub account: String,
    /// Debit amount.
    pub debit: Option<Decimal>,
    /// Credit amount.
    pub credit: Option<Decimal>,
    /// Description.
    pub description: String,
    /// Month label.
    pub month: String,
}

impl NewEntry {
    /// Assigns an id and timestamp, producing the entry to store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the owning company is missing or
    /// an amount does not fit [`check_amount`].
    pub fn stamp(self, created_at: DateTime<Utc>) -> Result<Entry, StoreError> {
        let Some(company_id) = self.company_id else {
            return Err(StoreError::Validation(
                "owning company id is required".to_string(),
            ));
        };
        check_amount("debit", self.debit)?;
        check_amount("credit", self.credit)?;

        Ok(Entry {
            id: EntryId::new(),
            company_id,
            account: self.account,
            debit: self.debit,
            credit: self.credit,
            description: self.description,
            month: self.month,
            created_at,
        })
    }
}

/// Digits allowed before the decimal point.
pub const AMOUNT_INTEGER_DIGITS: u32 = 15;

/// Digits allowed after the decimal point.
pub const AMOUNT_SCALE: u32 = 4;

/// Rejects amounts the ledger column cannot hold exactly.
///
/// Stored amounts are `NUMERIC(19, 4)`; keeping every amount inside that
/// range also keeps company totals far from `Decimal` overflow.
///
/// # Errors
///
/// Returns `StoreError::Validation` naming the offending side.
pub fn check_amount(side: &str, amount: Option<Decimal>) -> Result<(), StoreError> {
    let Some(amount) = amount else {
        return Ok(());
    };
    let limit = Decimal::from(10_u64.pow(AMOUNT_INTEGER_DIGITS));

    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(StoreError::Validation(format!(
            "{side} amount {amount} has more than {AMOUNT_SCALE} decimal places"
        )));
    }
    if amount.abs() >= limit {
        return Err(StoreError::Validation(format!(
            "{side} amount {amount} exceeds {AMOUNT_INTEGER_DIGITS} integer digits"
        )));
    }
    Ok(())
}

/// Parses a raw amount, returning `None` when it is not a number.
///
/// Surrounding whitespace is ignored. Negative values are accepted as given.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
