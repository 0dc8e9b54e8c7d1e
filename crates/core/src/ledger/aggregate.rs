//! Grouping and summation of ledger entries.
//!
//! Entries are folded into per-key totals. Debit and credit are summed
//! independently and the fold is order-insensitive, so the same entry set
//! always yields the same groups.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// Which entry fields form the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// One group per account, across all months.
    Account,
    /// One group per month, across all accounts.
    Month,
    /// One group per account per month.
    AccountMonth,
}

impl GroupBy {
    /// Builds the grouping key of an entry under this mode.
    #[must_use]
    pub fn key_for(self, entry: &Entry) -> GroupKey {
        match self {
            Self::Account => GroupKey {
                account: Some(entry.account.clone()),
                month: None,
            },
            Self::Month => GroupKey {
                account: None,
                month: Some(entry.month.clone()),
            },
            Self::AccountMonth => GroupKey {
                account: Some(entry.account.clone()),
                month: Some(entry.month.clone()),
            },
        }
    }
}

/// Composite grouping key.
///
/// A component is `Some` exactly when the [`GroupBy`] mode selects it.
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    /// Account label.
    pub account: Option<String>,
    /// Month label.
    pub month: Option<String>,
}

impl GroupKey {
    /// Account component, if grouped by account.
    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Month component, if grouped by month.
    #[must_use]
    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }
}

/// Summed amounts of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTotals {
    /// Sum of debits.
    pub total_debit: Decimal,
    /// Sum of credits.
    pub total_credit: Decimal,
    /// Number of contributing entries.
    pub entry_count: usize,
    /// Creation time of the most recent contributing entry.
    pub latest_entry_at: DateTime<Utc>,
}

impl AccountTotals {
    /// Totals of a single entry.
    #[must_use]
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            total_debit: entry.debit_amount(),
            total_credit: entry.credit_amount(),
            entry_count: 1,
            latest_entry_at: entry.created_at,
        }
    }

    /// Combines two partial totals of the same group.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            total_debit: self.total_debit + other.total_debit,
            total_credit: self.total_credit + other.total_credit,
            entry_count: self.entry_count + other.entry_count,
            latest_entry_at: self.latest_entry_at.max(other.latest_entry_at),
        }
    }

    /// Debit minus credit.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.total_debit - self.total_credit
    }
}

/// Groups entries by the selected key and sums each group.
///
/// Every entry lands in exactly one group; no group is ever empty.
pub fn group_and_sum<'a, I>(entries: I, group_by: GroupBy) -> BTreeMap<GroupKey, AccountTotals>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().fold(BTreeMap::new(), |mut groups, entry| {
        let key = group_by.key_for(entry);
        let totals = match groups.remove(&key) {
            Some(existing) => AccountTotals::combine(existing, AccountTotals::from_entry(entry)),
            None => AccountTotals::from_entry(entry),
        };
        groups.insert(key, totals);
        groups
    })
}
