//! Report data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use livro_shared::types::{CompanyId, EntryId};

use crate::ledger::Classification;

/// One account in one month of the trial balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Month label.
    pub month: String,
    /// Account label.
    pub account: String,
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
    /// Debit minus credit.
    pub net: Decimal,
}

/// Trial balance rows of a single month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceMonth {
    /// Month label.
    pub month: String,
    /// Accounts of the month, ascending by account.
    pub rows: Vec<TrialBalanceRow>,
    /// Total debit of the month.
    pub total_debit: Decimal,
    /// Total credit of the month.
    pub total_credit: Decimal,
}

/// Trial balance totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits. Informational only.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Report type identifier.
    pub report_type: String,
    /// Company the report belongs to.
    pub company_id: CompanyId,
    /// Months in ascending order.
    pub months: Vec<TrialBalanceMonth>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

impl TrialBalanceReport {
    /// All rows, ascending by month then account.
    pub fn rows(&self) -> impl Iterator<Item = &TrialBalanceRow> {
        self.months.iter().flat_map(|m| m.rows.iter())
    }
}

/// An aggregated account with its statement category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAccount {
    /// Account label.
    pub account: String,
    /// Month label, when grouped by month.
    pub month: Option<String>,
    /// Total debit amount.
    pub total_debit: Decimal,
    /// Total credit amount.
    pub total_credit: Decimal,
    /// Debit minus credit.
    pub net: Decimal,
    /// Statement category.
    pub classification: Classification,
    /// Creation time of the most recent contributing entry.
    pub latest_entry_at: DateTime<Utc>,
}

/// Balance sheet of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBalance {
    /// Month label.
    pub month: String,
    /// Accounts, most recently touched first.
    pub accounts: Vec<ClassifiedAccount>,
    /// Sum of net over asset accounts.
    pub total_assets: Decimal,
    /// Sum of net over liability accounts (negative or zero).
    pub total_liabilities: Decimal,
    /// Sum of net over equity accounts.
    pub total_equity: Decimal,
    /// Raw debits of every account in the month.
    pub total_debits: Decimal,
    /// Raw credits of every account in the month.
    pub total_credits: Decimal,
}

/// Monthly balance sheet ("balancete").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBalanceSheet {
    /// Report type identifier.
    pub report_type: String,
    /// Company the report belongs to.
    pub company_id: CompanyId,
    /// Months in descending order.
    pub months: Vec<MonthlyBalance>,
}

/// Balance sheet across the whole history ("balanço").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeBalanceSheet {
    /// Report type identifier.
    pub report_type: String,
    /// Company the report belongs to.
    pub company_id: CompanyId,
    /// One row per account, most recently touched first.
    pub accounts: Vec<ClassifiedAccount>,
    /// Sum of net over asset accounts.
    pub total_assets: Decimal,
    /// Sum of net over liability accounts (negative or zero).
    pub total_liabilities: Decimal,
    /// Sum of net over equity accounts.
    pub total_equity: Decimal,
}

/// A recorded entry as shown in the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Entry ID.
    pub id: EntryId,
    /// Account label.
    pub account: String,
    /// Debit amount, if any was recorded.
    pub debit: Option<Decimal>,
    /// Credit amount, if any was recorded.
    pub credit: Option<Decimal>,
    /// Description.
    pub description: String,
    /// Month label.
    pub month: String,
    /// Recording date as `YYYY-MM-DD` (UTC).
    pub recorded_on: String,
    /// Recording timestamp.
    pub created_at: DateTime<Utc>,
}

/// Journal report ("diário").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalReport {
    /// Report type identifier.
    pub report_type: String,
    /// Company the report belongs to.
    pub company_id: CompanyId,
    /// Entries, newest first.
    pub entries: Vec<JournalLine>,
}
