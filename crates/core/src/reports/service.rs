//! Report generation service.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use livro_shared::types::CompanyId;

use super::types::{
    ClassifiedAccount, CumulativeBalanceSheet, JournalLine, JournalReport, MonthlyBalance,
    MonthlyBalanceSheet, TrialBalanceMonth, TrialBalanceReport, TrialBalanceRow,
    TrialBalanceTotals,
};
use crate::ledger::{
    AccountTotals, Classification, EquityAccounts, Entry, GroupBy, GroupKey, classify,
    group_and_sum,
};

/// Service for generating financial reports from ledger entries.
///
/// Every builder is a pure function of its input; calling one twice on the
/// same entries yields the same report.
pub struct ReportService;

impl ReportService {
    /// Generates the trial balance: one row per account per month.
    ///
    /// Rows are ordered by month, then account, both ascending.
    #[must_use]
    pub fn generate_trial_balance(company_id: CompanyId, entries: &[Entry]) -> TrialBalanceReport {
        let mut rows: Vec<TrialBalanceRow> = group_and_sum(entries, GroupBy::AccountMonth)
            .into_iter()
            .map(|(key, totals)| TrialBalanceRow {
                month: key.month.unwrap_or_default(),
                account: key.account.unwrap_or_default(),
                total_debit: totals.total_debit,
                total_credit: totals.total_credit,
                net: totals.net(),
            })
            .collect();
        rows.sort_by(|a, b| a.month.cmp(&b.month).then_with(|| a.account.cmp(&b.account)));

        let total_debit: Decimal = rows.iter().map(|r| r.total_debit).sum();
        let total_credit: Decimal = rows.iter().map(|r| r.total_credit).sum();

        let mut months: Vec<TrialBalanceMonth> = Vec::new();
        for row in rows {
            match months.last_mut() {
                Some(current) if current.month == row.month => {
                    current.total_debit += row.total_debit;
                    current.total_credit += row.total_credit;
                    current.rows.push(row);
                }
                _ => months.push(TrialBalanceMonth {
                    month: row.month.clone(),
                    total_debit: row.total_debit,
                    total_credit: row.total_credit,
                    rows: vec![row],
                }),
            }
        }

        TrialBalanceReport {
            report_type: "trial_balance".to_string(),
            company_id,
            months,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: total_debit == total_credit,
            },
        }
    }

    /// Generates the monthly balance sheet.
    ///
    /// Months are ordered newest first; inside a month, accounts are ordered
    /// by their most recent entry, newest first.
    #[must_use]
    pub fn generate_monthly_balance_sheet(
        company_id: CompanyId,
        entries: &[Entry],
        equity: &EquityAccounts,
    ) -> MonthlyBalanceSheet {
        let mut by_month: BTreeMap<String, Vec<ClassifiedAccount>> = BTreeMap::new();
        for (key, totals) in group_and_sum(entries, GroupBy::AccountMonth) {
            let account = Self::classified(&key, &totals, equity);
            by_month
                .entry(key.month.unwrap_or_default())
                .or_default()
                .push(account);
        }

        let months = by_month
            .into_iter()
            .rev()
            .map(|(month, mut accounts)| {
                Self::sort_most_recent_first(&mut accounts);
                MonthlyBalance {
                    month,
                    total_assets: Self::section_total(&accounts, Classification::Asset),
                    total_liabilities: Self::section_total(&accounts, Classification::Liability),
                    total_equity: Self::section_total(&accounts, Classification::Equity),
                    total_debits: accounts.iter().map(|a| a.total_debit).sum(),
                    total_credits: accounts.iter().map(|a| a.total_credit).sum(),
                    accounts,
                }
            })
            .collect();

        MonthlyBalanceSheet {
            report_type: "monthly_balance_sheet".to_string(),
            company_id,
            months,
        }
    }

    /// Generates the cumulative balance sheet: one row per account across
    /// all months.
    #[must_use]
    pub fn generate_cumulative_balance_sheet(
        company_id: CompanyId,
        entries: &[Entry],
        equity: &EquityAccounts,
    ) -> CumulativeBalanceSheet {
        let mut accounts: Vec<ClassifiedAccount> = group_and_sum(entries, GroupBy::Account)
            .iter()
            .map(|(key, totals)| Self::classified(key, totals, equity))
            .collect();
        Self::sort_most_recent_first(&mut accounts);

        CumulativeBalanceSheet {
            report_type: "cumulative_balance_sheet".to_string(),
            company_id,
            total_assets: Self::section_total(&accounts, Classification::Asset),
            total_liabilities: Self::section_total(&accounts, Classification::Liability),
            total_equity: Self::section_total(&accounts, Classification::Equity),
            accounts,
        }
    }

    /// Generates the journal: every entry as recorded, newest first.
    #[must_use]
    pub fn generate_journal(company_id: CompanyId, mut entries: Vec<Entry>) -> JournalReport {
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        JournalReport {
            report_type: "journal".to_string(),
            company_id,
            entries: entries
                .into_iter()
                .map(|e| JournalLine {
                    id: e.id,
                    recorded_on: e.created_at.format("%Y-%m-%d").to_string(),
                    account: e.account,
                    debit: e.debit,
                    credit: e.credit,
                    description: e.description,
                    month: e.month,
                    created_at: e.created_at,
                })
                .collect(),
        }
    }

    fn classified(key: &GroupKey, totals: &AccountTotals, equity: &EquityAccounts) -> ClassifiedAccount {
        ClassifiedAccount {
            account: key.account().unwrap_or_default().to_string(),
            month: key.month.clone(),
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
            net: totals.net(),
            classification: classify(key, totals, equity),
            latest_entry_at: totals.latest_entry_at,
        }
    }

    fn sort_most_recent_first(accounts: &mut [ClassifiedAccount]) {
        accounts.sort_by(|a, b| {
            b.latest_entry_at
                .cmp(&a.latest_entry_at)
                .then_with(|| a.account.cmp(&b.account))
        });
    }

    fn section_total(accounts: &[ClassifiedAccount], class: Classification) -> Decimal {
        accounts
            .iter()
            .filter(|a| a.classification == class)
            .map(|a| a.net)
            .sum()
    }
}
