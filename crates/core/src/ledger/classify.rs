//! Statement classification of aggregated groups.
//!
//! Classification is inferred from the sign of the net balance, with a fixed
//! name-set of equity accounts overriding the sign. Accounts whose natural
//! balance differs from their economic type are misclassified; there is no
//! account master record to consult.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::{AccountTotals, GroupKey};

/// Balance sheet category of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Positive net, not an equity account.
    Asset,
    /// Negative net, not an equity account.
    Liability,
    /// Member of the equity name-set, whatever its sign.
    Equity,
    /// Zero net, not an equity account.
    Neutral,
}

impl Classification {
    /// Classifies by sign alone.
    #[must_use]
    pub fn from_net(net: Decimal) -> Self {
        if net > Decimal::ZERO {
            Self::Asset
        } else if net < Decimal::ZERO {
            Self::Liability
        } else {
            Self::Neutral
        }
    }
}

/// Account names always classified as equity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquityAccounts(BTreeSet<String>);

impl EquityAccounts {
    /// Creates a name-set from account labels.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Equity accounts of the monthly balance sheet.
    #[must_use]
    pub fn monthly_default() -> Self {
        Self::new(["Capital Social"])
    }

    /// Equity accounts of the cumulative balance sheet.
    #[must_use]
    pub fn cumulative_default() -> Self {
        Self::new(["Capital Social", "Lucros acumulados"])
    }

    /// Exact, case-sensitive membership.
    #[must_use]
    pub fn contains(&self, account: &str) -> bool {
        self.0.contains(account)
    }

    /// Iterates the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Classifies one aggregated group.
///
/// The net amount is never reinterpreted; an equity account keeps its sign.
#[must_use]
pub fn classify(key: &GroupKey, totals: &AccountTotals, equity: &EquityAccounts) -> Classification {
    classify_account(key.account(), totals.net(), equity)
}

/// Classifies an account label and net amount.
#[must_use]
pub fn classify_account(
    account: Option<&str>,
    net: Decimal,
    equity: &EquityAccounts,
) -> Classification {
    match account {
        Some(name) if equity.contains(name) => Classification::Equity,
        _ => Classification::from_net(net),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("Caixa", dec!(70), Classification::Asset)]
    #[case("Fornecedores", dec!(-120), Classification::Liability)]
    #[case("Bancos", dec!(0), Classification::Neutral)]
    #[case("Capital Social", dec!(-500), Classification::Equity)]
    #[case("Capital Social", dec!(500), Classification::Equity)]
    #[case("Capital Social", dec!(0), Classification::Equity)]
    #[case("capital social", dec!(-500), Classification::Liability)]
    fn test_classify_account(
        #[case] account: &str,
        #[case] net: Decimal,
        #[case] expected: Classification,
    ) {
        let equity = EquityAccounts::monthly_default();
        assert_eq!(classify_account(Some(account), net, &equity), expected);
    }

    #[test]
    fn test_profits_are_equity_only_in_cumulative_preset() {
        let net = dec!(-80);

        assert_eq!(
            classify_account(Some("Lucros acumulados"), net, &EquityAccounts::monthly_default()),
            Classification::Liability
        );
        assert_eq!(
            classify_account(
                Some("Lucros acumulados"),
                net,
                &EquityAccounts::cumulative_default()
            ),
            Classification::Equity
        );
    }

    #[test]
    fn test_month_only_group_is_sign_classified() {
        let equity = EquityAccounts::monthly_default();
        assert_eq!(
            classify_account(None, dec!(10), &equity),
            Classification::Asset
        );
    }

    #[test]
    fn test_equity_accounts_iter_is_sorted() {
        let equity = EquityAccounts::new(["Reservas", "Capital Social"]);
        let names: Vec<&str> = equity.iter().collect();
        assert_eq!(names, vec!["Capital Social", "Reservas"]);
    }
}
