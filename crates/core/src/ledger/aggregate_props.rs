//! Property-based tests for aggregation and classification.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use livro_shared::types::{CompanyId, EntryId};

use super::aggregate::{GroupBy, group_and_sum};
use super::classify::{Classification, EquityAccounts, classify_account};
use super::entry::Entry;

/// Strategy for an optional amount in cents, occasionally missing.
fn amount() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        1 => Just(None),
        6 => (0i64..10_000_000i64).prop_map(|cents| Some(Decimal::new(cents, 2))),
    ]
}

fn account() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Caixa", "Bancos", "Fornecedores", "Capital Social"])
        .prop_map(String::from)
}

fn month() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["2024-01", "2024-02", "2024-03"]).prop_map(String::from)
}

fn entry() -> impl Strategy<Value = Entry> {
    (account(), month(), amount(), amount(), 0i64..10_000).prop_map(
        |(account, month, debit, credit, minutes)| Entry {
            id: EntryId::new(),
            company_id: CompanyId::from_uuid(uuid::Uuid::nil()),
            account,
            debit,
            credit,
            description: String::new(),
            month,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(minutes),
        },
    )
}

fn group_by() -> impl Strategy<Value = GroupBy> {
    prop_oneof![
        Just(GroupBy::Account),
        Just(GroupBy::Month),
        Just(GroupBy::AccountMonth),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Grouping conserves debit and credit totals.
    #[test]
    fn prop_grouping_conserves_totals(
        entries in prop::collection::vec(entry(), 0..60),
        mode in group_by(),
    ) {
        let groups = group_and_sum(&entries, mode);

        let grouped_debit: Decimal = groups.values().map(|t| t.total_debit).sum();
        let grouped_credit: Decimal = groups.values().map(|t| t.total_credit).sum();
        let raw_debit: Decimal = entries.iter().map(Entry::debit_amount).sum();
        let raw_credit: Decimal = entries.iter().map(Entry::credit_amount).sum();

        prop_assert_eq!(grouped_debit, raw_debit);
        prop_assert_eq!(grouped_credit, raw_credit);
    }

    /// No entry is dropped and no group is empty.
    #[test]
    fn prop_every_entry_is_counted_once(
        entries in prop::collection::vec(entry(), 0..60),
        mode in group_by(),
    ) {
        let groups = group_and_sum(&entries, mode);

        let counted: usize = groups.values().map(|t| t.entry_count).sum();
        prop_assert_eq!(counted, entries.len());
        prop_assert!(groups.values().all(|t| t.entry_count > 0));
    }

    /// Input order does not change the result.
    #[test]
    fn prop_grouping_is_order_insensitive(
        entries in prop::collection::vec(entry(), 0..60),
        mode in group_by(),
    ) {
        let forward = group_and_sum(&entries, mode);
        let reversed = group_and_sum(entries.iter().rev(), mode);

        prop_assert_eq!(forward, reversed);
    }

    /// Equity accounts are equity whatever the sign of the net.
    #[test]
    fn prop_equity_override(cents in -10_000_000i64..10_000_000i64) {
        let net = Decimal::new(cents, 2);
        let equity = EquityAccounts::cumulative_default();

        prop_assert_eq!(
            classify_account(Some("Capital Social"), net, &equity),
            Classification::Equity
        );
        prop_assert_eq!(
            classify_account(Some("Lucros acumulados"), net, &equity),
            Classification::Equity
        );
    }

    /// Outside the equity set the classification follows the sign.
    #[test]
    fn prop_sign_classification(cents in -10_000_000i64..10_000_000i64) {
        let net = Decimal::new(cents, 2);
        let class = classify_account(Some("Caixa"), net, &EquityAccounts::monthly_default());

        let expected = match cents.signum() {
            1 => Classification::Asset,
            -1 => Classification::Liability,
            _ => Classification::Neutral,
        };
        prop_assert_eq!(class, expected);
    }
}
