//! Ledger entries and the aggregation engine.
//!
//! This module implements:
//! - Ledger entries and their intake type
//! - The entry store seam and an in-memory store
//! - Grouping and summation by account and/or month
//! - Sign-based statement classification

pub mod aggregate;
pub mod classify;
pub mod entry;
pub mod store;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::{AccountTotals, GroupBy, GroupKey, group_and_sum};
pub use classify::{Classification, EquityAccounts, classify, classify_account};
pub use entry::{Entry, NewEntry, parse_amount};
pub use store::{EntryFilter, EntryOrder, EntryStore, MemoryEntryStore, StoreError};
