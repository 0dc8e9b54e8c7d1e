//! Core business logic for Livro.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Ledger entries, grouping, classification and report building live here.
//!
//! # Modules
//!
//! - `ledger` - Entries, the entry store seam, aggregation and classification
//! - `reports` - Trial balance, balance sheets and the journal

pub mod ledger;
pub mod reports;
