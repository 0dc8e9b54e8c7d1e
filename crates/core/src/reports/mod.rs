//! Financial report generation.
//!
//! This module turns a company's ledger entries into:
//! - Trial Balance (per account per month)
//! - Monthly Balance Sheet
//! - Cumulative Balance Sheet
//! - Journal (entries as recorded)
//!
//! The builders on [`ReportService`] are pure; [`ReportGenerator`] loads the
//! entries from an [`EntryStore`](crate::ledger::EntryStore) first.

pub mod error;
pub mod generator;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use generator::{ReportGenerator, ReportSettings};
pub use service::ReportService;
pub use types::*;
