//! Report error types.

use std::time::Duration;

use thiserror::Error;

use crate::ledger::StoreError;

/// Errors that can occur during report generation.
///
/// A report is either built from a complete snapshot or not at all.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The entry store could not be read.
    #[error("Failed to load ledger entries: {0}")]
    Query(#[from] StoreError),

    /// The entry store did not answer in time.
    #[error("Ledger query exceeded {0:?}")]
    Timeout(Duration),
}
