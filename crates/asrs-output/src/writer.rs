//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, OverlapRow, RunSummaryRow, TransactionRow};

/// Trait implemented by output backends (currently CSV).
pub trait OutputWriter {
    /// Write a batch of transaction rows.
    fn write_transactions(&mut self, rows: &[TransactionRow]) -> OutputResult<()>;

    /// Write the per-node overlap rows.
    fn write_overlaps(&mut self, rows: &[OverlapRow]) -> OutputResult<()>;

    /// Write the one-line run summary.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
