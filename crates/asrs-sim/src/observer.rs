//! Run observer trait for progress reporting and data collection.

use crate::{RunIssue, Transaction, TransactionBatch};

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] as the
/// batch is produced.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait RunObserver {
    /// Called after each transaction is recorded (including flagged ones).
    fn on_transaction(&mut self, _tx: &Transaction) {}

    /// Called when a non-fatal issue is collected.
    fn on_issue(&mut self, _issue: &RunIssue) {}

    /// Called once with the completed batch before it is returned.
    fn on_run_end(&mut self, _batch: &TransactionBatch) {}
}

/// A [`RunObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
