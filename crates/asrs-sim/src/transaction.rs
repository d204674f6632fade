//! Transaction records and the run's batch output.

use asrs_core::{NodeId, RobotId, TransactionId};
use asrs_grid::PathViolation;

// ── Transaction ───────────────────────────────────────────────────────────────

/// One simulated pick request, immutable once recorded.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: TransactionId,
    /// Robot serving this pick (round-robin by transaction index).
    pub robot: RobotId,
    /// Target storage node.
    pub target: NodeId,
    /// Full node path: fulfillment zone → target → fulfillment zone.
    pub path: Vec<NodeId>,
    /// Travel time over both legs, seconds.
    pub travel_secs: f64,
    /// Fixed extraction time at the rack, seconds.
    pub extraction_secs: f64,
    /// Physical distance over both legs, metres.
    pub length_m: f64,
    /// Set when the stitched path broke a movement rule.  The transaction
    /// stays in the batch, flagged — never silently dropped.
    pub violation: Option<PathViolation>,
}

impl Transaction {
    /// Travel plus extraction time.
    #[inline]
    pub fn total_secs(&self) -> f64 {
        self.travel_secs + self.extraction_secs
    }

    /// `true` if the path passed movement-rule validation.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }
}

// ── RunIssue ──────────────────────────────────────────────────────────────────

/// A non-fatal problem recorded during a run.
#[derive(Debug, Clone)]
pub enum RunIssue {
    /// Routing failed for a transaction; the transaction was skipped.
    Routing {
        transaction: TransactionId,
        target: NodeId,
        message: String,
    },
    /// A routed path broke the movement rules; the transaction was flagged.
    InvalidPath {
        transaction: TransactionId,
        violation: PathViolation,
    },
}

impl std::fmt::Display for RunIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunIssue::Routing { transaction, target, message } => {
                write!(f, "{transaction}: no route to {target}: {message}")
            }
            RunIssue::InvalidPath { transaction, violation } => {
                write!(f, "{transaction}: invalid path: {violation}")
            }
        }
    }
}

// ── TransactionBatch ──────────────────────────────────────────────────────────

/// The completed output of one run: transactions in assignment order plus
/// every issue collected along the way.
#[derive(Debug, Default)]
pub struct TransactionBatch {
    pub transactions: Vec<Transaction>,
    pub issues: Vec<RunIssue>,
}

impl TransactionBatch {
    /// Transactions whose paths passed validation.
    pub fn valid_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| t.is_valid())
    }

    /// Total travel time across valid transactions, seconds.
    pub fn total_travel_secs(&self) -> f64 {
        self.valid_transactions().map(|t| t.travel_secs).sum()
    }

    /// Total physical distance across valid transactions, metres.
    pub fn total_length_m(&self) -> f64 {
        self.valid_transactions().map(|t| t.length_m).sum()
    }

    /// Mean total transaction time over valid transactions; 0.0 for an
    /// empty batch.
    pub fn avg_transaction_secs(&self) -> f64 {
        let (mut sum, mut count) = (0.0, 0u32);
        for t in self.valid_transactions() {
            sum += t.total_secs();
            count += 1;
        }
        if count == 0 { 0.0 } else { sum / count as f64 }
    }
}
