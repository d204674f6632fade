//! Whole-batch statistics and throughput projections.

use asrs_sim::TransactionBatch;

/// Summary statistics over one completed batch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BatchStats {
    /// All recorded transactions, flagged included.
    pub transactions: usize,
    pub valid: usize,
    pub flagged: usize,
    /// Travel time over valid transactions, seconds.
    pub total_travel_secs: f64,
    /// Mean total (travel + extraction) time per valid transaction;
    /// 0.0 for an empty batch.
    pub avg_transaction_secs: f64,
    /// Distance over valid transactions, metres.
    pub total_length_m: f64,
}

impl BatchStats {
    pub fn from_batch(batch: &TransactionBatch) -> Self {
        let valid = batch.valid_transactions().count();
        Self {
            transactions: batch.transactions.len(),
            valid,
            flagged: batch.transactions.len() - valid,
            total_travel_secs: batch.total_travel_secs(),
            avg_transaction_secs: batch.avg_transaction_secs(),
            total_length_m: batch.total_length_m(),
        }
    }

    /// Projected fleet throughput in transactions per hour.
    ///
    /// Robots work the batch in parallel partitions, so throughput scales
    /// linearly with fleet size.  0.0 when the batch recorded no time.
    pub fn throughput_per_hour(&self, robots: u16) -> f64 {
        if self.avg_transaction_secs <= 0.0 {
            return 0.0;
        }
        3_600.0 / self.avg_transaction_secs * robots as f64
    }

    /// Projected transactions completed over a shift of `shift_hours`.
    pub fn transactions_per_shift(&self, robots: u16, shift_hours: f64) -> f64 {
        self.throughput_per_hour(robots) * shift_hours
    }
}
