//! Run configuration.

use crate::{SimError, SimResult};

/// Parameters of one simulation run.
///
/// Typically assembled by the application layer (dashboard, scenario sweep)
/// and validated before any transaction is generated.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Robot fleet size.  Robots are a logical partition of the batch —
    /// assignment is round-robin, no parallel execution is modeled.
    pub robots: u16,
    /// Number of pick transactions to simulate.
    pub transactions: u32,
    /// Fixed time to extract an item once the robot reaches the rack.
    pub extraction_secs: f64,
    /// Seed for target selection.  [`Simulator::run`][crate::Simulator::run]
    /// derives its sampling stream from this value, so equal configs yield
    /// identical batches.
    pub seed: u64,
}

impl RunConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.robots == 0 {
            return Err(SimError::Config("robot count must be positive".into()));
        }
        if self.transactions == 0 {
            return Err(SimError::Config("transaction count must be positive".into()));
        }
        if self.extraction_secs < 0.0 || !self.extraction_secs.is_finite() {
            return Err(SimError::Config(format!(
                "extraction time must be non-negative, got {}",
                self.extraction_secs
            )));
        }
        Ok(())
    }
}
