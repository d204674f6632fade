//! Cost aggregation: system cost and cost per transaction.

/// Cost rate constants, all in currency units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostParams {
    /// Base operating cost per robot.
    pub base_cost_per_robot: f64,
    /// Upgrade surcharge per robot (0.0 for an un-upgraded fleet).
    pub upgrade_cost_per_robot: f64,
    /// Energy cost per metre traveled.
    pub energy_cost_per_meter: f64,
    /// Fixed maintenance cost per robot.
    pub maintenance_cost_per_robot: f64,
}

/// The aggregated cost picture for one run — read-only once computed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CostSummary {
    pub base: f64,
    pub upgrade: f64,
    pub energy: f64,
    pub maintenance: f64,
    /// Base + Upgrade + Energy + Maintenance.
    pub system_cost: f64,
    /// `system_cost / total_transactions`; `NaN` when the batch is empty.
    pub cost_per_transaction: f64,
    /// Set when `total_transactions` was zero — the NaN above is a reported
    /// sentinel, not a computation result.
    pub divided_by_zero: bool,
}

impl CostSummary {
    /// Aggregate the run's costs.
    ///
    /// A zero `total_transactions` degrades `cost_per_transaction` to `NaN`
    /// and sets `divided_by_zero` rather than failing the batch.
    pub fn compute(
        params: &CostParams,
        robots: u16,
        total_distance_m: f64,
        total_transactions: u64,
    ) -> CostSummary {
        let fleet = robots as f64;
        let base = params.base_cost_per_robot * fleet;
        let upgrade = params.upgrade_cost_per_robot * fleet;
        let energy = params.energy_cost_per_meter * total_distance_m;
        let maintenance = params.maintenance_cost_per_robot * fleet;
        let system_cost = base + upgrade + energy + maintenance;

        let divided_by_zero = total_transactions == 0;
        let cost_per_transaction = if divided_by_zero {
            f64::NAN
        } else {
            system_cost / total_transactions as f64
        };

        CostSummary {
            base,
            upgrade,
            energy,
            maintenance,
            system_cost,
            cost_per_transaction,
            divided_by_zero,
        }
    }
}
