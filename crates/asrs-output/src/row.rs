//! Plain data row types written by output backends, plus conversions from
//! the simulation and metric layers.

use asrs_grid::WarehouseGraph;
use asrs_metrics::{BatchStats, CostSummary, OverlapReport};
use asrs_sim::{Transaction, TransactionBatch};

/// One recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionRow {
    pub transaction_id: u32,
    pub robot_id: u16,
    pub target_aisle: u16,
    pub target_level: u16,
    pub travel_secs: f64,
    pub extraction_secs: f64,
    pub total_secs: f64,
    /// `false` when the path broke a movement rule.
    pub valid: bool,
}

impl TransactionRow {
    pub fn from_transaction(tx: &Transaction, graph: &WarehouseGraph) -> Self {
        // Targets are always storage nodes; a missing coordinate would mean
        // the batch and graph are mismatched, so fall back to the sentinel.
        let (aisle, level) = graph
            .coord(tx.target)
            .map(|c| (c.aisle, c.level))
            .unwrap_or((u16::MAX, u16::MAX));
        Self {
            transaction_id: tx.id.0,
            robot_id: tx.robot.0,
            target_aisle: aisle,
            target_level: level,
            travel_secs: tx.travel_secs,
            extraction_secs: tx.extraction_secs,
            total_secs: tx.total_secs(),
            valid: tx.is_valid(),
        }
    }

    pub fn from_batch(batch: &TransactionBatch, graph: &WarehouseGraph) -> Vec<Self> {
        batch
            .transactions
            .iter()
            .map(|tx| Self::from_transaction(tx, graph))
            .collect()
    }
}

/// Contention at one storage node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapRow {
    pub aisle: u16,
    pub level: u16,
    pub visits: u32,
    pub overlaps: u32,
    pub delay_secs: f64,
}

impl OverlapRow {
    pub fn from_report(report: &OverlapReport, graph: &WarehouseGraph) -> Vec<Self> {
        report
            .per_node
            .iter()
            .filter_map(|n| {
                let coord = graph.coord(n.node)?;
                Some(Self {
                    aisle: coord.aisle,
                    level: coord.level,
                    visits: n.visits,
                    overlaps: n.overlaps,
                    delay_secs: n.delay_secs,
                })
            })
            .collect()
    }
}

/// One-line roll-up of the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummaryRow {
    pub transactions: u64,
    pub valid: u64,
    pub flagged: u64,
    pub avg_transaction_secs: f64,
    pub total_distance_m: f64,
    pub total_overlaps: u64,
    pub total_delay_secs: f64,
    pub system_cost: f64,
    /// `NaN` when the run recorded no transactions.
    pub cost_per_transaction: f64,
}

impl RunSummaryRow {
    pub fn new(stats: &BatchStats, overlaps: &OverlapReport, cost: &CostSummary) -> Self {
        Self {
            transactions: stats.transactions as u64,
            valid: stats.valid as u64,
            flagged: stats.flagged as u64,
            avg_transaction_secs: stats.avg_transaction_secs,
            total_distance_m: stats.total_length_m,
            total_overlaps: overlaps.total_overlaps,
            total_delay_secs: overlaps.total_delay_secs,
            system_cost: cost.system_cost,
            cost_per_transaction: cost.cost_per_transaction,
        }
    }
}
