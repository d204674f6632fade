//! Overlap analysis: same-node contention across the transaction batch.
//!
//! # Policy
//!
//! A storage node targeted by `k ≥ 2` valid transactions records `k − 1`
//! overlap occurrences — the first access is free, every further access
//! contends with an earlier one.  Each occurrence costs a configured flat
//! delay.  Flagged (rule-violating) transactions never executed their path
//! and are excluded from grouping.

use rustc_hash::FxHashMap;

use asrs_core::NodeId;
use asrs_grid::WarehouseGraph;
use asrs_sim::TransactionBatch;

// ── Parameters ────────────────────────────────────────────────────────────────

/// Tunable constants of the overlap-delay policy.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapParams {
    /// Delay charged per overlap occurrence, seconds.
    pub delay_per_overlap_secs: f64,
}

impl Default for OverlapParams {
    /// 2.5 s per occurrence — the midpoint of the 1.5–3.5 s contention
    /// window observed in the reference study, made deterministic.
    fn default() -> Self {
        Self { delay_per_overlap_secs: 2.5 }
    }
}

// ── Report rows ───────────────────────────────────────────────────────────────

/// Contention at one storage node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeOverlap {
    pub node: NodeId,
    /// Valid transactions targeting this node.
    pub visits: u32,
    /// Overlap occurrences (`visits − 1`).
    pub overlaps: u32,
    pub delay_secs: f64,
}

/// Contention rolled up per aisle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AisleOverlap {
    pub aisle: u16,
    pub overlaps: u64,
    pub delay_secs: f64,
}

/// The completed overlap analysis — read-only once computed.
#[derive(Debug, Default)]
pub struct OverlapReport {
    pub total_overlaps: u64,
    pub total_delay_secs: f64,
    /// Mean delay per overlap occurrence; 0.0 when there are no overlaps.
    pub avg_delay_secs: f64,
    /// Contended nodes only, ascending by node id.
    pub per_node: Vec<NodeOverlap>,
    /// Aisle rollup of `per_node`, ascending by aisle.
    pub per_aisle: Vec<AisleOverlap>,
}

// ── Analysis ──────────────────────────────────────────────────────────────────

/// Group the batch by target node and tally contention.
pub fn analyze_overlaps(
    batch: &TransactionBatch,
    graph: &WarehouseGraph,
    params: &OverlapParams,
) -> OverlapReport {
    let mut visits: FxHashMap<NodeId, u32> = FxHashMap::default();
    for tx in batch.valid_transactions() {
        *visits.entry(tx.target).or_insert(0) += 1;
    }

    let mut per_node: Vec<NodeOverlap> = visits
        .into_iter()
        .filter(|&(_, k)| k >= 2)
        .map(|(node, k)| {
            let overlaps = k - 1;
            NodeOverlap {
                node,
                visits: k,
                overlaps,
                delay_secs: overlaps as f64 * params.delay_per_overlap_secs,
            }
        })
        .collect();
    per_node.sort_by_key(|n| n.node);

    let mut aisle_map: FxHashMap<u16, (u64, f64)> = FxHashMap::default();
    for n in &per_node {
        if let Some(coord) = graph.coord(n.node) {
            let entry = aisle_map.entry(coord.aisle).or_insert((0, 0.0));
            entry.0 += n.overlaps as u64;
            entry.1 += n.delay_secs;
        }
    }
    let mut per_aisle: Vec<AisleOverlap> = aisle_map
        .into_iter()
        .map(|(aisle, (overlaps, delay_secs))| AisleOverlap { aisle, overlaps, delay_secs })
        .collect();
    per_aisle.sort_by_key(|a| a.aisle);

    let total_overlaps: u64 = per_node.iter().map(|n| n.overlaps as u64).sum();
    let total_delay_secs: f64 = per_node.iter().map(|n| n.delay_secs).sum();
    let avg_delay_secs = if total_overlaps == 0 {
        0.0
    } else {
        total_delay_secs / total_overlaps as f64
    };

    OverlapReport {
        total_overlaps,
        total_delay_secs,
        avg_delay_secs,
        per_node,
        per_aisle,
    }
}
