//! Movement-rule validation for routed paths and graph connectivity.
//!
//! Routing already follows graph edges, so a violation here indicates a bug
//! in graph construction rather than in the router.  The simulator still
//! checks every stitched path: violations are recorded against the offending
//! transaction, never raised fatally.

use thiserror::Error;

use asrs_core::NodeId;

use crate::graph::WarehouseGraph;
use crate::{GridError, GridResult};

/// Why a path hop breaks the movement rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    /// Hop changes aisle and level simultaneously.
    Diagonal,
    /// Hop changes aisle at a level other than the first or top.
    HorizontalMidLevel,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::Diagonal => write!(f, "diagonal move"),
            ViolationKind::HorizontalMidLevel => write!(f, "horizontal move at mid level"),
        }
    }
}

/// A single illegal hop found in a path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} from {from} to {to}")]
pub struct PathViolation {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: ViolationKind,
}

/// Check every hop of `path` against the movement rules.
///
/// Hops into or out of the fulfillment zone are exempt — the zone sits
/// outside the rack grid.  Returns the first violation found.
pub fn validate_path(graph: &WarehouseGraph, path: &[NodeId]) -> Result<(), PathViolation> {
    let top = graph.config.levels - 1;

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (Some(a), Some(b)) = (graph.coord(from), graph.coord(to)) else {
            continue;
        };

        let aisle_diff = a.aisle.abs_diff(b.aisle);
        let level_diff = a.level.abs_diff(b.level);

        if aisle_diff > 0 && level_diff > 0 {
            return Err(PathViolation { from, to, kind: ViolationKind::Diagonal });
        }
        if aisle_diff > 0 && a.level != 0 && a.level != top {
            return Err(PathViolation { from, to, kind: ViolationKind::HorizontalMidLevel });
        }
    }
    Ok(())
}

/// Verify that every storage node can reach the fulfillment zone.
///
/// The builder emits every edge with a reverse twin, so forward reachability
/// from the zone is equivalent to reachability *to* it.  A failure means the
/// topology parameters produced a disconnected graph.
pub fn assert_connectivity(graph: &WarehouseGraph) -> GridResult<()> {
    let mut seen = vec![false; graph.node_count()];
    let fz = graph.fulfillment_zone();
    seen[fz.index()] = true;

    let mut stack = vec![fz];
    while let Some(node) = stack.pop() {
        for edge in graph.out_edges(node) {
            let next = graph.edge_to[edge.index()];
            if !seen[next.index()] {
                seen[next.index()] = true;
                stack.push(next);
            }
        }
    }

    for node in graph.storage_nodes() {
        if !seen[node.index()] {
            return Err(GridError::Config(match graph.coord(node) {
                Some(coord) => format!("storage node {coord} cannot reach the fulfillment zone"),
                None => format!("node {node} cannot reach the fulfillment zone"),
            }));
        }
    }
    Ok(())
}
