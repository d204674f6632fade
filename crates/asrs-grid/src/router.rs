//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `asrs-sim` calls routing via the [`Router`] trait, so alternative
//! strategies (A*, congestion-aware rerouting around blocked racks) can be
//! swapped in without touching the simulator.  The default [`DijkstraRouter`]
//! is sufficient for the synthetic grids this crate builds.
//!
//! # Cost units
//!
//! All costs are in **milliseconds** (u32) internally.  `Route` exposes
//! `total_secs: f64` for metric aggregation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use asrs_core::{EdgeId, NodeId};

use crate::graph::WarehouseGraph;
use crate::GridError;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the node sequence, the edges traversed,
/// and the totals needed by the metric layer.
#[derive(Debug, Clone)]
pub struct Route {
    /// Nodes visited in order, including both endpoints.
    pub nodes: Vec<NodeId>,
    /// Edges traversed in order; empty when `from == to`.
    pub edges: Vec<EdgeId>,
    /// Cumulative travel time in seconds.
    pub total_secs: f64,
    /// Cumulative physical distance in metres.
    pub total_length_m: f64,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Returns [`GridError::NoPath`] if the destination is unreachable;
/// `from == to` is handled as a trivial single-node route, not an error.
pub trait Router {
    fn route(&self, graph: &WarehouseGraph, from: NodeId, to: NodeId) -> Result<Route, GridError>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR warehouse graph, using
/// `edge_cost_ms` as the weight.  Ties are broken by ascending `NodeId` so
/// routes are deterministic.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &WarehouseGraph, from: NodeId, to: NodeId) -> Result<Route, GridError> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &WarehouseGraph, from: NodeId, to: NodeId) -> Result<Route, GridError> {
    if from == to {
        return Ok(Route {
            nodes: vec![from],
            edges: vec![],
            total_secs: 0.0,
            total_length_m: 0.0,
        });
    }

    let n = graph.node_count();
    // dist[v] = best known cost (ms) to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(graph, prev_edge, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost.saturating_add(graph.edge_cost_ms[edge.index()]);

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(GridError::NoPath { from, to })
}

fn reconstruct(
    graph: &WarehouseGraph,
    prev_edge: Vec<EdgeId>,
    from: NodeId,
    to: NodeId,
    total_ms: u32,
) -> Route {
    let mut edges = Vec::new();
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = graph.edge_from[e.index()];
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(from);
    let mut total_length_m = 0.0f64;
    for &e in &edges {
        nodes.push(graph.edge_to[e.index()]);
        total_length_m += graph.edge_length_m[e.index()] as f64;
    }

    Route {
        nodes,
        edges,
        total_secs: total_ms as f64 / 1_000.0,
        total_length_m,
    }
}
