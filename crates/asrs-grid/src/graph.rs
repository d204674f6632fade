//! Warehouse rack graph representation and builder.
//!
//! # Topology
//!
//! Storage nodes form an `aisles × levels` grid; one extra node — the
//! fulfillment zone — terminates every pick.  Robot movement rules:
//!
//! - vertical moves only within an aisle;
//! - horizontal moves only at the first or top level (cranes cross aisles
//!   along the floor or the gantry rail, never mid-rack);
//! - the fulfillment zone connects to the first and top level of every aisle;
//! - no diagonal moves.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_cost_ms`, `edge_length_m`)
//! are sorted by source node and indexed by `EdgeId`, so iterating a node's
//! outgoing edges is a contiguous memory scan — ideal for Dijkstra's inner
//! loop.
//!
//! Node ids are computed, never searched: storage node `(a, l)` maps to
//! `a * levels + l` and the fulfillment zone is the final id.
//!
//! # Edge weights
//!
//! Every directed edge carries a cost in integer milliseconds, computed at
//! build time from the constant-acceleration travel-time model, the run's
//! traffic multiplier, and a per-node demand factor sampled uniformly in
//! `[1, 3)` from the caller's seeded RNG.  Edges touching the fulfillment
//! zone take the storage endpoint's demand factor (the zone itself has no
//! demand); storage-to-storage edges take the destination's.

use asrs_core::{travel_time_secs, EdgeId, KinematicParams, NodeId, SimRng};

use crate::{GridError, GridResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Warehouse topology parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of aisles (horizontal axis).
    pub aisles: u16,
    /// Number of rack levels per aisle (vertical axis).
    pub levels: u16,
    /// Horizontal distance between adjacent aisles, metres.
    pub aisle_length_m: f64,
    /// Vertical distance between adjacent levels, metres.
    pub level_height_m: f64,
}

impl GridConfig {
    /// Reject degenerate topologies.
    pub fn validate(&self) -> GridResult<()> {
        if self.aisles == 0 || self.levels == 0 {
            return Err(GridError::Config(format!(
                "aisle and level counts must be positive, got {}x{}",
                self.aisles, self.levels
            )));
        }
        if self.aisle_length_m <= 0.0 || !self.aisle_length_m.is_finite() {
            return Err(GridError::Config(format!(
                "aisle length must be positive, got {}",
                self.aisle_length_m
            )));
        }
        if self.level_height_m <= 0.0 || !self.level_height_m.is_finite() {
            return Err(GridError::Config(format!(
                "level height must be positive, got {}",
                self.level_height_m
            )));
        }
        Ok(())
    }

    /// Number of storage nodes (excludes the fulfillment zone).
    #[inline]
    pub fn storage_count(&self) -> usize {
        self.aisles as usize * self.levels as usize
    }
}

// ── Coordinates ───────────────────────────────────────────────────────────────

/// Rack position of a storage node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RackCoord {
    pub aisle: u16,
    pub level: u16,
}

impl std::fmt::Display for RackCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(aisle {}, level {})", self.aisle, self.level)
    }
}

// ── WarehouseGraph ────────────────────────────────────────────────────────────

/// Directed warehouse graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Construct
/// via [`WarehouseGraph::build`] or [`WarehouseGraph::build_with_demand`];
/// the builder guarantees that every directed edge has a reverse twin.
pub struct WarehouseGraph {
    /// Topology the graph was built from.
    pub config: GridConfig,

    /// Demand (heatmap) factor of each storage node, in `[1, 3)`.
    /// Indexed by `NodeId`; the fulfillment zone is not included.
    pub demand: Vec<f32>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Redundant with CSR but required for
    /// efficient route reconstruction (trace `prev_edge` back to source).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Travel time in milliseconds.  Used as Dijkstra edge cost.
    pub edge_cost_ms: Vec<u32>,

    /// Physical length of each edge in metres (Manhattan, used for energy
    /// costing — robots never move diagonally).
    pub edge_length_m: Vec<f32>,
}

impl WarehouseGraph {
    /// Build the graph, sampling demand factors from `rng`.
    ///
    /// `traffic_multiplier` is baked into every edge cost; pass `1.0` to
    /// disable congestion.
    pub fn build(
        config: GridConfig,
        kinematics: &KinematicParams,
        traffic_multiplier: f64,
        rng: &mut SimRng,
    ) -> GridResult<Self> {
        config.validate()?;
        let demand = (0..config.storage_count())
            .map(|_| rng.gen_range(1.0f32..3.0))
            .collect();
        Self::build_with_demand(config, kinematics, traffic_multiplier, demand)
    }

    /// Build the graph with explicit per-node demand factors.
    ///
    /// Used by deterministic scenarios and tests; `demand.len()` must equal
    /// `config.storage_count()`.
    pub fn build_with_demand(
        config: GridConfig,
        kinematics: &KinematicParams,
        traffic_multiplier: f64,
        demand: Vec<f32>,
    ) -> GridResult<Self> {
        config.validate()?;
        kinematics.validate()?;
        if demand.len() != config.storage_count() {
            return Err(GridError::Config(format!(
                "demand factor count {} does not match storage node count {}",
                demand.len(),
                config.storage_count()
            )));
        }
        if !(traffic_multiplier.is_finite() && traffic_multiplier >= 0.0) {
            return Err(GridError::Config(format!(
                "traffic multiplier must be finite and non-negative, got {traffic_multiplier}"
            )));
        }

        let assembler = Assembler {
            config,
            kinematics: *kinematics,
            traffic: traffic_multiplier,
            demand,
        };
        assembler.assemble()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    /// Total node count: storage nodes plus the fulfillment zone.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.config.storage_count() + 1
    }

    #[inline]
    pub fn storage_count(&self) -> usize {
        self.config.storage_count()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    // ── Node addressing ───────────────────────────────────────────────────

    /// The fulfillment zone's id (always the last node).
    #[inline]
    pub fn fulfillment_zone(&self) -> NodeId {
        NodeId(self.config.storage_count() as u32)
    }

    #[inline]
    pub fn is_fulfillment(&self, node: NodeId) -> bool {
        node == self.fulfillment_zone()
    }

    /// Id of the storage node at `(aisle, level)`.
    #[inline]
    pub fn node_id(&self, aisle: u16, level: u16) -> NodeId {
        debug_assert!(aisle < self.config.aisles && level < self.config.levels);
        NodeId(aisle as u32 * self.config.levels as u32 + level as u32)
    }

    /// Rack coordinate of `node`, or `None` for the fulfillment zone.
    #[inline]
    pub fn coord(&self, node: NodeId) -> Option<RackCoord> {
        if node.index() >= self.config.storage_count() {
            return None;
        }
        Some(RackCoord {
            aisle: (node.0 / self.config.levels as u32) as u16,
            level: (node.0 % self.config.levels as u32) as u16,
        })
    }

    /// Iterator over all storage node ids in id order.
    pub fn storage_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.config.storage_count()).map(|i| NodeId(i as u32))
    }

    /// Demand factor of `node` (the fulfillment zone reports 1.0).
    #[inline]
    pub fn demand_factor(&self, node: NodeId) -> f32 {
        self.demand.get(node.index()).copied().unwrap_or(1.0)
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

struct Assembler {
    config: GridConfig,
    kinematics: KinematicParams,
    traffic: f64,
    demand: Vec<f32>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    cost_ms: u32,
    length_m: f32,
}

impl Assembler {
    fn assemble(self) -> GridResult<WarehouseGraph> {
        let GridConfig { aisles, levels, aisle_length_m, level_height_m } = self.config;
        let top = levels - 1;
        let fz = NodeId(self.config.storage_count() as u32);

        let mut raw: Vec<RawEdge> = Vec::new();

        for aisle in 0..aisles {
            for level in 0..levels {
                let here = self.node_id(aisle, level);

                // Vertical movement within the same aisle.
                if level + 1 < levels {
                    let above = self.node_id(aisle, level + 1);
                    self.push_pair(&mut raw, here, above, 0.0, level_height_m)?;
                }

                // Horizontal movement only at the first or top level.
                if aisle + 1 < aisles && (level == 0 || level == top) {
                    let next = self.node_id(aisle + 1, level);
                    self.push_pair(&mut raw, here, next, aisle_length_m, 0.0)?;
                }
            }

            // Fulfillment zone connects at the first and top level of every
            // aisle, at a distance proportional to the rack position.
            // In a single-level warehouse level 0 *is* the top; connect once.
            let terminal_levels: &[u16] = if top == 0 { &[0] } else { &[0, top] };
            for &level in terminal_levels {
                let node = self.node_id(aisle, level);
                let dx = aisle_length_m * aisle as f64 / aisles as f64;
                let dz = level_height_m * level as f64 / levels as f64;
                self.push_pair(&mut raw, node, fz, dx, dz)?;
            }
        }

        // Sort edges by source node for CSR construction.
        raw.sort_unstable_by_key(|e| (e.from, e.to));

        let node_count = self.config.storage_count() + 1;
        let edge_count = raw.len();

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_cost_ms: Vec<u32> = raw.iter().map(|e| e.cost_ms).collect();
        let edge_length_m: Vec<f32> = raw.iter().map(|e| e.length_m).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        Ok(WarehouseGraph {
            config: self.config,
            demand: self.demand,
            node_out_start,
            edge_from,
            edge_to,
            edge_cost_ms,
            edge_length_m,
        })
    }

    #[inline]
    fn node_id(&self, aisle: u16, level: u16) -> NodeId {
        NodeId(aisle as u32 * self.config.levels as u32 + level as u32)
    }

    /// Demand factor used for an edge arriving at `to` from `from`.
    ///
    /// Edges touching the fulfillment zone take the storage endpoint's
    /// factor; the zone itself has no demand.
    fn edge_demand(&self, from: NodeId, to: NodeId) -> f64 {
        let storage = self.config.storage_count();
        if to.index() < storage {
            self.demand[to.index()] as f64
        } else {
            self.demand[from.index()] as f64
        }
    }

    /// Add a directed edge and its reverse twin.
    fn push_pair(
        &self,
        raw: &mut Vec<RawEdge>,
        a: NodeId,
        b: NodeId,
        dx_m: f64,
        dz_m: f64,
    ) -> GridResult<()> {
        let length_m = (dx_m + dz_m) as f32;
        for (from, to) in [(a, b), (b, a)] {
            let secs = travel_time_secs(
                dx_m,
                dz_m,
                &self.kinematics,
                self.traffic,
                self.edge_demand(from, to),
            )?;
            raw.push(RawEdge {
                from,
                to,
                cost_ms: (secs * 1_000.0).round() as u32,
                length_m,
            });
        }
        Ok(())
    }
}
