//! Unit tests for asrs-grid.
//!
//! All tests use small hand-specified topologies with fixed demand factors
//! so edge costs are deterministic.

#[cfg(test)]
mod helpers {
    use asrs_core::KinematicParams;

    use crate::{GridConfig, WarehouseGraph};

    pub fn kin() -> KinematicParams {
        KinematicParams::new(0.5, 0.5)
    }

    /// 2 aisles × 2 levels, 30 m × 5 m, traffic 1.0, demand fixed at 1.0.
    ///
    /// Edge costs (ms), with accel 0.5 so t = 2·sqrt(d):
    ///   vertical (dz=5):           4_472
    ///   horizontal (dx=30):       10_954
    ///   (0,0)↔FZ (dx=0,  dz=0):        0
    ///   (0,1)↔FZ (dz=2.5):         3_162
    ///   (1,0)↔FZ (dx=15):          7_746
    ///   (1,1)↔FZ (dx=15, dz=2.5): 10_908
    pub fn two_by_two() -> WarehouseGraph {
        let cfg = GridConfig {
            aisles: 2,
            levels: 2,
            aisle_length_m: 30.0,
            level_height_m: 5.0,
        };
        WarehouseGraph::build_with_demand(cfg, &kin(), 1.0, vec![1.0; 4]).unwrap()
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use asrs_core::SimRng;

    use crate::{GridConfig, GridError, WarehouseGraph};

    use super::helpers::{kin, two_by_two};

    #[test]
    fn node_count_is_storage_plus_fulfillment() {
        let g = two_by_two();
        assert_eq!(g.node_count(), 2 * 2 + 1);
        assert_eq!(g.storage_count(), 4);
        assert_eq!(g.fulfillment_zone().index(), 4);
    }

    #[test]
    fn coord_roundtrip() {
        let g = two_by_two();
        for aisle in 0..2 {
            for level in 0..2 {
                let id = g.node_id(aisle, level);
                let c = g.coord(id).unwrap();
                assert_eq!((c.aisle, c.level), (aisle, level));
            }
        }
        assert!(g.coord(g.fulfillment_zone()).is_none());
    }

    #[test]
    fn no_diagonal_edges() {
        let g = two_by_two();
        for e in 0..g.edge_count() {
            let (Some(a), Some(b)) = (g.coord(g.edge_from[e]), g.coord(g.edge_to[e])) else {
                continue;
            };
            assert!(
                a.aisle == b.aisle || a.level == b.level,
                "diagonal edge {a} -> {b}"
            );
        }
    }

    #[test]
    fn horizontal_edges_only_at_terminal_levels() {
        let cfg = GridConfig {
            aisles: 4,
            levels: 5,
            aisle_length_m: 30.0,
            level_height_m: 5.0,
        };
        let g = WarehouseGraph::build_with_demand(cfg, &kin(), 1.0, vec![1.0; 20]).unwrap();
        for e in 0..g.edge_count() {
            let (Some(a), Some(b)) = (g.coord(g.edge_from[e]), g.coord(g.edge_to[e])) else {
                continue;
            };
            if a.aisle != b.aisle {
                assert!(a.level == 0 || a.level == 4, "horizontal edge at level {}", a.level);
            }
        }
    }

    #[test]
    fn every_edge_has_reverse_twin() {
        let g = two_by_two();
        for e in 0..g.edge_count() {
            let (from, to) = (g.edge_from[e], g.edge_to[e]);
            let has_twin = g
                .out_edges(to)
                .any(|back| g.edge_to[back.index()] == from);
            assert!(has_twin, "edge {from} -> {to} has no reverse");
        }
    }

    #[test]
    fn expected_edge_costs() {
        let g = two_by_two();
        let fz = g.fulfillment_zone();
        let cost = |from, to| {
            g.out_edges(from)
                .find(|&e| g.edge_to[e.index()] == to)
                .map(|e| g.edge_cost_ms[e.index()])
                .unwrap()
        };

        assert_eq!(cost(g.node_id(0, 0), g.node_id(0, 1)), 4_472);
        assert_eq!(cost(g.node_id(0, 0), g.node_id(1, 0)), 10_954);
        assert_eq!(cost(g.node_id(0, 0), fz), 0);
        assert_eq!(cost(g.node_id(0, 1), fz), 3_162);
        assert_eq!(cost(g.node_id(1, 0), fz), 7_746);
        assert_eq!(cost(g.node_id(1, 1), fz), 10_908);
    }

    #[test]
    fn sampled_demand_in_range_and_seed_deterministic() {
        let cfg = GridConfig {
            aisles: 3,
            levels: 4,
            aisle_length_m: 30.0,
            level_height_m: 5.0,
        };
        let g1 = WarehouseGraph::build(cfg, &kin(), 1.0, &mut SimRng::new(42)).unwrap();
        let g2 = WarehouseGraph::build(cfg, &kin(), 1.0, &mut SimRng::new(42)).unwrap();
        let g3 = WarehouseGraph::build(cfg, &kin(), 1.0, &mut SimRng::new(43)).unwrap();

        for &d in &g1.demand {
            assert!((1.0..3.0).contains(&d), "demand {d} out of range");
        }
        assert_eq!(g1.demand, g2.demand);
        assert_eq!(g1.edge_cost_ms, g2.edge_cost_ms);
        assert_ne!(g1.demand, g3.demand);
    }

    #[test]
    fn zero_counts_rejected() {
        let bad = GridConfig { aisles: 0, levels: 5, aisle_length_m: 30.0, level_height_m: 5.0 };
        assert!(matches!(
            WarehouseGraph::build(bad, &kin(), 1.0, &mut SimRng::new(1)),
            Err(GridError::Config(_))
        ));

        let bad = GridConfig { aisles: 5, levels: 0, aisle_length_m: 30.0, level_height_m: 5.0 };
        assert!(matches!(
            WarehouseGraph::build(bad, &kin(), 1.0, &mut SimRng::new(1)),
            Err(GridError::Config(_))
        ));
    }

    #[test]
    fn demand_length_mismatch_rejected() {
        let cfg = GridConfig { aisles: 2, levels: 2, aisle_length_m: 30.0, level_height_m: 5.0 };
        let err = WarehouseGraph::build_with_demand(cfg, &kin(), 1.0, vec![1.0; 3]);
        assert!(matches!(err, Err(GridError::Config(_))));
    }

    #[test]
    fn single_level_warehouse_builds() {
        let cfg = GridConfig { aisles: 3, levels: 1, aisle_length_m: 30.0, level_height_m: 5.0 };
        let g = WarehouseGraph::build_with_demand(cfg, &kin(), 1.0, vec![1.0; 3]).unwrap();
        assert_eq!(g.node_count(), 4);
        // Exactly one FZ pair per aisle, not a duplicated level-0/top pair.
        let fz = g.fulfillment_zone();
        assert_eq!(g.out_degree(fz), 3);
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use crate::{DijkstraRouter, Router};

    use super::helpers::two_by_two;

    #[test]
    fn trivial_route() {
        let g = two_by_two();
        let fz = g.fulfillment_zone();
        let r = DijkstraRouter.route(&g, fz, fz).unwrap();
        assert!(r.is_trivial());
        assert_eq!(r.nodes, vec![fz]);
        assert_eq!(r.total_secs, 0.0);
    }

    #[test]
    fn direct_terminal_edge_beats_detour() {
        let g = two_by_two();
        let fz = g.fulfillment_zone();
        let target = g.node_id(1, 1);

        // Direct FZ edge: 10_908 ms.  Via (1,0): 7_746 + 4_472 = 12_218 ms.
        let r = DijkstraRouter.route(&g, fz, target).unwrap();
        assert_eq!(r.nodes, vec![fz, target]);
        assert!((r.total_secs - 10.908).abs() < 1e-9, "got {}", r.total_secs);
    }

    #[test]
    fn route_length_accumulates_metres() {
        let g = two_by_two();
        let fz = g.fulfillment_zone();
        // FZ -> (1,1) direct edge has Manhattan length 15 + 2.5 m.
        let r = DijkstraRouter.route(&g, fz, g.node_id(1, 1)).unwrap();
        assert!((r.total_length_m - 17.5).abs() < 1e-6);
    }

    #[test]
    fn routes_are_symmetric_in_cost() {
        let g = two_by_two();
        let fz = g.fulfillment_zone();
        for node in g.storage_nodes() {
            let out = DijkstraRouter.route(&g, fz, node).unwrap();
            let back = DijkstraRouter.route(&g, node, fz).unwrap();
            assert_eq!(out.total_secs, back.total_secs, "asymmetric cost for {node}");
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use crate::{assert_connectivity, validate_path, DijkstraRouter, Router, ViolationKind};

    use super::helpers::two_by_two;

    #[test]
    fn all_storage_nodes_reach_fulfillment() {
        let g = two_by_two();
        assert_connectivity(&g).unwrap();
    }

    #[test]
    fn routed_paths_are_legal() {
        let g = two_by_two();
        let fz = g.fulfillment_zone();
        for node in g.storage_nodes() {
            let r = DijkstraRouter.route(&g, fz, node).unwrap();
            validate_path(&g, &r.nodes).unwrap();
        }
    }

    #[test]
    fn diagonal_hop_detected() {
        let g = two_by_two();
        let path = [g.node_id(0, 0), g.node_id(1, 1)];
        let v = validate_path(&g, &path).unwrap_err();
        assert_eq!(v.kind, ViolationKind::Diagonal);
    }

    #[test]
    fn mid_level_horizontal_detected() {
        use asrs_core::KinematicParams;

        use crate::{GridConfig, WarehouseGraph};

        let cfg = GridConfig { aisles: 2, levels: 3, aisle_length_m: 30.0, level_height_m: 5.0 };
        let g = WarehouseGraph::build_with_demand(
            cfg,
            &KinematicParams::new(0.5, 0.5),
            1.0,
            vec![1.0; 6],
        )
        .unwrap();

        // Level 1 is neither the first nor the top level.
        let path = [g.node_id(0, 1), g.node_id(1, 1)];
        let v = validate_path(&g, &path).unwrap_err();
        assert_eq!(v.kind, ViolationKind::HorizontalMidLevel);
    }

    #[test]
    fn fulfillment_hops_exempt() {
        let g = two_by_two();
        let path = [g.fulfillment_zone(), g.node_id(1, 1), g.fulfillment_zone()];
        validate_path(&g, &path).unwrap();
    }
}
