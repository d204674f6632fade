//! baseline — scenario sweep over the rust_asrs warehouse simulation.
//!
//! Builds one 10×5 warehouse and replays the reference study: fleet sizes
//! 1–3, base vs. upgraded extraction time, and two workload levels.  Prints
//! a results table and writes the base case's full output to `./output`.

use std::fs;
use std::path::Path;

use anyhow::Result;

use asrs_core::{KinematicParams, SimRng};
use asrs_grid::{assert_connectivity, DijkstraRouter, GridConfig, WarehouseGraph};
use asrs_metrics::{analyze_overlaps, BatchStats, CostParams, CostSummary, OverlapParams, OverlapReport};
use asrs_output::{CsvWriter, OutputWriter, OverlapRow, RunSummaryRow, TransactionRow};
use asrs_sim::{NoopObserver, RunConfig, Simulator, TransactionBatch};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;

const AISLES: u16 = 10;
const LEVELS: u16 = 5;
const AISLE_LENGTH_M: f64 = 30.0;
const LEVEL_HEIGHT_M: f64 = 5.0;

const ACCEL_MPS2: f64 = 0.5;
const TRAFFIC_MULTIPLIER: f64 = 1.0;

const BASE_COST_PER_ROBOT: f64 = 20.0;
const UPGRADE_COST_PER_ROBOT: f64 = 5.0; // charged when extraction is upgraded
const ENERGY_COST_PER_METER: f64 = 0.1;
const MAINTENANCE_COST_PER_ROBOT: f64 = 2.0;
const SHIFT_HOURS: f64 = 8.0;

const OUTPUT_DIR: &str = "./output";

// ── Scenarios ─────────────────────────────────────────────────────────────────

struct Scenario {
    robots: u16,
    extraction_secs: f64,
    transactions: u32,
}

const SCENARIOS: [Scenario; 8] = [
    Scenario { robots: 1, extraction_secs: 2.0, transactions: 1_000 }, // base case
    Scenario { robots: 2, extraction_secs: 2.0, transactions: 1_000 }, // more robots
    Scenario { robots: 3, extraction_secs: 2.0, transactions: 1_000 },
    Scenario { robots: 1, extraction_secs: 1.0, transactions: 1_000 }, // upgraded extraction
    Scenario { robots: 1, extraction_secs: 2.0, transactions: 5_000 }, // higher workload
    Scenario { robots: 2, extraction_secs: 2.0, transactions: 5_000 },
    Scenario { robots: 2, extraction_secs: 1.0, transactions: 5_000 }, // robots + upgrades
    Scenario { robots: 3, extraction_secs: 1.0, transactions: 5_000 },
];

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let kinematics = KinematicParams::new(ACCEL_MPS2, ACCEL_MPS2);
    let grid = GridConfig {
        aisles: AISLES,
        levels: LEVELS,
        aisle_length_m: AISLE_LENGTH_M,
        level_height_m: LEVEL_HEIGHT_M,
    };

    let mut rng = SimRng::new(SEED);
    let graph = WarehouseGraph::build(grid, &kinematics, TRAFFIC_MULTIPLIER, &mut rng)?;
    assert_connectivity(&graph)?;

    println!(
        "warehouse: {AISLES} aisles x {LEVELS} levels, {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!(
        "{:<5} {:>7} {:>11} {:>13} {:>12} {:>9} {:>12}",
        "case", "robots", "extraction", "transactions", "avg time (s)", "overlaps", "cost per tx"
    );

    let sim = Simulator::new(DijkstraRouter);

    for (i, scenario) in SCENARIOS.iter().enumerate() {
        let config = RunConfig {
            robots: scenario.robots,
            transactions: scenario.transactions,
            extraction_secs: scenario.extraction_secs,
            seed: SEED + i as u64,
        };

        let batch = sim.run(&graph, &config, &mut NoopObserver)?;

        let stats = BatchStats::from_batch(&batch);
        let overlaps = analyze_overlaps(&batch, &graph, &OverlapParams::default());

        let upgraded = scenario.extraction_secs < 2.0;
        let cost_params = CostParams {
            base_cost_per_robot: BASE_COST_PER_ROBOT,
            upgrade_cost_per_robot: if upgraded { UPGRADE_COST_PER_ROBOT } else { 0.0 },
            energy_cost_per_meter: ENERGY_COST_PER_METER,
            maintenance_cost_per_robot: MAINTENANCE_COST_PER_ROBOT,
        };
        let shift_transactions =
            stats.transactions_per_shift(scenario.robots, SHIFT_HOURS).round() as u64;
        let cost = CostSummary::compute(
            &cost_params,
            scenario.robots,
            stats.total_length_m,
            shift_transactions,
        );

        println!(
            "{:<5} {:>7} {:>11.1} {:>13} {:>12.2} {:>9} {:>12.6}",
            i + 1,
            scenario.robots,
            scenario.extraction_secs,
            scenario.transactions,
            stats.avg_transaction_secs,
            overlaps.total_overlaps,
            cost.cost_per_transaction,
        );

        for issue in &batch.issues {
            eprintln!("case {}: {issue}", i + 1);
        }

        if i == 0 {
            write_outputs(Path::new(OUTPUT_DIR), &graph, &batch, &stats, &overlaps, &cost)?;
        }
    }

    println!("base case output written to {OUTPUT_DIR}");
    Ok(())
}

fn write_outputs(
    dir: &Path,
    graph: &WarehouseGraph,
    batch: &TransactionBatch,
    stats: &BatchStats,
    overlaps: &OverlapReport,
    cost: &CostSummary,
) -> Result<()> {
    fs::create_dir_all(dir)?;
    let mut writer = CsvWriter::new(dir)?;
    writer.write_transactions(&TransactionRow::from_batch(batch, graph))?;
    writer.write_overlaps(&OverlapRow::from_report(overlaps, graph))?;
    writer.write_summary(&RunSummaryRow::new(stats, overlaps, cost))?;
    writer.finish()?;
    Ok(())
}
