//! The `Simulator` and its batch loop.
//!
//! No real concurrency is modeled: robots are a logical partition of the
//! batch, transactions are processed in assignment order, and all state is
//! recomputed per run.  The loop is deliberately simple:
//!
//! 1. pick the target (random storage node, or caller-supplied);
//! 2. assign a robot round-robin;
//! 3. route both legs (fulfillment → target, target → fulfillment);
//! 4. stitch and validate the path — violations flag the transaction,
//!    routing failures skip it; both are recorded as issues, never fatal;
//! 5. record the transaction and notify the observer.

use asrs_core::{NodeId, RobotId, SimRng, TransactionId};
use asrs_grid::{validate_path, Router, WarehouseGraph};

use crate::{
    RunConfig, RunIssue, RunObserver, SimError, SimResult, Transaction, TransactionBatch,
};

/// Drives transaction batches over a warehouse graph.
///
/// Generic over [`Router`] so tests and applications can substitute the
/// routing strategy.
pub struct Simulator<R: Router> {
    router: R,
}

impl<R: Router> Simulator<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Run a batch with targets drawn uniformly from the storage nodes.
    ///
    /// The sampling stream is seeded from `config.seed`: equal configs
    /// produce identical batches.
    pub fn run<O: RunObserver>(
        &self,
        graph: &WarehouseGraph,
        config: &RunConfig,
        observer: &mut O,
    ) -> SimResult<TransactionBatch> {
        config.validate()?;

        let storage: Vec<NodeId> = graph.storage_nodes().collect();
        if storage.is_empty() {
            return Err(SimError::Config("graph has no storage nodes".into()));
        }

        let mut rng = SimRng::new(config.seed);
        let mut targets = Vec::with_capacity(config.transactions as usize);
        for _ in 0..config.transactions {
            // Safe: storage is non-empty, checked above.
            if let Some(&node) = rng.choose(&storage) {
                targets.push(node);
            }
        }
        self.run_with_targets(graph, config, &targets, observer)
    }

    /// Run a batch against an explicit target list (deterministic scenarios,
    /// tests).  `targets.len()` must equal `config.transactions`.
    pub fn run_with_targets<O: RunObserver>(
        &self,
        graph: &WarehouseGraph,
        config: &RunConfig,
        targets: &[NodeId],
        observer: &mut O,
    ) -> SimResult<TransactionBatch> {
        config.validate()?;
        if targets.len() != config.transactions as usize {
            return Err(SimError::TargetCountMismatch {
                expected: config.transactions as usize,
                got: targets.len(),
            });
        }
        // Only storage nodes can be picked from; the fulfillment zone (or an
        // out-of-range id) is not a valid target.
        for &target in targets {
            if graph.coord(target).is_none() {
                return Err(SimError::Config(format!(
                    "target {target} is not a storage node"
                )));
            }
        }

        let fz = graph.fulfillment_zone();
        let mut batch = TransactionBatch::default();

        for (i, &target) in targets.iter().enumerate() {
            let id = TransactionId(i as u32);
            let robot = RobotId((i % config.robots as usize) as u16);

            let outbound = match self.router.route(graph, fz, target) {
                Ok(r) => r,
                Err(e) => {
                    let issue = RunIssue::Routing { transaction: id, target, message: e.to_string() };
                    observer.on_issue(&issue);
                    batch.issues.push(issue);
                    continue;
                }
            };
            let inbound = match self.router.route(graph, target, fz) {
                Ok(r) => r,
                Err(e) => {
                    let issue = RunIssue::Routing { transaction: id, target, message: e.to_string() };
                    observer.on_issue(&issue);
                    batch.issues.push(issue);
                    continue;
                }
            };

            // Stitch the two legs; the target appears once.
            let mut path = outbound.nodes;
            if let Some(rest) = inbound.nodes.get(1..) {
                path.extend_from_slice(rest);
            }

            let violation = validate_path(graph, &path).err();
            if let Some(v) = violation {
                let issue = RunIssue::InvalidPath { transaction: id, violation: v };
                observer.on_issue(&issue);
                batch.issues.push(issue);
            }

            let tx = Transaction {
                id,
                robot,
                target,
                path,
                travel_secs: outbound.total_secs + inbound.total_secs,
                extraction_secs: config.extraction_secs,
                length_m: outbound.total_length_m + inbound.total_length_m,
                violation,
            };
            observer.on_transaction(&tx);
            batch.transactions.push(tx);
        }

        observer.on_run_end(&batch);
        Ok(batch)
    }
}
