//! `asrs-metrics` — post-run analysis of a transaction batch.
//!
//! Everything here is a pure function over completed, immutable batch data:
//! no metric computation mutates the batch, and degenerate inputs (empty
//! batch, zero overlaps) degrade to sentinels rather than erroring.
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`overlap`] | `analyze_overlaps`, `OverlapReport`             |
//! | [`cost`]    | `CostParams`, `CostSummary`                     |
//! | [`stats`]   | `BatchStats` (+ throughput projections)         |

pub mod cost;
pub mod overlap;
pub mod stats;


pub use cost::{CostParams, CostSummary};
pub use overlap::{analyze_overlaps, AisleOverlap, NodeOverlap, OverlapParams, OverlapReport};
pub use stats::BatchStats;
