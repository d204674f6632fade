//! `asrs-core` — foundational types for the `rust_asrs` warehouse simulation.
//!
//! This crate is a dependency of every other `asrs-*` crate.  It intentionally
//! has no `asrs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`ids`]        | `NodeId`, `EdgeId`, `RobotId`, `TransactionId`       |
//! | [`kinematics`] | `KinematicParams`, `travel_time_secs`                |
//! | [`rng`]        | `SimRng` (seeded, no global state)                   |
//! | [`error`]      | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod ids;
pub mod kinematics;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, NodeId, RobotId, TransactionId};
pub use kinematics::{travel_time_secs, KinematicParams};
pub use rng::SimRng;
