//! `asrs-grid` — warehouse rack graph, routing, and movement-rule validation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`graph`]    | `WarehouseGraph` (CSR), `GridConfig`, `RackCoord`         |
//! | [`router`]   | `Router` trait, `Route`, `DijkstraRouter`                 |
//! | [`validate`] | `validate_path`, `assert_connectivity`, `PathViolation`   |
//! | [`error`]    | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public config types.   |

pub mod error;
pub mod graph;
pub mod router;
pub mod validate;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use graph::{GridConfig, RackCoord, WarehouseGraph};
pub use router::{DijkstraRouter, Route, Router};
pub use validate::{assert_connectivity, validate_path, PathViolation, ViolationKind};
