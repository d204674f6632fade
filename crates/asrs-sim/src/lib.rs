//! `asrs-sim` — transaction simulator for the rust_asrs warehouse model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`config`]      | `RunConfig`                                         |
//! | [`transaction`] | `Transaction`, `RunIssue`, `TransactionBatch`       |
//! | [`sim`]         | `Simulator<R: Router>`                              |
//! | [`observer`]    | `RunObserver`, `NoopObserver`                       |
//! | [`error`]       | `SimError`, `SimResult<T>`                          |

pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod transaction;


pub use config::RunConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use sim::Simulator;
pub use transaction::{RunIssue, Transaction, TransactionBatch};
