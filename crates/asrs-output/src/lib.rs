//! `asrs-output` — simulation output writers for the rust_asrs workspace.
//!
//! A run's results are written once, after the batch and its metrics are
//! complete; nothing streams per transaction.
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`row`]    | `TransactionRow`, `OverlapRow`, `RunSummaryRow`     |
//! | [`writer`] | `OutputWriter` trait                                |
//! | [`csv`]    | `CsvWriter` backend                                 |
//! | [`error`]  | `OutputError`, `OutputResult<T>`                    |

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{OverlapRow, RunSummaryRow, TransactionRow};
pub use writer::OutputWriter;
