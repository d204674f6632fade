//! Base error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `#[from]` or keep them separate.  Prefer whichever keeps
//! error sites clean.

use thiserror::Error;

/// The top-level error type for `asrs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid configuration value (topology counts, distances, …).
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid physical parameter (non-positive acceleration, negative
    /// distance, …).
    #[error("domain error: {0}")]
    Domain(String),
}

/// Shorthand result type for all `asrs-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
