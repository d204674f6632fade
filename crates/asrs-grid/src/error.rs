//! Grid-subsystem error type.

use thiserror::Error;

use asrs_core::{CoreError, NodeId};

/// Errors produced by `asrs-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GridResult<T> = Result<T, GridError>;
