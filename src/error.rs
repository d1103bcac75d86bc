//! src/error.rs
//!
//! Error types for the core and for the input adapters.

use std::collections::TryReserveError;

use thiserror::Error;

/// Hard failures of the graph core.
///
/// Degenerate ranges and empty windows are recovered locally and never
/// show up here.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("could not allocate a sample store of {capacity} slots")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Why a line from an input source did not yield a sample.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty line")]
    Empty,

    #[error("malformed sample: {0:?}")]
    Malformed(String),
}
