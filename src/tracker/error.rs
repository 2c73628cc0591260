//! Build errors for tracker construction.

use thiserror::Error;

/// Errors that can occur when building a tracker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Capacity must be at least 1. Use no capacity for an unbounded history")]
    ZeroCapacity,
}
