//! Error types for the floor search solver.

use thiserror::Error;

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested floor count is larger than the memo store can hold
    #[error("requested floor count {floors} exceeds configured capacity {capacity}")]
    CapacityExceeded { floors: u64, capacity: u64 },

    /// Recursive evaluation would nest deeper than the configured bound
    #[error("recursion limit {limit} reached at depth {depth} while solving {floors} floors")]
    RecursionLimit { floors: u64, depth: usize, limit: usize },

    /// Step outside `1..floors_left`, or a base-case floor count
    #[error("step {step} is not a valid first attempt for {floors_left} floors")]
    InvalidStep { floors_left: u64, step: u64 },

    /// Configuration value could not be parsed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
