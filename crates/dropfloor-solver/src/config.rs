//! Solver configuration.
//!
//! Capacity and recursion depth are per-instance settings, so several
//! independently sized solvers can live in one process. Values can be read
//! from the environment:
//!
//! - `DROPFLOOR_CAPACITY`: largest floor count the memo store accepts
//! - `DROPFLOOR_STRATEGY`: `two-pass`, `one-pass` or `bottom-up`
//! - `DROPFLOOR_MAX_DEPTH`: nesting bound for the recursive strategies

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default capacity, large enough for the 16090-floor reference input.
pub const DEFAULT_CAPACITY: u64 = 1 << 15;

/// Default nesting bound for the recursive strategies.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// How the step search is organised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Recursive: find the minimizing step, then evaluate it once more.
    TwoPass,
    /// Recursive: track the minimum cost during the scan itself.
    OnePass,
    /// Iterative tabulation from the smallest floor count upward.
    #[default]
    BottomUp,
}

impl Strategy {
    /// Every strategy, in order of increasing refinement.
    pub const ALL: [Self; 3] = [Self::TwoPass, Self::OnePass, Self::BottomUp];

    /// Whether this strategy recurses into smaller floor counts.
    pub const fn is_recursive(&self) -> bool {
        !matches!(self, Self::BottomUp)
    }

    /// Name used in configuration and logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TwoPass => "two-pass",
            Self::OnePass => "one-pass",
            Self::BottomUp => "bottom-up",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-pass" | "two_pass" => Ok(Self::TwoPass),
            "one-pass" | "one_pass" => Ok(Self::OnePass),
            "bottom-up" | "bottom_up" => Ok(Self::BottomUp),
            other => Err(Error::InvalidConfig(format!("unknown strategy {:?}", other))),
        }
    }
}

/// Configuration for a [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Largest floor count that may be requested (inclusive)
    pub capacity: u64,

    /// Step search organisation
    pub strategy: Strategy,

    /// Maximum nesting of uncached recursive solves
    pub max_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strategy: Strategy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SolverConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("DROPFLOOR_CAPACITY") {
            config.capacity = raw.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("DROPFLOOR_CAPACITY is not a floor count: {:?}", raw))
            })?;
        }

        if let Some(raw) = lookup("DROPFLOOR_STRATEGY") {
            config.strategy = raw.parse()?;
        }

        if let Some(raw) = lookup("DROPFLOOR_MAX_DEPTH") {
            config.max_depth = raw.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("DROPFLOOR_MAX_DEPTH is not a depth: {:?}", raw))
            })?;
        }

        Ok(config)
    }

    /// Set the capacity.
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the recursion bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
