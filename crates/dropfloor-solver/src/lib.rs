//! Dropfloor Solver
//!
//! Minimum worst-case number of drops needed to find the critical floor of
//! an `n`-floor building with two test objects.
//!
//! # The Recurrence
//!
//! Committing to a first drop `s` floors up has two outcomes. If it breaks,
//! the second object walks the `s - 1` floors below one by one. If it
//! survives, `n - s` floors remain and the search continues from there. The
//! best strategy minimizes the worse of the two:
//!
//! ```text
//! f(0) = 0, f(1) = 1, f(2) = 2
//! f(n) = min over s in [1, n-1] of max(s, 1 + f(n - s))
//! ```
//!
//! Every sub-problem is strictly smaller than its parent, so the
//! dependencies form a DAG ordered by floor count and memoization makes each
//! floor count a one-time computation.
//!
//! # Closed Form
//!
//! `f(n)` is the smallest `t` with `t(t + 1) / 2 >= n`. The [`closed_form`]
//! module computes it directly and serves as the cross-check for every
//! strategy.
//!
//! # Example
//!
//! ```
//! use dropfloor_solver::{Solver, SolverConfig, Strategy};
//!
//! let config = SolverConfig::default().with_strategy(Strategy::BottomUp);
//! let mut solver = Solver::new(config).unwrap();
//!
//! assert_eq!(solver.solve(100).unwrap(), 14);
//! assert_eq!(solver.best_step(100).unwrap(), 9);
//! ```

pub mod closed_form;
mod config;
mod cost;
mod error;
mod memo;
mod plan;
mod search;
mod solver;

pub use config::{SolverConfig, Strategy, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH};
pub use cost::{base_case_cost, worst_case, BASE_CASE_FLOORS};
pub use error::{Error, Result};
pub use memo::MemoStore;
pub use plan::DropPlan;
pub use solver::{Solver, SolverStats};

/// Solve a single floor count with a fresh default solver.
///
/// Convenience for one-off queries; reuse a [`Solver`] to share its memo
/// store across calls.
pub fn min_worst_case_attempts(floors: u64) -> Result<u64> {
    Solver::new(SolverConfig::default())?.solve(floors)
}
