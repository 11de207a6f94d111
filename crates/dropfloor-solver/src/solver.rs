//! Memoized solver for the minimum worst-case attempts.
//!
//! ```text
//! f(0) = 0, f(1) = 1, f(2) = 2
//! f(n) = min over s in [1, n-1] of max(s, 1 + f(n - s))
//! ```
//!
//! Each floor count moves from *uncomputed* to *computed* exactly once, the
//! first time it is needed, and is served from the memo store afterwards.
//!
//! # Strategies
//!
//! - [`Strategy::TwoPass`]: recursive; the scan only picks the minimizing
//!   step, which is then evaluated a second time for the final cost.
//! - [`Strategy::OnePass`]: recursive; the scan keeps the minimum cost as it
//!   goes, so no second evaluation is needed.
//! - [`Strategy::BottomUp`]: iterative; every floor count from the last
//!   computed one up to the target is tabulated in order, each entry reading
//!   only smaller, already stored entries. No recursion, so no depth limit.
//!
//! The recursive strategies nest one call per floor count along the first
//! explored path (`n`, `n - 1`, `n - 2`, ...). Nesting beyond
//! [`SolverConfig::max_depth`] fails with [`Error::RecursionLimit`] instead
//! of exhausting the stack.

use tracing::{debug, trace, warn};

use crate::config::{SolverConfig, Strategy};
use crate::cost::{base_case_cost, check_step, worst_case};
use crate::error::{Error, Result};
use crate::memo::MemoStore;
use crate::plan::DropPlan;
use crate::search::{self, Candidate};

/// Work counters, used to observe memoization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverStats {
    /// Floor counts computed and stored
    pub computed: u64,
    /// Lookups answered from the memo store
    pub cache_hits: u64,
    /// Worst-case evaluations of a single step
    pub evaluations: u64,
    /// Deepest nesting at which an entry was computed
    pub max_depth_reached: usize,
}

/// A solver instance owning its memo store.
#[derive(Debug, Clone)]
pub struct Solver {
    config: SolverConfig,
    memo: MemoStore,
    stats: SolverStats,
}

impl Solver {
    /// Create a solver from a configuration.
    pub fn new(config: SolverConfig) -> Result<Self> {
        Ok(Self {
            memo: MemoStore::new(config.capacity)?,
            config,
            stats: SolverStats::default(),
        })
    }

    /// Create a solver with default configuration and the given strategy.
    pub fn with_strategy(strategy: Strategy) -> Result<Self> {
        Self::new(SolverConfig::default().with_strategy(strategy))
    }

    /// Configuration this solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Largest floor count accepted.
    pub fn capacity(&self) -> u64 {
        self.memo.capacity()
    }

    /// Work counters since construction.
    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Read-only view of the memo store.
    pub fn memo(&self) -> &MemoStore {
        &self.memo
    }

    /// Stored answer for `floors`, without computing anything.
    pub fn cached(&self, floors: u64) -> Option<u64> {
        self.memo.get(floors).ok().flatten()
    }

    /// Minimum worst-case attempts for `floors` floors.
    pub fn solve(&mut self, floors: u64) -> Result<u64> {
        if let Err(err) = self.memo.check(floors) {
            warn!(floors, capacity = self.memo.capacity(), "floor count exceeds capacity");
            return Err(err);
        }

        let cost = match self.config.strategy {
            Strategy::BottomUp => self.tabulate(floors)?,
            Strategy::TwoPass | Strategy::OnePass => self.solve_at(floors, 0)?,
        };

        debug!(
            floors,
            cost,
            strategy = %self.config.strategy,
            computed = self.stats.computed,
            cache_hits = self.stats.cache_hits,
            "solved"
        );
        Ok(cost)
    }

    /// Worst-case attempts when the first drop is `step` floors up.
    ///
    /// Requires `floors_left > 2` and `1 <= step < floors_left`.
    pub fn evaluate(&mut self, floors_left: u64, step: u64) -> Result<u64> {
        self.memo.check(floors_left)?;
        check_step(floors_left, step)?;
        self.step_cost(floors_left, step, 0)
    }

    /// Earliest step achieving the optimum for `floors_left`.
    ///
    /// Base-case floor counts are walked one floor at a time, so their
    /// step is `1`.
    pub fn best_step(&mut self, floors_left: u64) -> Result<u64> {
        self.memo.check(floors_left)?;
        if base_case_cost(floors_left).is_some() {
            return Ok(1);
        }
        Ok(self.search(floors_left, 0)?.step)
    }

    /// Floors to attempt, in order, while every drop survives.
    pub fn drop_plan(&mut self, floors: u64) -> Result<DropPlan> {
        let attempts = self.solve(floors)?;

        let mut drops = Vec::with_capacity(attempts as usize);
        let mut reached = 0;
        let mut remaining = floors;
        while remaining > 0 {
            let step = self.best_step(remaining)?;
            reached += step;
            remaining -= step;
            drops.push(reached);
        }

        Ok(DropPlan {
            floors,
            attempts,
            drops,
        })
    }

    fn lookup(&mut self, floors: u64) -> Result<Option<u64>> {
        let hit = self.memo.get(floors)?;
        if hit.is_some() {
            self.stats.cache_hits += 1;
        }
        Ok(hit)
    }

    fn store(&mut self, floors: u64, cost: u64, depth: usize) -> Result<u64> {
        self.stats.computed += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(depth);
        trace!(floors, cost, depth, "memoized");
        self.memo.insert(floors, cost)
    }

    fn search(&mut self, floors_left: u64, depth: usize) -> Result<Candidate> {
        search::scan(floors_left, |step| self.step_cost(floors_left, step, depth))
    }

    fn step_cost(&mut self, floors_left: u64, step: u64, depth: usize) -> Result<u64> {
        self.stats.evaluations += 1;
        let rest = floors_left - step;
        let remaining_cost = match self.config.strategy {
            Strategy::BottomUp => match self.lookup(rest)? {
                Some(cost) => cost,
                None => self.tabulate(rest)?,
            },
            Strategy::TwoPass | Strategy::OnePass => self.solve_at(rest, depth + 1)?,
        };
        Ok(worst_case(step, remaining_cost))
    }

    fn solve_at(&mut self, floors: u64, depth: usize) -> Result<u64> {
        if let Some(cost) = self.lookup(floors)? {
            return Ok(cost);
        }

        if let Some(cost) = base_case_cost(floors) {
            return self.store(floors, cost, depth);
        }

        if depth > self.config.max_depth {
            warn!(floors, depth, limit = self.config.max_depth, "recursion limit reached");
            return Err(Error::RecursionLimit {
                floors,
                depth,
                limit: self.config.max_depth,
            });
        }

        let best = self.search(floors, depth)?;
        let cost = match self.config.strategy {
            Strategy::TwoPass => self.step_cost(floors, best.step, depth)?,
            _ => best.cost,
        };
        self.store(floors, cost, depth)
    }

    fn tabulate(&mut self, target: u64) -> Result<u64> {
        if let Some(cost) = self.lookup(target)? {
            return Ok(cost);
        }

        let mut cost = 0;
        for floors in self.memo.prefix_len()..=target {
            cost = match self.memo.get(floors)? {
                Some(cost) => cost,
                None => {
                    let cost = match base_case_cost(floors) {
                        Some(cost) => cost,
                        None => self.search(floors, 0)?.cost,
                    };
                    self.store(floors, cost, 0)?
                }
            };
        }
        Ok(cost)
    }
}
