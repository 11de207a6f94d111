//! Step search over `1..floors_left`.
//!
//! Steps are scanned in ascending order and only a strictly smaller cost
//! replaces the current best, so the earliest minimizing step wins ties.

use crate::error::Result;

/// A step together with its worst-case cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// First floor offset to attempt
    pub step: u64,
    /// Worst-case attempts when committing to `step`
    pub cost: u64,
}

/// Scan every step in `1..floors_left` and return the cheapest.
///
/// `cost_of(step)` must return the worst-case cost of that step. Errors from
/// `cost_of` abort the scan. `floors_left` must be greater than 2.
pub fn scan<F>(floors_left: u64, mut cost_of: F) -> Result<Candidate>
where
    F: FnMut(u64) -> Result<u64>,
{
    debug_assert!(floors_left > 2);

    let mut best = Candidate {
        step: 1,
        cost: u64::MAX,
    };

    for step in 1..floors_left {
        let cost = cost_of(step)?;
        if cost < best.cost {
            best = Candidate { step, cost };
        }
    }

    Ok(best)
}
