//! Worst-case cost of committing to a first step.
//!
//! Dropping at `step` with `floors_left` unresolved floors has two outcomes:
//!
//! - it breaks: the remaining resource must walk the `step - 1` floors below
//!   one at a time, `step` attempts in total
//! - it survives: one attempt spent, `floors_left - step` floors remain
//!
//! The adversary picks the worse branch, so the cost is
//! `max(step, 1 + f(floors_left - step))`.

use crate::error::{Error, Result};

/// Largest floor count answered directly without a step search.
pub const BASE_CASE_FLOORS: u64 = 2;

/// Cost of a floor count handled by exhaustive single-floor checks.
#[inline]
pub const fn base_case_cost(floors_left: u64) -> Option<u64> {
    if floors_left <= BASE_CASE_FLOORS {
        Some(floors_left)
    } else {
        None
    }
}

/// Validate that `step` is a legal first attempt for `floors_left`.
///
/// Only non-base floor counts go through the step search, and the step must
/// leave at least one floor above it: `1 <= step < floors_left`.
#[inline]
pub fn check_step(floors_left: u64, step: u64) -> Result<()> {
    if floors_left <= BASE_CASE_FLOORS || step == 0 || step >= floors_left {
        return Err(Error::InvalidStep { floors_left, step });
    }
    Ok(())
}

/// Combine a step with the cost of the sub-problem it leaves behind.
#[inline]
pub const fn worst_case(step: u64, remaining_cost: u64) -> u64 {
    let survive = remaining_cost + 1;
    if survive < step {
        step
    } else {
        survive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases_are_identity() {
        assert_eq!(base_case_cost(0), Some(0));
        assert_eq!(base_case_cost(1), Some(1));
        assert_eq!(base_case_cost(2), Some(2));
        assert_eq!(base_case_cost(3), None);
    }

    #[test]
    fn worst_case_takes_larger_branch() {
        // break branch dominates
        assert_eq!(worst_case(5, 2), 5);
        // survive branch dominates
        assert_eq!(worst_case(1, 2), 3);
        // tie
        assert_eq!(worst_case(3, 2), 3);
    }

    #[test]
    fn step_domain() {
        assert!(check_step(3, 1).is_ok());
        assert!(check_step(3, 2).is_ok());
        assert_eq!(
            check_step(3, 3),
            Err(Error::InvalidStep { floors_left: 3, step: 3 })
        );
        assert_eq!(
            check_step(10, 0),
            Err(Error::InvalidStep { floors_left: 10, step: 0 })
        );
        assert_eq!(
            check_step(2, 1),
            Err(Error::InvalidStep { floors_left: 2, step: 1 })
        );
    }
}
