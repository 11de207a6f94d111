//! Drop plans: the optimal strategy written out as concrete floors.
//!
//! A plan lists the floors attempted while every drop survives. If the drop
//! at position `i` (1-based) breaks, the `step - 1` floors between it and the
//! previous attempt are walked one by one.

/// The floors attempted along the all-survive path of an optimal strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropPlan {
    /// Building height the plan covers
    pub floors: u64,
    /// Optimal worst-case attempts for `floors`
    pub attempts: u64,
    /// Floors attempted, strictly increasing, ending at `floors`
    pub drops: Vec<u64>,
}

impl DropPlan {
    /// Number of attempts if every drop survives.
    pub fn len(&self) -> usize {
        self.drops.len()
    }

    /// True for the zero-floor building.
    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    /// Step sizes between consecutive drops.
    pub fn steps(&self) -> impl Iterator<Item = u64> + '_ {
        let mut previous = 0;
        self.drops.iter().map(move |&floor| {
            let step = floor - previous;
            previous = floor;
            step
        })
    }

    /// Worst-case attempts when following this plan.
    ///
    /// A break at the `i`-th drop costs `i` drops plus `step - 1` linear
    /// checks; surviving every drop costs `len()` drops.
    pub fn worst_case_attempts(&self) -> u64 {
        let breaks = self
            .steps()
            .enumerate()
            .map(|(i, step)| i as u64 + step)
            .max()
            .unwrap_or(0);
        breaks.max(self.drops.len() as u64)
    }
}
