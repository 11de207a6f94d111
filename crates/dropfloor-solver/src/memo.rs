//! Fixed-capacity memo store.
//!
//! One slot per floor count `0..=capacity`. A slot is either empty or holds
//! the final worst-case cost for that floor count; validity is tracked out
//! of band, so the genuine answer `0` for zero floors is cached like any
//! other. Slots are write-once: the recurrence is a pure function of the
//! floor count, so a filled slot never changes.

use crate::error::{Error, Result};

/// Fixed-capacity mapping from floor count to best worst-case cost.
#[derive(Debug, Clone)]
pub struct MemoStore {
    slots: Vec<Option<u64>>,
    capacity: u64,
    filled: usize,
}

impl MemoStore {
    /// Create a store accepting floor counts up to `capacity` inclusive.
    pub fn new(capacity: u64) -> Result<Self> {
        let len = usize::try_from(capacity)
            .ok()
            .and_then(|c| c.checked_add(1))
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "capacity {} does not fit in memory on this platform",
                    capacity
                ))
            })?;

        Ok(Self {
            slots: vec![None; len],
            capacity,
            filled: 0,
        })
    }

    /// Largest floor count this store accepts.
    #[inline]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of floor counts with a stored answer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.filled
    }

    /// True if nothing has been stored yet.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Fail with [`Error::CapacityExceeded`] if `floors` has no slot.
    #[inline]
    pub fn check(&self, floors: u64) -> Result<usize> {
        if floors > self.capacity {
            return Err(Error::CapacityExceeded {
                floors,
                capacity: self.capacity,
            });
        }
        // capacity fits in usize (checked in `new`)
        Ok(floors as usize)
    }

    /// Stored cost for `floors`, if computed.
    #[inline]
    pub fn get(&self, floors: u64) -> Result<Option<u64>> {
        let idx = self.check(floors)?;
        Ok(self.slots[idx])
    }

    /// Store the cost for `floors`.
    ///
    /// The first write wins. Writing the same value again is a no-op; a
    /// different value for a filled slot is a logic error and is caught in
    /// debug builds.
    pub fn insert(&mut self, floors: u64, cost: u64) -> Result<u64> {
        let idx = self.check(floors)?;
        match self.slots[idx] {
            Some(existing) => {
                debug_assert_eq!(existing, cost, "memo slot {} rewritten", floors);
                Ok(existing)
            }
            None => {
                self.slots[idx] = Some(cost);
                self.filled += 1;
                Ok(cost)
            }
        }
    }

    /// Length of the contiguous computed prefix `0..n`.
    ///
    /// Bottom-up tabulation resumes from here.
    pub fn prefix_len(&self) -> u64 {
        self.slots.iter().take_while(|slot| slot.is_some()).count() as u64
    }

    /// Iterate over `(floors, cost)` for every stored entry, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(floors, slot)| slot.map(|cost| (floors as u64, cost)))
    }
}
