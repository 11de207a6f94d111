//! Triangular-number closed form.
//!
//! With `t` attempts the optimal strategy covers `t + (t - 1) + ... + 1`
//! floors, so the answer for `n` floors is the smallest `t` with
//! `t(t + 1) / 2 >= n`. No memo store is involved.

/// Floors covered by `t` attempts: `t(t + 1) / 2`.
///
/// Saturates at `u64::MAX`.
#[inline]
pub const fn triangular(t: u64) -> u64 {
    let (product, overflow) = t.overflowing_mul(t.wrapping_add(1));
    if overflow || t == u64::MAX {
        // t(t+1) overflowed; halve before multiplying instead
        let (half, odd) = if t % 2 == 0 { (t / 2, t.saturating_add(1)) } else { ((t / 2) + 1, t) };
        half.saturating_mul(odd)
    } else {
        product / 2
    }
}

/// Smallest `t` with `triangular(t) >= floors`.
///
/// Subtracts 1, 2, 3, ... from the floor count until nothing is left, so the
/// loop runs `O(sqrt(floors))` times.
pub fn min_attempts(floors: u64) -> u64 {
    let mut left = floors;
    let mut attempts = 0u64;
    while left > 0 {
        attempts += 1;
        left = left.saturating_sub(attempts);
    }
    attempts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangular_numbers() {
        let expected = [0, 1, 3, 6, 10, 15, 21, 28];
        for (t, &want) in expected.iter().enumerate() {
            assert_eq!(triangular(t as u64), want, "triangular({})", t);
        }
        assert_eq!(triangular(179), 16_110);
    }

    #[test]
    fn triangular_saturates() {
        assert_eq!(triangular(u64::MAX), u64::MAX);
        assert_eq!(triangular(1 << 33), u64::MAX);
    }

    #[test]
    fn min_attempts_small() {
        let cases = [(0, 0), (1, 1), (2, 2), (3, 2), (4, 3), (6, 3), (7, 4), (10, 4), (11, 5)];
        for (floors, want) in cases {
            assert_eq!(min_attempts(floors), want, "min_attempts({})", floors);
        }
    }

    #[test]
    fn min_attempts_reference_inputs() {
        assert_eq!(min_attempts(100), 14);
        assert_eq!(min_attempts(16_090), 179);
    }

    #[test]
    fn min_attempts_is_tight() {
        for floors in 1..2_000u64 {
            let t = min_attempts(floors);
            assert!(triangular(t) >= floors, "t={} too small for {}", t, floors);
            assert!(triangular(t - 1) < floors, "t={} not minimal for {}", t, floors);
        }
    }
}
