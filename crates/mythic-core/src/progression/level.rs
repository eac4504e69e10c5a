//! Siddhi levels derived from lifetime karma.
//!
//! Levels follow a closed-form curve: level `L` covers lifetime karma in
//! `[100 * (L-1)^2, 100 * L^2)`. Because the level is recomputed from a
//! single lifetime counter, the result does not depend on the order or
//! size of the rewards that produced it.

use serde::{Deserialize, Serialize};

/// Karma scale of the level curve.
pub const KARMA_PER_LEVEL_UNIT: u64 = 100;

/// Level reached with `lifetime_karma` karma: `floor(sqrt(k / 100)) + 1`.
pub fn level_for_karma(lifetime_karma: u64) -> u32 {
    let root = isqrt(lifetime_karma / KARMA_PER_LEVEL_UNIT);
    u32::try_from(root).unwrap_or(u32::MAX - 1) + 1
}

/// Lifetime karma at which `level` is left behind: `100 * L^2`.
pub fn threshold_for_level(level: u32) -> u64 {
    let level = u64::from(level);
    KARMA_PER_LEVEL_UNIT.saturating_mul(level.saturating_mul(level))
}

/// Lifetime karma at which `level` begins: `100 * (L-1)^2`.
pub fn level_floor(level: u32) -> u64 {
    threshold_for_level(level.saturating_sub(1))
}

/// Floor of the square root, exact for every `u64`.
fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// Where a lifetime karma total sits on the level curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    /// Karma earned since the current level began.
    pub karma: u64,
    /// Karma between the start of this level and the next.
    pub band: u64,
    /// Lifetime karma needed to reach the next level.
    pub next_threshold: u64,
    pub lifetime_karma: u64,
}

impl LevelProgress {
    pub fn from_lifetime(lifetime_karma: u64) -> Self {
        let level = level_for_karma(lifetime_karma);
        let floor = level_floor(level);
        let next_threshold = threshold_for_level(level);
        Self {
            level,
            karma: lifetime_karma - floor,
            band: next_threshold - floor,
            next_threshold,
            lifetime_karma,
        }
    }

    /// Fraction of the current band completed (0.0 - 1.0).
    pub fn fraction(&self) -> f64 {
        if self.band == 0 {
            1.0
        } else {
            self.karma as f64 / self.band as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_for_karma() {
        assert_eq!(level_for_karma(0), 1);
        assert_eq!(level_for_karma(99), 1);
        assert_eq!(level_for_karma(100), 2);
        assert_eq!(level_for_karma(150), 2);
        assert_eq!(level_for_karma(399), 2);
        assert_eq!(level_for_karma(400), 3);
        assert_eq!(level_for_karma(900), 4);
        assert_eq!(level_for_karma(1_000_000), 101);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(threshold_for_level(1), 100);
        assert_eq!(threshold_for_level(2), 400);
        assert_eq!(level_floor(1), 0);
        assert_eq!(level_floor(3), 400);
    }

    #[test]
    fn test_progress_after_150_karma() {
        let progress = LevelProgress::from_lifetime(150);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.karma, 50);
        assert_eq!(progress.next_threshold, 400);
        assert_eq!(progress.band, 300);
        assert!((progress.fraction() - 50.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_isqrt_edges() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(u64::MAX), u64::from(u32::MAX));
    }

    proptest! {
        #[test]
        fn level_is_monotonic(a in 0u64..10_000_000, b in 0u64..10_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_for_karma(hi) >= level_for_karma(lo));
        }

        #[test]
        fn karma_stays_inside_level_band(total in 0u64..100_000_000) {
            let progress = LevelProgress::from_lifetime(total);
            prop_assert!(progress.karma < threshold_for_level(progress.level));
            prop_assert!(progress.karma < progress.band);
            prop_assert!(total >= level_floor(progress.level));
        }
    }
}
