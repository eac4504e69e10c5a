//! Level and streak arithmetic.

mod level;
mod streak;

pub use level::{
    level_floor, level_for_karma, threshold_for_level, LevelProgress, KARMA_PER_LEVEL_UNIT,
};
pub use streak::{Streak, StreakChange};
