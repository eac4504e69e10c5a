use serde::{Deserialize, Serialize};

use crate::task::Category;

/// Every progression step that the front end should react to produces an
/// Event. Events are returned in the order they happened, exactly once per
/// call; timers for toasts and banners belong to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TaskCompleted {
        task_id: String,
        category: Category,
        reward: u64,
        punya_earned: f64,
    },
    /// Emitted once per level crossed.
    LevelUp {
        new_level: u32,
    },
    StreakUpdated {
        streak_days: u32,
    },
    /// A new weekly encounter replaced the previous one.
    BossRotated {
        boss_id: String,
    },
    BossDamaged {
        boss_id: String,
        damage: u32,
        remaining_hp: u32,
    },
    BossDefeated {
        boss_id: String,
        loot: u64,
    },
    AchievementUnlocked {
        id: String,
    },
}
