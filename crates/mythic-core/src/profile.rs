//! The single profile record the engine mutates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::achievements::{self, Achievement, Totals};
use crate::boss::BossEncounter;
use crate::progression::{LevelProgress, Streak};
use crate::quest::QuestLogEntry;
use crate::task::{Category, Task};

/// Everything the app knows about its one user.
///
/// Mutated only through [`crate::engine`] operations. `karma` and `level`
/// are always re-derived from `lifetime_karma`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileState {
    pub display_name: Option<String>,
    pub lifetime_karma: u64,
    /// Karma earned within the current level.
    pub karma: u64,
    pub level: u32,
    /// Punya: merit accrued alongside karma, never spent.
    pub punya: f64,
    pub streak: Streak,
    pub total_tasks_completed: u64,
    pub tasks_by_category: BTreeMap<Category, u64>,
    /// Active tasks, most recent first.
    pub tasks: Vec<Task>,
    pub quest_log: BTreeMap<String, QuestLogEntry>,
    pub achievements: Vec<Achievement>,
    pub boss: Option<BossEncounter>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            display_name: None,
            lifetime_karma: 0,
            karma: 0,
            level: 1,
            punya: 0.0,
            streak: Streak::default(),
            total_tasks_completed: 0,
            tasks_by_category: BTreeMap::new(),
            tasks: Vec::new(),
            quest_log: BTreeMap::new(),
            achievements: achievements::catalog(),
            boss: None,
        }
    }
}

impl ProfileState {
    pub fn progress(&self) -> LevelProgress {
        LevelProgress::from_lifetime(self.lifetime_karma)
    }

    pub fn streak_days(&self) -> u32 {
        self.streak.days
    }

    pub fn last_active_date(&self) -> Option<NaiveDate> {
        self.streak.last_active
    }

    pub fn tasks_in(&self, category: Category) -> u64 {
        self.tasks_by_category.get(&category).copied().unwrap_or(0)
    }

    /// Set lifetime karma and re-derive the in-level fields.
    pub(crate) fn set_lifetime_karma(&mut self, lifetime_karma: u64) {
        let progress = LevelProgress::from_lifetime(lifetime_karma);
        self.lifetime_karma = lifetime_karma;
        self.karma = progress.karma;
        self.level = progress.level;
    }

    pub(crate) fn totals(&self) -> Totals {
        Totals {
            tasks_completed: self.total_tasks_completed,
            streak_days: self.streak.days,
            level: self.level,
            lifetime_karma: self.lifetime_karma,
            tasks_by_category: self.tasks_by_category.clone(),
        }
    }

    pub fn unlocked_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_starts_at_level_one() {
        let state = ProfileState::default();
        assert_eq!(state.level, 1);
        assert_eq!(state.karma, 0);
        assert_eq!(state.streak_days(), 0);
        assert!(state.last_active_date().is_none());
        assert!(state.achievements.iter().all(|a| !a.unlocked));
        assert_eq!(state.unlocked_achievements().count(), 0);
    }

    #[test]
    fn set_lifetime_karma_derives_level() {
        let mut state = ProfileState::default();
        state.set_lifetime_karma(450);
        assert_eq!(state.level, 3);
        assert_eq!(state.karma, 50);
        assert_eq!(state.progress().next_threshold, 900);
    }
}
