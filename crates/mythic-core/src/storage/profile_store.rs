//! Mapping between [`ProfileState`] and the key-value store.
//!
//! Each part of the profile lives under its own key so the layout stays
//! readable by the mobile app's storage format:
//!
//! | key suffix        | value                               |
//! |-------------------|-------------------------------------|
//! | `display_name`    | plain string                        |
//! | `karma`           | karma within the level              |
//! | `lifetime_karma`  | lifetime karma counter              |
//! | `level`           | Siddhi level                        |
//! | `punya`           | merit                               |
//! | `tasks`           | active task list                    |
//! | `streak`          | streak length in days               |
//! | `last_active`     | `YYYY-MM-DD` of last activity       |
//! | `quest_log`       | quest id -> completion record       |
//! | `achievements`    | achievements with unlock state      |
//! | `boss`            | active encounter (absent if none)   |
//! | `total_tasks`     | tasks completed                     |
//! | `category_counts` | category -> tasks completed         |
//!
//! Profiles written by the mobile app keep their merit under `puna`; it is
//! read when `punya` is absent.
//!
//! Writes across keys are not atomic, so loading accepts any subset of
//! keys being absent or unreadable and falls back to defaults for them.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use super::KeyValueStore;
use crate::achievements::{self, Achievement};
use crate::boss::BossEncounter;
use crate::error::StorageError;
use crate::profile::ProfileState;
use crate::progression::{level_floor, Streak};
use crate::quest::QuestLogEntry;
use crate::task::{Category, Task};

pub const DEFAULT_KEY_PREFIX: &str = "@mythic_";

const DISPLAY_NAME: &str = "display_name";
const KARMA: &str = "karma";
const LIFETIME_KARMA: &str = "lifetime_karma";
const LEVEL: &str = "level";
const PUNYA: &str = "punya";
const TASKS: &str = "tasks";
const STREAK: &str = "streak";
const LAST_ACTIVE: &str = "last_active";
const QUEST_LOG: &str = "quest_log";
const ACHIEVEMENTS: &str = "achievements";
const BOSS: &str = "boss";
const TOTAL_TASKS: &str = "total_tasks";
const CATEGORY_COUNTS: &str = "category_counts";
const LEGACY_PUNYA: &str = "puna";

/// Every key suffix the profile is written under.
pub const KEYS: [&str; 13] = [
    DISPLAY_NAME,
    KARMA,
    LIFETIME_KARMA,
    LEVEL,
    PUNYA,
    TASKS,
    STREAK,
    LAST_ACTIVE,
    QUEST_LOG,
    ACHIEVEMENTS,
    BOSS,
    TOTAL_TASKS,
    CATEGORY_COUNTS,
];

/// Reads and writes a profile through a [`KeyValueStore`].
pub struct ProfileStore<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, DEFAULT_KEY_PREFIX)
    }

    pub fn with_prefix(store: S, prefix: &str) -> Self {
        Self {
            store,
            prefix: prefix.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }

    fn read_raw(&self, suffix: &str) -> Option<String> {
        let key = self.key(suffix);
        match self.store.get_item(&key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read key, using default");
                None
            }
        }
    }

    fn read<T: DeserializeOwned>(&self, suffix: &str) -> Option<T> {
        let raw = self.read_raw(suffix)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key = %self.key(suffix), error = %e, "ignoring unreadable value");
                None
            }
        }
    }

    /// Load the profile, defaulting every missing or unreadable part.
    pub fn load(&self) -> ProfileState {
        let mut state = ProfileState::default();

        state.display_name = self
            .read_raw(DISPLAY_NAME)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let lifetime = self.read::<u64>(LIFETIME_KARMA).or_else(|| {
            let level = self.read::<u32>(LEVEL).filter(|l| *l >= 1);
            let karma = self.read::<u64>(KARMA);
            if level.is_none() && karma.is_none() {
                return None;
            }
            Some(level_floor(level.unwrap_or(1)).saturating_add(karma.unwrap_or(0)))
        });
        state.set_lifetime_karma(lifetime.unwrap_or(0));

        state.punya = self
            .read::<f64>(PUNYA)
            .or_else(|| self.read::<f64>(LEGACY_PUNYA))
            .filter(|p| p.is_finite() && *p >= 0.0)
            .unwrap_or(0.0);

        state.tasks = dedup_tasks(self.read::<Vec<Task>>(TASKS).unwrap_or_default());

        state.streak = Streak {
            days: self.read::<u32>(STREAK).unwrap_or(0),
            last_active: self.read::<NaiveDate>(LAST_ACTIVE),
        };

        state.quest_log = self
            .read::<BTreeMap<String, QuestLogEntry>>(QUEST_LOG)
            .unwrap_or_default();

        state.achievements = achievements::merge_with_catalog(
            self.read::<Vec<Achievement>>(ACHIEVEMENTS).unwrap_or_default(),
        );

        state.boss = self.read::<BossEncounter>(BOSS).map(|mut boss| {
            boss.current_hp = boss.current_hp.min(boss.max_hp);
            if boss.current_hp == 0 {
                boss.defeated = true;
            }
            boss
        });

        state.tasks_by_category = self
            .read::<BTreeMap<Category, u64>>(CATEGORY_COUNTS)
            .unwrap_or_default();
        let category_sum: u64 = state.tasks_by_category.values().sum();
        state.total_tasks_completed = self
            .read::<u64>(TOTAL_TASKS)
            .unwrap_or(0)
            .max(category_sum);

        state
    }

    /// Write every part of the profile.
    ///
    /// Every key is attempted even after a failure; the first error is
    /// returned.
    pub fn save(&self, state: &ProfileState) -> Result<(), StorageError> {
        let mut first_error = None;
        let mut record = |result: Result<(), StorageError>| {
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        };

        record(match &state.display_name {
            Some(name) => self.store.set_item(&self.key(DISPLAY_NAME), name),
            None => self.store.remove_item(&self.key(DISPLAY_NAME)),
        });
        record(self.write(KARMA, &state.karma));
        record(self.write(LIFETIME_KARMA, &state.lifetime_karma));
        record(self.write(LEVEL, &state.level));
        record(self.write(PUNYA, &state.punya));
        record(self.write(TASKS, &state.tasks));
        record(self.write(STREAK, &state.streak.days));
        record(match &state.streak.last_active {
            Some(date) => self.write(LAST_ACTIVE, date),
            None => self.store.remove_item(&self.key(LAST_ACTIVE)),
        });
        record(self.write(QUEST_LOG, &state.quest_log));
        record(self.write(ACHIEVEMENTS, &state.achievements));
        record(match &state.boss {
            Some(boss) => self.write(BOSS, boss),
            None => self.store.remove_item(&self.key(BOSS)),
        });
        record(self.write(TOTAL_TASKS, &state.total_tasks_completed));
        record(self.write(CATEGORY_COUNTS, &state.tasks_by_category));

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Remove every profile key.
    pub fn clear(&self) -> Result<(), StorageError> {
        for suffix in KEYS.into_iter().chain([LEGACY_PUNYA]) {
            self.store.remove_item(&self.key(suffix))?;
        }
        Ok(())
    }

    fn write<T: Serialize + ?Sized>(&self, suffix: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::QueryFailed(format!("serialize {suffix}: {e}")))?;
        self.store.set_item(&self.key(suffix), &json)
    }
}

/// Drop tasks whose id already appeared earlier in the list.
fn dedup_tasks(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    tasks
        .into_iter()
        .filter(|task| {
            let fresh = seen.insert(task.id.clone());
            if !fresh {
                tracing::warn!(task_id = %task.id, "dropping duplicate task id");
            }
            fresh
        })
        .collect()
}
