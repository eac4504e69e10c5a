//! Achievements: static definitions plus a one-way unlock flag.

mod definitions;

pub use definitions::{AchievementDef, DEFINITIONS};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::task::Category;

/// What must be true for an achievement to unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Requirement {
    TaskCount { threshold: u64 },
    StreakDays { threshold: u32 },
    LevelReached { threshold: u32 },
    KarmaEarned { threshold: u64 },
    CategoryTaskCount { category: Category, threshold: u64 },
}

/// Profile totals an achievement requirement is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    pub tasks_completed: u64,
    pub streak_days: u32,
    pub level: u32,
    pub lifetime_karma: u64,
    pub tasks_by_category: BTreeMap<Category, u64>,
}

impl Requirement {
    pub fn is_met(&self, totals: &Totals) -> bool {
        match *self {
            Requirement::TaskCount { threshold } => totals.tasks_completed >= threshold,
            Requirement::StreakDays { threshold } => totals.streak_days >= threshold,
            Requirement::LevelReached { threshold } => totals.level >= threshold,
            Requirement::KarmaEarned { threshold } => totals.lifetime_karma >= threshold,
            Requirement::CategoryTaskCount { category, threshold } => {
                totals.tasks_by_category.get(&category).copied().unwrap_or(0) >= threshold
            }
        }
    }
}

/// An achievement together with its unlock state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub requirement: Requirement,
    #[serde(default)]
    pub unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn from_def(def: &AchievementDef) -> Self {
        Self {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            requirement: def.requirement,
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// Every achievement in the catalog, all locked.
pub fn catalog() -> Vec<Achievement> {
    DEFINITIONS.iter().map(Achievement::from_def).collect()
}

/// Rebuild the achievement list from the catalog, carrying over unlock
/// state from a persisted list. Definitions always come from the catalog;
/// persisted entries whose id left the catalog are kept so an unlock is
/// never lost.
pub fn merge_with_catalog(persisted: Vec<Achievement>) -> Vec<Achievement> {
    let mut stored: BTreeMap<String, Achievement> = persisted
        .into_iter()
        .map(|a| (a.id.clone(), a))
        .collect();

    let mut merged: Vec<Achievement> = DEFINITIONS
        .iter()
        .map(|def| {
            let mut achievement = Achievement::from_def(def);
            if let Some(saved) = stored.remove(def.id) {
                achievement.unlocked = saved.unlocked;
                achievement.unlocked_at = saved.unlocked_at;
            }
            achievement
        })
        .collect();

    merged.extend(stored.into_values().filter(|a| a.unlocked));
    merged
}

/// Unlock every locked achievement whose requirement is now met.
///
/// Returns the ids of the newly unlocked entries in list order. Entries
/// that are already unlocked are skipped without being re-checked.
pub fn evaluate(
    achievements: &mut [Achievement],
    totals: &Totals,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut newly_unlocked = Vec::new();
    for achievement in achievements.iter_mut().filter(|a| !a.unlocked) {
        if achievement.requirement.is_met(totals) {
            achievement.unlocked = true;
            achievement.unlocked_at = Some(now);
            newly_unlocked.push(achievement.id.clone());
        }
    }
    newly_unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn totals(tasks: u64, streak: u32, level: u32, karma: u64) -> Totals {
        Totals {
            tasks_completed: tasks,
            streak_days: streak,
            level,
            lifetime_karma: karma,
            tasks_by_category: BTreeMap::new(),
        }
    }

    #[test]
    fn first_task_unlocks_first_step() {
        let mut list = catalog();
        let unlocked = evaluate(&mut list, &totals(1, 1, 1, 20), Utc::now());
        assert_eq!(unlocked, vec!["first-step".to_string()]);
        assert!(list.iter().find(|a| a.id == "first-step").unwrap().unlocked_at.is_some());
    }

    #[test]
    fn several_unlock_at_once() {
        let mut list = catalog();
        let unlocked = evaluate(&mut list, &totals(10, 3, 2, 150), Utc::now());
        assert!(unlocked.contains(&"first-step".to_string()));
        assert!(unlocked.contains(&"ten-deeds".to_string()));
        assert!(unlocked.contains(&"three-day-flame".to_string()));
        assert!(unlocked.contains(&"awakened".to_string()));
    }

    #[test]
    fn unlocked_entries_are_not_reported_again() {
        let mut list = catalog();
        let first = evaluate(&mut list, &totals(1, 1, 1, 10), Utc::now());
        let second = evaluate(&mut list, &totals(1, 1, 1, 10), Utc::now());
        assert!(!first.is_empty());
        assert!(second.is_empty());
    }

    #[test]
    fn unlock_survives_lower_totals() {
        let mut list = catalog();
        evaluate(&mut list, &totals(0, 7, 1, 0), Utc::now());
        evaluate(&mut list, &totals(0, 1, 1, 0), Utc::now());
        assert!(list.iter().find(|a| a.id == "seven-day-flame").unwrap().unlocked);
    }

    #[test]
    fn category_requirement_reads_its_own_counter() {
        let req = Requirement::CategoryTaskCount { category: Category::Ojas, threshold: 2 };
        let mut t = totals(5, 0, 1, 0);
        t.tasks_by_category.insert(Category::Kriya, 5);
        assert!(!req.is_met(&t));
        t.tasks_by_category.insert(Category::Ojas, 2);
        assert!(req.is_met(&t));
    }

    #[test]
    fn requirement_serializes_with_kind_tag() {
        let req = Requirement::CategoryTaskCount { category: Category::Gyana, threshold: 10 };
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(json["kind"], "category_task_count");
        assert_eq!(json["category"], "gyana");
        assert_eq!(json["threshold"], 10);
    }

    #[test]
    fn merge_keeps_unlock_state_and_refreshes_definitions() {
        let mut saved = catalog();
        saved[0].unlocked = true;
        saved[0].title = "Old title".into();
        let mut retired = Achievement::from_def(&DEFINITIONS[0]);
        retired.id = "retired".into();
        retired.unlocked = true;
        saved.push(retired);

        let merged = merge_with_catalog(saved);
        assert_eq!(merged.len(), DEFINITIONS.len() + 1);
        assert!(merged[0].unlocked);
        assert_eq!(merged[0].title, DEFINITIONS[0].title);
        assert!(merged.iter().any(|a| a.id == "retired"));
    }

    #[test]
    fn merge_of_nothing_is_the_catalog() {
        assert_eq!(merge_with_catalog(Vec::new()), catalog());
    }

    proptest! {
        #[test]
        fn unlocks_never_revert(
            steps in proptest::collection::vec((0u64..60, 0u32..40, 1u32..12, 0u64..20_000), 1..20)
        ) {
            let mut list = catalog();
            let mut seen: Vec<String> = Vec::new();
            for (tasks, streak, level, karma) in steps {
                evaluate(&mut list, &totals(tasks, streak, level, karma), Utc::now());
                for id in &seen {
                    prop_assert!(list.iter().find(|a| &a.id == id).unwrap().unlocked);
                }
                seen = list.iter().filter(|a| a.unlocked).map(|a| a.id.clone()).collect();
            }
        }
    }
}
