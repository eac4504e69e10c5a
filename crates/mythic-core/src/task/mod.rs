//! Tasks and the three paths they belong to.
//!
//! A task lives in the profile's active list from the moment it is added
//! until it is completed. There is no edit or manual delete.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ValidationError;

/// Path a task belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Action (fire): work, duty, career, coding
    Kriya,
    /// Wisdom (water): learning, reading, planning
    Gyana,
    /// Vitality (earth): health, fitness, meditation
    Ojas,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Kriya, Category::Gyana, Category::Ojas];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Kriya => "kriya",
            Category::Gyana => "gyana",
            Category::Ojas => "ojas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Kriya => "KRIYA",
            Category::Gyana => "GYANA",
            Category::Ojas => "OJAS",
        }
    }

    /// Short meaning shown next to the label.
    pub fn meaning(&self) -> &'static str {
        match self {
            Category::Kriya => "Action (Fire)",
            Category::Gyana => "Wisdom (Water)",
            Category::Ojas => "Vitality (Earth)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Kriya => {
                "Tasks related to work, duty, career, and coding. The energy of doing."
            }
            Category::Gyana => "Tasks related to learning, reading, planning, and intellect.",
            Category::Ojas => "Tasks related to health, fitness, meditation, and the body.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kriya" | "action" => Ok(Category::Kriya),
            "gyana" | "wisdom" => Ok(Category::Gyana),
            "ojas" | "vitality" => Ok(Category::Ojas),
            other => Err(ValidationError::InvalidValue {
                field: "category".into(),
                message: format!("unknown category '{other}' (expected kriya, gyana or ojas)"),
            }),
        }
    }
}

/// A task in the active list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(alias = "type")]
    pub category: Category,
    /// Karma granted on completion; 0 is allowed for custom entries.
    #[serde(alias = "xp")]
    pub reward: u64,
    /// Preset quest this task was accepted from, if any.
    #[serde(default)]
    pub source_quest: Option<String>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a task, rejecting titles that are empty after trimming.
    ///
    /// The id is a UUID v7, so it is derived from the creation time and is
    /// still unique for tasks created within the same millisecond.
    pub fn new(
        title: &str,
        category: Category,
        reward: u64,
        source_quest: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            id: Uuid::now_v7().to_string(),
            title: title.to_string(),
            category,
            reward,
            source_quest,
            created_at,
        })
    }

    pub fn is_quest(&self) -> bool {
        self.source_quest.is_some()
    }
}

/// How free-form tasks without an explicit reward are priced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardPolicy {
    range: RangeInclusive<u64>,
}

impl RewardPolicy {
    pub fn new(min: u64, max: u64) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvalidValue {
                field: "rewards".into(),
                message: format!("free_form_min ({min}) exceeds free_form_max ({max})"),
            });
        }
        Ok(Self { range: min..=max })
    }

    pub fn range(&self) -> &RangeInclusive<u64> {
        &self.range
    }

    /// Use the caller's reward when given, otherwise draw uniformly.
    pub fn resolve<R: Rng + ?Sized>(&self, requested: Option<u64>, rng: &mut R) -> u64 {
        match requested {
            Some(reward) => reward,
            None => rng.gen_range(self.range.clone()),
        }
    }
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self { range: 10..=24 }
    }
}
