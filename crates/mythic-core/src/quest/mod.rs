//! Preset quests and their admission control.
//!
//! A preset quest can be accepted only when two independent gates agree:
//! the per-day cap and the cooldown since the last completion. Both gates
//! read the quest's static definition and its [`QuestLogEntry`]; nothing
//! else.

mod catalog;

pub use catalog::{find_quest, quests_for, QUESTS};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::task::Category;

/// Difficulty tier of a preset quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Novice,
    Adept,
    Master,
}

/// A repeatable task template from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetQuest {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub reward: u64,
    pub tier: Difficulty,
    pub cooldown_minutes: u32,
    pub daily_cap: u32,
}

/// Completion history of one preset quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestLogEntry {
    pub last_completed_at: DateTime<Utc>,
    /// Only meaningful while `date` is today.
    pub completions_today: u32,
    pub date: NaiveDate,
}

impl QuestLogEntry {
    /// Completions counted against today's cap.
    pub fn completions_on(&self, today: NaiveDate) -> u32 {
        if self.date == today {
            self.completions_today
        } else {
            0
        }
    }
}

/// Why a quest cannot be accepted right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Denial {
    DailyLimitReached { daily_cap: u32 },
    Cooldown { remaining_minutes: i64 },
}

impl Denial {
    pub fn reason(&self) -> &'static str {
        match self {
            Denial::DailyLimitReached { .. } => "daily limit reached",
            Denial::Cooldown { .. } => "cooldown",
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::DailyLimitReached { daily_cap } => {
                write!(f, "daily limit reached ({daily_cap} per day)")
            }
            Denial::Cooldown { remaining_minutes } => {
                write!(f, "cooldown ({remaining_minutes} min remaining)")
            }
        }
    }
}

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Admission {
    Allowed,
    Denied(Denial),
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Admission::Allowed => None,
            Admission::Denied(denial) => Some(denial.reason()),
        }
    }

    pub fn cooldown_remaining_minutes(&self) -> Option<i64> {
        match self {
            Admission::Denied(Denial::Cooldown { remaining_minutes }) => Some(*remaining_minutes),
            _ => None,
        }
    }
}

/// Check whether `quest` may be accepted now.
///
/// The daily cap is checked before the cooldown. A completion timestamp in
/// the future (clock moved backwards) counts as zero elapsed time.
pub fn can_complete(
    quest: &PresetQuest,
    entry: Option<&QuestLogEntry>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Admission {
    let Some(entry) = entry else {
        return Admission::Allowed;
    };

    if entry.date == today && entry.completions_today >= quest.daily_cap {
        return Admission::Denied(Denial::DailyLimitReached {
            daily_cap: quest.daily_cap,
        });
    }

    let cooldown_ms = i64::from(quest.cooldown_minutes) * 60_000;
    let elapsed_ms = (now - entry.last_completed_at).num_milliseconds().max(0);
    if elapsed_ms < cooldown_ms {
        let remaining_ms = cooldown_ms - elapsed_ms;
        let remaining_minutes = (remaining_ms + 59_999) / 60_000;
        return Admission::Denied(Denial::Cooldown { remaining_minutes });
    }

    Admission::Allowed
}

/// Log entry after one more completion at `now`.
pub fn record_completion(
    entry: Option<&QuestLogEntry>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> QuestLogEntry {
    let completions_today = match entry {
        Some(e) if e.date == today => e.completions_today.saturating_add(1),
        _ => 1,
    };
    QuestLogEntry {
        last_completed_at: now,
        completions_today,
        date: today,
    }
}
