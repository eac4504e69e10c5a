//! Daily streak tracking.
//!
//! Streaks compare local calendar dates, never timestamp deltas, so a
//! daylight-saving shift can neither break nor double-count a day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive days with at least one completed task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub days: u32,
    pub last_active: Option<NaiveDate>,
}

/// What happened to the streak on an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already counted today.
    Unchanged,
    /// Activity yesterday, streak continues.
    Extended,
    /// First activity ever, or a gap of two days or more.
    Restarted,
}

impl Streak {
    /// Record activity on `today`.
    pub fn update(&mut self, today: NaiveDate) -> StreakChange {
        let change = match self.last_active {
            Some(last) if last == today => StreakChange::Unchanged,
            Some(last) if today.pred_opt() == Some(last) => {
                self.days = self.days.saturating_add(1);
                StreakChange::Extended
            }
            _ => {
                self.days = 1;
                StreakChange::Restarted
            }
        };
        self.last_active = Some(today);
        change
    }

    /// Whether the streak can still be extended: activity today or yesterday.
    pub fn is_alive(&self, today: NaiveDate) -> bool {
        match self.last_active {
            Some(last) => last == today || today.pred_opt() == Some(last),
            None => false,
        }
    }
}
