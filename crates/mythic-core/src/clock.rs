//! The moment an operation happens.
//!
//! Streaks, daily caps and boss weeks compare calendar dates in the
//! user's local time zone, while cooldowns are measured on the UTC
//! timeline. A [`Moment`] carries both so that every engine function stays
//! a pure function of its inputs.

use chrono::{DateTime, Local, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    /// Local calendar date.
    pub today: NaiveDate,
    /// Instant on the UTC timeline.
    pub at: DateTime<Utc>,
}

impl Moment {
    pub fn new(today: NaiveDate, at: DateTime<Utc>) -> Self {
        Self { today, at }
    }

    /// The current moment according to the system clock.
    pub fn now() -> Self {
        let local = Local::now();
        Self {
            today: local.date_naive(),
            at: local.with_timezone(&Utc),
        }
    }
}
