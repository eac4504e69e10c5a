//! Weekly boss encounters.
//!
//! One encounter is active per calendar week (Monday to Sunday). The boss
//! for a week is chosen from the roster by the week's start date alone, so
//! every session that looks at the same week sees the same boss.

mod roster;

pub use roster::{BossDef, ROSTER};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The active weekly encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossEncounter {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    /// Never exceeds `max_hp`; never increases while the encounter lasts.
    pub current_hp: u32,
    pub damage_per_completion: u32,
    pub loot: u64,
    pub week_start: NaiveDate,
    /// One-way flag.
    pub defeated: bool,
}

/// Result of landing one hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Boss already defeated; nothing changed.
    Ignored,
    Damaged { damage: u32, remaining_hp: u32 },
    /// This hit brought the boss to zero. Loot is paid for this hit only.
    Defeated { damage: u32, loot: u64 },
}

impl BossEncounter {
    pub fn from_def(def: &BossDef, week_start: NaiveDate) -> Self {
        Self {
            id: def.id.to_string(),
            name: def.name.to_string(),
            max_hp: def.max_hp,
            current_hp: def.max_hp,
            damage_per_completion: def.damage_per_completion,
            loot: def.loot,
            week_start,
            defeated: false,
        }
    }

    /// Apply one completion's worth of damage, flooring HP at zero.
    pub fn apply_damage(&mut self) -> Hit {
        if self.defeated {
            return Hit::Ignored;
        }
        let before = self.current_hp.min(self.max_hp);
        self.current_hp = before.saturating_sub(self.damage_per_completion);
        let damage = before - self.current_hp;
        if self.current_hp == 0 {
            self.defeated = true;
            Hit::Defeated {
                damage,
                loot: self.loot,
            }
        } else {
            Hit::Damaged {
                damage,
                remaining_hp: self.current_hp,
            }
        }
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.week_start == week_start(today)
    }
}

/// Most recent Monday on or before `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let offset = i64::from(today.weekday().num_days_from_monday());
    today - chrono::Duration::days(offset)
}

/// Roster slot for the week that starts on `week_start`.
pub fn roster_index(week_start: NaiveDate, roster_len: usize) -> usize {
    if roster_len == 0 {
        return 0;
    }
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
    let days = (week_start - epoch).num_days();
    let week = days.div_euclid(7);
    week.rem_euclid(roster_len as i64) as usize
}

/// Keep `current` if it belongs to this week, otherwise start this week's
/// encounter at full health. Returns `None` only for an empty roster.
pub fn rotate_if_needed(
    current: Option<BossEncounter>,
    today: NaiveDate,
    roster: &[BossDef],
) -> Option<BossEncounter> {
    match current {
        Some(boss) if boss.is_active(today) => Some(boss),
        _ => {
            let start = week_start(today);
            let def = roster.get(roster_index(start, roster.len()))?;
            Some(BossEncounter::from_def(def, start))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn boss(current_hp: u32, damage: u32) -> BossEncounter {
        BossEncounter {
            id: "test".into(),
            name: "Test".into(),
            max_hp: 100,
            current_hp,
            damage_per_completion: damage,
            loot: 40,
            week_start: date(2026, 5, 4),
            defeated: false,
        }
    }

    #[test]
    fn week_starts_on_monday() {
        // 2026-05-04 is a Monday
        assert_eq!(date(2026, 5, 4).weekday(), Weekday::Mon);
        assert_eq!(week_start(date(2026, 5, 4)), date(2026, 5, 4));
        assert_eq!(week_start(date(2026, 5, 7)), date(2026, 5, 4));
        assert_eq!(week_start(date(2026, 5, 10)), date(2026, 5, 4));
        assert_eq!(week_start(date(2026, 5, 11)), date(2026, 5, 11));
    }

    #[test]
    fn same_boss_all_week() {
        let monday = rotate_if_needed(None, date(2026, 5, 4), ROSTER).unwrap();
        let sunday = rotate_if_needed(None, date(2026, 5, 10), ROSTER).unwrap();
        assert_eq!(monday, sunday);
    }

    #[test]
    fn consecutive_weeks_walk_the_roster() {
        let a = roster_index(date(2026, 5, 4), ROSTER.len());
        let b = roster_index(date(2026, 5, 11), ROSTER.len());
        assert_eq!(b, (a + 1) % ROSTER.len());
    }

    #[test]
    fn keeps_current_week_encounter() {
        let mut current = rotate_if_needed(None, date(2026, 5, 4), ROSTER).unwrap();
        current.apply_damage();
        let kept = rotate_if_needed(Some(current.clone()), date(2026, 5, 6), ROSTER).unwrap();
        assert_eq!(kept, current);
    }

    #[test]
    fn replaces_stale_encounter_at_full_health() {
        let mut old = rotate_if_needed(None, date(2026, 5, 4), ROSTER).unwrap();
        while !old.defeated {
            old.apply_damage();
        }
        let fresh = rotate_if_needed(Some(old), date(2026, 5, 12), ROSTER).unwrap();
        assert_eq!(fresh.week_start, date(2026, 5, 11));
        assert_eq!(fresh.current_hp, fresh.max_hp);
        assert!(!fresh.defeated);
    }

    #[test]
    fn active_only_within_its_week() {
        let b = boss(100, 10);
        assert!(b.is_active(date(2026, 5, 4)));
        assert!(b.is_active(date(2026, 5, 10)));
        assert!(!b.is_active(date(2026, 5, 3)));
        assert!(!b.is_active(date(2026, 5, 11)));
    }

    #[test]
    fn empty_roster_yields_nothing() {
        assert!(rotate_if_needed(None, date(2026, 5, 4), &[]).is_none());
    }

    #[test]
    fn pre_epoch_dates_still_index() {
        let idx = roster_index(week_start(date(1969, 12, 25)), ROSTER.len());
        assert!(idx < ROSTER.len());
    }

    #[test]
    fn overkill_floors_at_zero_and_pays_once() {
        let mut b = boss(10, 15);
        assert_eq!(b.apply_damage(), Hit::Defeated { damage: 10, loot: 40 });
        assert_eq!(b.current_hp, 0);
        assert!(b.defeated);
        assert_eq!(b.apply_damage(), Hit::Ignored);
        assert_eq!(b.current_hp, 0);
    }

    #[test]
    fn ordinary_hit_reports_remaining() {
        let mut b = boss(100, 15);
        assert_eq!(b.apply_damage(), Hit::Damaged { damage: 15, remaining_hp: 85 });
    }

    proptest! {
        #[test]
        fn hp_stays_in_bounds(start in 0u32..=100, damage in 0u32..60, hits in 0usize..20) {
            let mut b = boss(start, damage);
            let mut was_defeated = false;
            for _ in 0..hits {
                let before = b.current_hp;
                b.apply_damage();
                prop_assert!(b.current_hp <= b.max_hp);
                prop_assert!(b.current_hp <= before);
                if was_defeated {
                    prop_assert!(b.defeated);
                }
                was_defeated = b.defeated;
            }
        }
    }
}
