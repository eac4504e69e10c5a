//! Achievement catalog.

use super::Requirement;
use crate::task::Category;

/// Static achievement definition.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub requirement: Requirement,
}

pub static DEFINITIONS: &[AchievementDef] = &[
    // Task milestones
    AchievementDef {
        id: "first-step",
        title: "First Step",
        description: "Complete your first task",
        requirement: Requirement::TaskCount { threshold: 1 },
    },
    AchievementDef {
        id: "ten-deeds",
        title: "Ten Deeds",
        description: "Complete 10 tasks",
        requirement: Requirement::TaskCount { threshold: 10 },
    },
    AchievementDef {
        id: "hundred-deeds",
        title: "Hundred Deeds",
        description: "Complete 100 tasks",
        requirement: Requirement::TaskCount { threshold: 100 },
    },
    // Streaks
    AchievementDef {
        id: "three-day-flame",
        title: "Three-Day Flame",
        description: "Keep a 3 day streak",
        requirement: Requirement::StreakDays { threshold: 3 },
    },
    AchievementDef {
        id: "seven-day-flame",
        title: "Seven-Day Flame",
        description: "Keep a 7 day streak",
        requirement: Requirement::StreakDays { threshold: 7 },
    },
    AchievementDef {
        id: "thirty-day-flame",
        title: "Unbroken Vow",
        description: "Keep a 30 day streak",
        requirement: Requirement::StreakDays { threshold: 30 },
    },
    // Siddhi
    AchievementDef {
        id: "awakened",
        title: "Awakened",
        description: "Reach Siddhi level 2",
        requirement: Requirement::LevelReached { threshold: 2 },
    },
    AchievementDef {
        id: "adept",
        title: "Adept",
        description: "Reach Siddhi level 5",
        requirement: Requirement::LevelReached { threshold: 5 },
    },
    AchievementDef {
        id: "sage",
        title: "Sage",
        description: "Reach Siddhi level 10",
        requirement: Requirement::LevelReached { threshold: 10 },
    },
    // Karma
    AchievementDef {
        id: "karma-1000",
        title: "Wheel Turner",
        description: "Earn 1,000 lifetime karma",
        requirement: Requirement::KarmaEarned { threshold: 1_000 },
    },
    AchievementDef {
        id: "karma-10000",
        title: "Wheel Master",
        description: "Earn 10,000 lifetime karma",
        requirement: Requirement::KarmaEarned { threshold: 10_000 },
    },
    // Paths
    AchievementDef {
        id: "path-of-action",
        title: "Path of Action",
        description: "Complete 10 Kriya tasks",
        requirement: Requirement::CategoryTaskCount {
            category: Category::Kriya,
            threshold: 10,
        },
    },
    AchievementDef {
        id: "path-of-wisdom",
        title: "Path of Wisdom",
        description: "Complete 10 Gyana tasks",
        requirement: Requirement::CategoryTaskCount {
            category: Category::Gyana,
            threshold: 10,
        },
    },
    AchievementDef {
        id: "path-of-vitality",
        title: "Path of Vitality",
        description: "Complete 10 Ojas tasks",
        requirement: Requirement::CategoryTaskCount {
            category: Category::Ojas,
            threshold: 10,
        },
    },
];
