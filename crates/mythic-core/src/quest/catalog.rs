//! Static preset quest library.

use super::{Difficulty, PresetQuest};
use crate::task::Category;

/// All preset quests, grouped by category.
pub static QUESTS: &[PresetQuest] = &[
    // Kriya
    PresetQuest {
        id: "kriya-deep-work",
        title: "Ninety minutes of deep work",
        category: Category::Kriya,
        reward: 40,
        tier: Difficulty::Adept,
        cooldown_minutes: 180,
        daily_cap: 2,
    },
    PresetQuest {
        id: "kriya-inbox-zero",
        title: "Clear the inbox",
        category: Category::Kriya,
        reward: 15,
        tier: Difficulty::Novice,
        cooldown_minutes: 240,
        daily_cap: 2,
    },
    PresetQuest {
        id: "kriya-ship-it",
        title: "Ship one finished piece of work",
        category: Category::Kriya,
        reward: 75,
        tier: Difficulty::Master,
        cooldown_minutes: 720,
        daily_cap: 1,
    },
    // Gyana
    PresetQuest {
        id: "gyana-read-chapter",
        title: "Read one chapter",
        category: Category::Gyana,
        reward: 20,
        tier: Difficulty::Novice,
        cooldown_minutes: 60,
        daily_cap: 3,
    },
    PresetQuest {
        id: "gyana-plan-tomorrow",
        title: "Plan tomorrow",
        category: Category::Gyana,
        reward: 15,
        tier: Difficulty::Novice,
        cooldown_minutes: 0,
        daily_cap: 1,
    },
    PresetQuest {
        id: "gyana-study-session",
        title: "Study a new skill for an hour",
        category: Category::Gyana,
        reward: 50,
        tier: Difficulty::Adept,
        cooldown_minutes: 120,
        daily_cap: 2,
    },
    // Ojas
    PresetQuest {
        id: "ojas-meditate",
        title: "Meditate for fifteen minutes",
        category: Category::Ojas,
        reward: 20,
        tier: Difficulty::Novice,
        cooldown_minutes: 120,
        daily_cap: 2,
    },
    PresetQuest {
        id: "ojas-workout",
        title: "Complete a workout",
        category: Category::Ojas,
        reward: 45,
        tier: Difficulty::Adept,
        cooldown_minutes: 480,
        daily_cap: 1,
    },
    PresetQuest {
        id: "ojas-hydrate",
        title: "Drink a glass of water",
        category: Category::Ojas,
        reward: 5,
        tier: Difficulty::Novice,
        cooldown_minutes: 45,
        daily_cap: 8,
    },
];

/// Quests of one category, in catalog order.
pub fn quests_for(category: Category) -> impl Iterator<Item = &'static PresetQuest> {
    QUESTS.iter().filter(move |q| q.category == category)
}

pub fn find_quest(id: &str) -> Option<&'static PresetQuest> {
    QUESTS.iter().find(|q| q.id == id)
}
