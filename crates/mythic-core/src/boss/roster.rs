//! Weekly boss roster.

/// Static boss definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossDef {
    pub id: &'static str,
    pub name: &'static str,
    pub max_hp: u32,
    pub damage_per_completion: u32,
    pub loot: u64,
}

pub static ROSTER: &[BossDef] = &[
    BossDef {
        id: "tamas",
        name: "Tamas, the Inertia",
        max_hp: 100,
        damage_per_completion: 10,
        loot: 50,
    },
    BossDef {
        id: "moha",
        name: "Moha, the Delusion",
        max_hp: 150,
        damage_per_completion: 10,
        loot: 75,
    },
    BossDef {
        id: "krodha",
        name: "Krodha, the Wrath",
        max_hp: 200,
        damage_per_completion: 15,
        loot: 100,
    },
    BossDef {
        id: "lobha",
        name: "Lobha, the Greed",
        max_hp: 250,
        damage_per_completion: 15,
        loot: 125,
    },
    BossDef {
        id: "ahamkara",
        name: "Ahamkara, the Ego",
        max_hp: 300,
        damage_per_completion: 20,
        loot: 200,
    },
];
