//! Damage reference vocabulary for per-weapon hit tables.
//!
//! A [`DamageTable`] names a weapon, the enemies worth tabulating against
//! it, and which [`HitType`] columns to show. The measured numbers live in
//! a [`HitLookup`] keyed by weapon name; a missing entry simply renders as
//! an empty pair of cells, so partial measurements are fine.

use std::collections::BTreeMap;

/// One way of landing a hit, ordered strongest-first for table columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitType {
    Riposte2H,
    Riposte1H,
    Backstab2H,
    Backstab1H,
    Heavy2H,
    Heavy1H,
    Weak2H,
    Weak1H,
}

impl HitType {
    /// Every hit type, in column order.
    pub const ALL: [HitType; 8] = [
        HitType::Riposte2H,
        HitType::Riposte1H,
        HitType::Backstab2H,
        HitType::Backstab1H,
        HitType::Heavy2H,
        HitType::Heavy1H,
        HitType::Weak2H,
        HitType::Weak1H,
    ];

    /// Long name, used for hover titles.
    pub const fn display_name(self) -> &'static str {
        match self {
            HitType::Riposte2H => "Riposte (2H)",
            HitType::Riposte1H => "Riposte (1H)",
            HitType::Backstab2H => "Backstab (2H)",
            HitType::Backstab1H => "Backstab (1H)",
            HitType::Heavy2H => "Heavy (2H)",
            HitType::Heavy1H => "Heavy (1H)",
            HitType::Weak2H => "Weak (2H)",
            HitType::Weak1H => "Weak (1H)",
        }
    }

    /// Short name, used for column headers.
    pub const fn column_name(self) -> &'static str {
        match self {
            HitType::Riposte2H => "R(2H)",
            HitType::Riposte1H => "R(1H)",
            HitType::Backstab2H => "B(2H)",
            HitType::Backstab1H => "B(1H)",
            HitType::Heavy2H => "Heavy(2H)",
            HitType::Heavy1H => "Heavy(1H)",
            HitType::Weak2H => "Weak(2H)",
            HitType::Weak1H => "Weak(1H)",
        }
    }

    /// Stylesheet class for this column's cells.
    pub const fn css_class(self) -> &'static str {
        match self {
            HitType::Riposte2H => "riposte_2h",
            HitType::Riposte1H => "riposte_1h",
            HitType::Backstab2H => "backstab_2h",
            HitType::Backstab1H => "backstab_1h",
            HitType::Heavy2H => "heavy_2h",
            HitType::Heavy1H => "heavy_1h",
            HitType::Weak2H => "weak_2h",
            HitType::Weak1H => "weak_1h",
        }
    }
}

/// Measured damage for one hit type, with and without the Red Tearstone
/// Ring active. Riposte numbers sum the poke and the critical follow-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub damage: u32,
    pub with_rtsr: u32,
}

impl Hit {
    pub const fn new(damage: u32, with_rtsr: u32) -> Self {
        Self { damage, with_rtsr }
    }

    /// A hit only ever thrown in RTSR range, so only that number exists.
    pub const fn rtsr_only(with_rtsr: u32) -> Self {
        Self {
            damage: 0,
            with_rtsr,
        }
    }
}

/// One health bar an enemy puts up.
///
/// Most enemies have exactly one. Multi-phase fights list each phase as
/// its own form so hit counts stay honest about what resets between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Form {
    pub name: &'static str,
    pub health: u32,
}

impl Form {
    pub const fn new(name: &'static str, health: u32) -> Self {
        Self { name, health }
    }

    /// Hits needed to empty this bar at `damage` per hit, rounded up.
    pub const fn hits(self, damage: u32) -> u32 {
        self.health.div_ceil(damage)
    }
}

/// Enemies the damage tables know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Enemy {
    BlackKnightDarkrootBasin,
    BellGargoyles,
    Quelaag,
    IronGolem,
    GiantBlacksmith,
    Oswald,
    Petrus,
    Lautrec,
    MimicOccultClub,
    DarkmoonKnightess,
}

impl Enemy {
    /// Health bars to tabulate, one table row each.
    pub const fn forms(self) -> &'static [Form] {
        match self {
            Enemy::BlackKnightDarkrootBasin => {
                &const { [Form::new("Black Knight (Darkroot Basin)", 603)] }
            }
            Enemy::BellGargoyles => &const {
                [
                    Form::new("Bell Gargoyle A", 999),
                    Form::new("Bell Gargoyle B", 480),
                ]
            },
            Enemy::Quelaag => &const { [Form::new("Chaos Witch Quelaag", 3139)] },
            Enemy::IronGolem => &const {
                [
                    Form::new("Iron Golem stagger", 400),
                    Form::new("Iron Golem fall", 200),
                    Form::new("Iron Golem", 2880),
                ]
            },
            Enemy::GiantBlacksmith => &const { [Form::new("Giant Blacksmith", 1812)] },
            Enemy::Oswald => &const { [Form::new("Oswald of Carim", 638)] },
            Enemy::Petrus => &const { [Form::new("Petrus of Thorolund", 594)] },
            Enemy::Lautrec => &const { [Form::new("Knight Lautrec of Carim", 862)] },
            Enemy::MimicOccultClub => &const { [Form::new("Mimic (Occult Club)", 1041)] },
            Enemy::DarkmoonKnightess => &const { [Form::new("Darkmoon Knightess", 719)] },
        }
    }
}

/// Which enemies and hit types to tabulate for one weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTable {
    pub weapon: String,
    pub enemies: Vec<Enemy>,
    pub hit_types: Vec<HitType>,
}

impl DamageTable {
    pub fn new(weapon: impl Into<String>, enemies: &[Enemy], hit_types: &[HitType]) -> Self {
        Self {
            weapon: weapon.into(),
            enemies: enemies.to_vec(),
            hit_types: hit_types.to_vec(),
        }
    }
}

/// Measured numbers: weapon name, then enemy, then hit type.
pub type HitLookup = BTreeMap<String, BTreeMap<Enemy, BTreeMap<HitType, Hit>>>;
