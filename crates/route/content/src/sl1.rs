//! Measured soul-level-1 damage numbers.
//!
//! Riposte entries are written as the poke plus the critical follow-up,
//! kept as separate terms so the individual measurements stay visible.
//! Empty per-enemy maps are deliberate placeholders for numbers not yet
//! measured; they render as blank cells.

use std::collections::BTreeMap;

use crate::damage::{Enemy, Hit, HitLookup, HitType};

/// Damage lookup for every weapon the SL1 routes swing.
pub fn hit_lookup() -> HitLookup {
    BTreeMap::from([
        (
            "Hand Axe +0".to_owned(),
            BTreeMap::from([(
                Enemy::BlackKnightDarkrootBasin,
                BTreeMap::from([
                    (HitType::Heavy1H, Hit::new(14, 31)),
                    (HitType::Weak1H, Hit::new(10, 20)),
                    (HitType::Heavy2H, Hit::new(28, 72)),
                    (HitType::Weak2H, Hit::new(16, 37)),
                    (HitType::Riposte1H, Hit::new(5 + 57, 8 + 146)),
                    (HitType::Riposte2H, Hit::new(6 + 75, 10 + 179)),
                ]),
            )]),
        ),
        (
            "Reinforced Club +0".to_owned(),
            BTreeMap::from([(
                Enemy::BlackKnightDarkrootBasin,
                BTreeMap::from([
                    (HitType::Heavy1H, Hit::new(31, 82)),
                    (HitType::Weak1H, Hit::new(15, 33)),
                    (HitType::Heavy2H, Hit::new(49, 134)),
                    (HitType::Weak2H, Hit::new(28, 71)),
                    (HitType::Riposte1H, Hit::new(6 + 95, 11 + 209)),
                    (HitType::Riposte2H, Hit::new(7 + 127, 14 + 263)),
                ]),
            )]),
        ),
        (
            "Reinforced Club +5".to_owned(),
            BTreeMap::from([
                (
                    Enemy::BellGargoyles,
                    BTreeMap::from([
                        (HitType::Heavy1H, Hit::new(161, 275)),
                        (HitType::Weak1H, Hit::new(84, 170)),
                        (HitType::Heavy2H, Hit::new(217, 358)),
                        (HitType::Weak2H, Hit::new(185, 259)),
                    ]),
                ),
                (
                    Enemy::Lautrec,
                    BTreeMap::from([
                        (HitType::Heavy1H, Hit::new(91, 208)),
                        (HitType::Weak1H, Hit::new(36, 100)),
                        (HitType::Heavy2H, Hit::new(145, 295)),
                        (HitType::Weak2H, Hit::new(80, 191)),
                        (HitType::Riposte1H, Hit::new(12 + 220, 25 + 398)),
                        (HitType::Riposte2H, Hit::new(15 + 276, 35 + 469)),
                    ]),
                ),
                (
                    Enemy::Quelaag,
                    BTreeMap::from([(HitType::Weak2H, Hit::new(77, 187))]),
                ),
                (
                    Enemy::IronGolem,
                    BTreeMap::from([(HitType::Weak2H, Hit::rtsr_only(159))]),
                ),
            ]),
        ),
        (
            "Battle Axe +4".to_owned(),
            BTreeMap::from([
                (
                    Enemy::BellGargoyles,
                    BTreeMap::from([
                        (HitType::Heavy1H, Hit::new(107, 205)),
                        (HitType::Weak1H, Hit::new(70, 130)),
                        (HitType::Heavy2H, Hit::new(175, 295)),
                        (HitType::Weak2H, Hit::new(122, 226)),
                    ]),
                ),
                (
                    Enemy::Quelaag,
                    BTreeMap::from([(HitType::Weak2H, Hit::new(57, 149))]),
                ),
                (
                    Enemy::IronGolem,
                    BTreeMap::from([(HitType::Weak2H, Hit::rtsr_only(78))]),
                ),
            ]),
        ),
        (
            "Battle Axe +3".to_owned(),
            BTreeMap::from([
                (
                    Enemy::BellGargoyles,
                    BTreeMap::from([
                        (HitType::Heavy1H, Hit::new(93, 184)),
                        (HitType::Weak1H, Hit::new(54, 115)),
                        (HitType::Heavy2H, Hit::new(156, 268)),
                        (HitType::Weak2H, Hit::new(107, 205)),
                    ]),
                ),
                (Enemy::Quelaag, BTreeMap::new()),
                (Enemy::IronGolem, BTreeMap::new()),
            ]),
        ),
    ])
}
