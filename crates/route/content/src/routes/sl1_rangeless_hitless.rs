//! The SL1 "rangeless hitless" route family.
//!
//! One route skeleton, tuned by [`Options`]: which early weapon to buy,
//! how far to reinforce it before the Gargoyles, what to loot at Firelink,
//! and per-run choices about equipment and humanity farming. Every shipped
//! variation must replay without soft errors; the integration tests hold
//! the line on that.

use std::collections::BTreeMap;

use route_core::{Action, Segment, items};

use crate::damage::{DamageTable, Enemy, HitType};
use crate::error::ContentError;
use crate::routes::Route;
use crate::sl1;

// ============================================================================
// Shared names
// ============================================================================

const RTSR_LADDER: &str = "climbing ladder to RTSR";
const NEW_LONDO_ELEVATOR: &str = "elevator to New Londo Ruins";
const BASIN_ELEVATOR: &str = "elevator to Darkroot Basin";
const PARISH_ELEVATOR: &str = "elevator to Undead Parish";
const ANDRE: &str = "Andre of Astora";
const PETRUS: &str = "Petrus of Thorolund";
const OSWALD: &str = "Oswald of Carim";
const O_AND_S: &str = "Dragon Slayer Ornstein & Executioner Smough";
const SIF: &str = "Sif, the Great Grey Wolf";
const NITO: &str = "Gravelord Nito";
const SEATH: &str = "Seath the Scaleless";
const GWYNDOLIN: &str = "Dark Sun Gwyndolin";
const FOUR_KINGS: &str = "The Four Kings";
const PRISCILLA: &str = "Crossbreed Priscilla";
const SLUMBERING: &str = "Slumbering Dragoncrest Ring";

// ============================================================================
// Damage table groupings
// ============================================================================

const HUMANOID_HIT_TYPES: [HitType; 8] = HitType::ALL;
const STANDARD_HIT_TYPES: [HitType; 4] = [
    HitType::Heavy2H,
    HitType::Heavy1H,
    HitType::Weak2H,
    HitType::Weak1H,
];
const HUMANOID_HIT_TYPES_2H: [HitType; 4] = [
    HitType::Riposte2H,
    HitType::Backstab2H,
    HitType::Heavy2H,
    HitType::Weak2H,
];
const STANDARD_HIT_TYPES_2H: [HitType; 2] = [HitType::Heavy2H, HitType::Weak2H];

const HUMANOID_ENEMIES_WITHOUT_UPGRADES: [Enemy; 1] = [Enemy::BlackKnightDarkrootBasin];
const ENEMIES_WITH_UPGRADES: [Enemy; 4] = [
    Enemy::BellGargoyles,
    Enemy::Quelaag,
    Enemy::IronGolem,
    Enemy::GiantBlacksmith,
];
const HUMANOID_ENEMIES_WITH_UPGRADES: [Enemy; 3] = [Enemy::Oswald, Enemy::Petrus, Enemy::Lautrec];
const ENEMIES_MAYBE_WITH_FINAL_WEAPON: [Enemy; 1] = [Enemy::MimicOccultClub];
const HUMANOID_ENEMIES_MAYBE_WITH_FINAL_WEAPON: [Enemy; 1] = [Enemy::DarkmoonKnightess];

/// Shards to go from one reinforcement level to the next, +1 through +5.
const SHARDS_PER_LEVEL: [i64; 5] = [1, 1, 2, 2, 3];

// ============================================================================
// Options
// ============================================================================

/// Run category, for steps that only matter on fuller completions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunType {
    AnyPercent,
    AllBosses,
}

impl RunType {
    pub const fn is_all_bosses(self) -> bool {
        matches!(self, RunType::AllBosses)
    }
}

/// Optional equipment detours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentOptions {
    pub ring_of_fog: bool,
    pub slumbering_dragoncrest_ring: bool,
    pub occult_club: bool,
}

/// Which optional humanity sources the run bothers with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HumanityOptions {
    pub loot_undead_parish_fire_keeper_soul: bool,
    pub kill_darkmoon_knightess: bool,
    pub kill_oswald: bool,
    pub kill_andre: bool,
    pub kill_petrus: bool,
    pub kill_patches: bool,
    pub wait_for_four_kings_drops: bool,
    pub wait_for_sif_drops: bool,
    pub wait_for_nito_drops: bool,
    pub wait_for_seath_drops: bool,
    pub kill_smough_first: bool,
}

/// Per-run tuning layered on top of [`Options`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOptions {
    pub run_type: RunType,
    pub equipment: EquipmentOptions,
    pub humanity: HumanityOptions,
    pub notes: Vec<String>,
    pub damage_tables: Vec<DamageTable>,
}

impl RunOptions {
    pub fn new(run_type: RunType, equipment: EquipmentOptions, humanity: HumanityOptions) -> Self {
        Self {
            run_type,
            equipment,
            humanity,
            notes: Vec::new(),
            damage_tables: Vec::new(),
        }
    }
}

/// Tuning shared by every run of one route variation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    pub early_weapon: String,
    /// Reinforcement bought at Andre before the Gargoyles. Must stay in
    /// 0..=5, the shard path; checked when the route is assembled.
    pub initial_upgrade: i64,
    /// Run variations, keyed by the name shown in the route title.
    pub runs: BTreeMap<String, RunOptions>,
    pub loot_firelink_well_humanity: bool,
    pub loot_firelink_elevator_soul: bool,
    pub loot_firelink_homeward_bones: bool,
    pub loot_firelink_graveyard_souls: bool,
    pub loot_new_londo_ruins_elevator_soul: bool,
    pub kill_darkroot_basin_black_knight: bool,
    pub bone_count_if_from_oswald: i64,
    pub notes: Vec<String>,
    pub damage_tables: Vec<DamageTable>,
}

impl Options {
    /// Baseline: every optional pickup off, five bones bought from Oswald.
    pub fn new(early_weapon: impl Into<String>, initial_upgrade: i64) -> Self {
        Self {
            early_weapon: early_weapon.into(),
            initial_upgrade,
            runs: BTreeMap::new(),
            loot_firelink_well_humanity: false,
            loot_firelink_elevator_soul: false,
            loot_firelink_homeward_bones: false,
            loot_firelink_graveyard_souls: false,
            loot_new_londo_ruins_elevator_soul: false,
            kill_darkroot_basin_black_knight: false,
            bone_count_if_from_oswald: 5,
            notes: Vec::new(),
            damage_tables: Vec::new(),
        }
    }

    /// Weapon name with its starting reinforcement; "+0" is left unwritten.
    pub fn early_upgraded_weapon(&self) -> String {
        if self.initial_upgrade > 0 {
            format!("{} +{}", self.early_weapon, self.initial_upgrade)
        } else {
            self.early_weapon.clone()
        }
    }
}

/// One options/run pair resolved for segment building.
#[derive(Debug)]
struct SegmentOptions<'a> {
    options: &'a Options,
    run_name: &'a str,
    run: &'a RunOptions,
}

impl<'a> SegmentOptions<'a> {
    fn new(options: &'a Options, run_name: &'a str) -> Result<Self, ContentError> {
        if !(0..=5).contains(&options.initial_upgrade) {
            return Err(ContentError::upgrade_level_out_of_range(
                options.initial_upgrade,
            ));
        }
        let run = options
            .runs
            .get(run_name)
            .ok_or_else(|| ContentError::unknown_run(run_name))?;
        Ok(Self {
            options,
            run_name,
            run,
        })
    }

    fn display_name(&self) -> String {
        format!(
            "{} with {}",
            self.run_name,
            self.options.early_upgraded_weapon()
        )
    }

    fn notes(&self) -> Vec<String> {
        let mut notes = self.options.notes.clone();
        notes.extend(self.run.notes.iter().cloned());
        notes
    }

    fn damage_tables(&self) -> Vec<DamageTable> {
        let mut tables = self.options.damage_tables.clone();
        tables.extend(self.run.damage_tables.iter().cloned());
        tables
    }

    fn humanity(&self) -> &HumanityOptions {
        &self.run.humanity
    }

    fn equipment(&self) -> &EquipmentOptions {
        &self.run.equipment
    }

    fn is_all_bosses(&self) -> bool {
        self.run.run_type.is_all_bosses()
    }

    fn uses_reinforced_club(&self) -> bool {
        self.options.early_weapon == "Reinforced Club"
    }

    fn uses_battle_axe(&self) -> bool {
        self.options.early_weapon == "Battle Axe"
    }

    fn loots_firelink_at_start(&self) -> bool {
        self.options.loot_firelink_elevator_soul
            || self.options.loot_firelink_homeward_bones
            || self.options.loot_firelink_graveyard_souls
    }

    fn early_weapon_shards(&self) -> i64 {
        SHARDS_PER_LEVEL[..self.options.initial_upgrade as usize]
            .iter()
            .sum()
    }
}

// ============================================================================
// Route assembly
// ============================================================================

/// The shipped variations of this route, one per options/run pair.
pub fn routes() -> Result<Vec<Route>, ContentError> {
    let mut routes = Vec::new();
    for options in option_sets() {
        for run_name in options.runs.keys() {
            routes.push(build(&options, run_name)?);
        }
    }
    Ok(routes)
}

fn build(options: &Options, run_name: &str) -> Result<Route, ContentError> {
    let so = SegmentOptions::new(options, run_name)?;
    let name = format!("SL1 Rangeless Hitless ({})", so.display_name());

    let mut segment = Segment::new(name.clone())
        .note("TODO: fix RTSR setup for Gargoyles")
        .note("TODO: best path past boulders in Sen's Fortress")
        .note("TODO: when to swap darksign for bones")
        .note("TODO: Crest of Artorias cost.");
    for extra in so.notes() {
        segment = segment.note(extra);
    }

    let segment = segment
        .add(start_to_after_gargoyles_in_firelink(&so))
        .add(firelink_to_quelaag())
        .add(firelink_to_sens_fortress(&so))
        .add(sens_fortress_to_anor_londo_residence(&so))
        .add(get_and_upgrade_blacksmith_giant_hammer())
        .add(anor_londo_residence_to_sif(&so))
        .add(todo_segment(&so));

    Ok(Route {
        name,
        segment,
        damage_tables: so.damage_tables(),
        hit_lookup: sl1::hit_lookup(),
    })
}

// ============================================================================
// Segments
// ============================================================================

fn start_to_after_gargoyles_in_firelink(so: &SegmentOptions) -> Segment {
    let starting = "starting equipment";
    let pyromancer = "Pyromancer starting equipment";
    let shards = so.early_weapon_shards();
    let plus_four = so.options.initial_upgrade == 4;

    let mut segment = Segment::new("Start to after Gargoyles in Firelink");

    segment.push(Action::receive(items::DARKSIGN).detail(starting));
    segment.push(Action::receive("Straight Sword Hilt").detail(starting));
    segment.push(Action::auto_equip("Straight Sword Hilt", "Right Hand 1").detail(starting));
    segment.push(Action::receive("Tattered Cloth Hood").detail(pyromancer));
    segment.push(Action::receive("Tattered Cloth Robe").detail(pyromancer));
    segment.push(Action::receive("Tattered Cloth Manchette").detail(pyromancer));
    segment.push(Action::receive("Heavy Boots").detail(pyromancer));
    segment.push(Action::auto_equip("Tattered Cloth Hood", "Head").detail(pyromancer));
    segment.push(Action::auto_equip("Tattered Cloth Robe", "Torso").detail(pyromancer));
    segment.push(Action::auto_equip("Tattered Cloth Manchette", "Arms").detail(pyromancer));
    segment.push(Action::auto_equip("Heavy Boots", "Legs").detail(pyromancer));

    segment.push(Action::region("Northern Undead Asylum"));
    segment.push(Action::auto_bonfire("Undead Asylum Dungeon Cell"));
    segment.push(Action::loot("Dungeon Cell Key"));
    segment.push(Action::unequip("Torso").detail("First ladder or big door."));
    segment.push(Action::unequip("Arms").detail("First ladder or big door."));
    segment.push(Action::loot("Hand Axe"));
    segment.push(Action::equip("Hand Axe", "Right Hand 1").detail("Fog gate before Oscar"));
    segment.push(Action::talk_to("Oscar of Astora").detail("Behind wall boulder breaks"));
    segment.push(Action::receive("Estus Flask").detail("Oscar of Astora"));
    segment.push(Action::auto_equip("Estus Flask", "Item 0"));
    segment.push(Action::receive("Undead Asylum F2 East Key").detail("Oscar of Astora"));
    segment.push(Action::auto_kill("Oscar of Astora", 100));
    segment.push(Action::kill("Asylum Demon", 2000));
    segment.push(
        Action::receive(items::HUMANITY)
            .humanities(1)
            .detail("Asylum Demon"),
    );
    segment.push(Action::receive("Big Pilgrim's Key").detail("Asylum Demon"));
    segment.push(Action::activate("Big Pilgrim's Key Door").detail("Asylum Demon"));
    segment.push(Action::activate("Ledge warp trigger to Firelink Shrine"));

    segment.push(Action::region("Firelink Shrine"));
    segment.push(Action::auto_bonfire("Firelink Shrine"));
    segment.push(
        Segment::new("Firelink left for later")
            .when(!so.loots_firelink_at_start())
            .note(format!(
                "Firelink <b>IS NOT</b> looted at start; goes straight to {ANDRE}."
            )),
    );
    segment.push(
        Segment::new("Firelink loot on arrival")
            .when(so.loots_firelink_at_start())
            .note("Firelink is looted upon arrival.")
            .add(
                Action::loot(items::HUMANITY)
                    .count(3)
                    .humanities(1)
                    .detail("side of well, get during Firelink loot route.")
                    .when(so.options.loot_firelink_well_humanity && !so.uses_reinforced_club())
                    .note("3 humanities at Firelink well looted immediately."),
            )
            .add(
                Action::loot("Soul of a Lost Undead")
                    .souls(200)
                    .detail("upper elevator")
                    .when(so.options.loot_firelink_elevator_soul),
            )
            .add(
                Action::jump("off ledge to hidden chests")
                    .when(so.options.loot_firelink_homeward_bones),
            )
            .add(
                Action::loot(items::BONE)
                    .count(6)
                    .detail("hidden chest")
                    .when(so.options.loot_firelink_homeward_bones),
            )
            .add(
                Action::equip(items::BONE, "Item 5")
                    .detail("immediately")
                    .when(so.options.loot_firelink_homeward_bones),
            )
            .add(
                Action::loot("Large Soul of a Lost Undead")
                    .souls(400)
                    .detail("middle of graveyard")
                    .when(so.options.loot_firelink_graveyard_souls),
            )
            .add(
                Action::loot("Large Soul of a Lost Undead")
                    .souls(400)
                    .detail("start of graveyard")
                    .when(so.options.loot_firelink_graveyard_souls),
            )
            .add(Action::use_item(items::BONE).when(so.options.loot_firelink_graveyard_souls)),
    );
    segment.push(
        Segment::new("Reinforced Club detour")
            .when(so.uses_reinforced_club())
            .add(Action::region("Firelink Shrine"))
            .add(
                Action::loot(items::HUMANITY)
                    .count(3)
                    .humanities(1)
                    .detail("side of well, get on way to get Reinforced Club")
                    .when(so.options.loot_firelink_well_humanity)
                    .note("3 humanities at Firelink well looted on way to get Reinforced Club."),
            )
            .add(Action::run_to("Undead Burg"))
            .add(Action::region("Undead Burg"))
            .add(Action::buy("Reinforced Club", 350).detail("Undead Merchant"))
            .add(Action::use_item(items::BONE)),
    );

    segment.push(Action::region("Firelink Shrine"));
    segment.push(Action::run_to(NEW_LONDO_ELEVATOR));
    segment.push(
        Action::use_menu("Large Soul of a Lost Undead")
            .count(2)
            .detail(NEW_LONDO_ELEVATOR)
            .allow_partial(),
    );
    segment.push(
        Action::use_menu("Soul of a Lost Undead")
            .detail(NEW_LONDO_ELEVATOR)
            .allow_partial(),
    );
    segment.push(Action::region("New Londo Ruins"));
    segment.push(
        Action::loot("Soul of a Nameless Soldier")
            .souls(800)
            .detail(format!("by bottom of {NEW_LONDO_ELEVATOR}"))
            .when(so.options.loot_new_londo_ruins_elevator_soul),
    );
    segment.push(Action::run_to("Master Key door to Valley of the Drakes"));
    segment.push(Action::region("Valley of Drakes"));
    segment.push(
        Action::loot("Large Soul of a Nameless Soldier")
            .souls(1000)
            .detail("behind master key door"),
    );
    segment.push(Action::fall_damage("ledge above Undead Dragon").detail("RTSR setup (1/3)"));
    segment.push(
        Action::loot("Soul of a Proud Knight")
            .souls(2000)
            .detail("last item by Undead Dragon"),
    );
    segment.push(
        Action::equip("Reinforced Club", "Right Hand 1")
            .detail(RTSR_LADDER)
            .when(so.uses_reinforced_club()),
    );
    segment.push(
        Action::equip("Soul of a Nameless Soldier", "Item 2")
            .detail(RTSR_LADDER)
            .when(so.options.loot_new_londo_ruins_elevator_soul),
    );
    segment.push(Action::equip("Large Soul of a Nameless Soldier", "Item 3").detail(RTSR_LADDER));
    segment.push(Action::equip("Soul of a Proud Knight", "Item 4").detail(RTSR_LADDER));
    segment.push(Action::loot("Red Tearstone Ring"));
    segment.push(Action::fall_damage("ledge by Red Tearstone Ring").detail("RTSR setup (2/3)"));
    segment.push(Action::run_to(BASIN_ELEVATOR));
    segment.push(Action::use_item("Large Soul of a Nameless Soldier").detail(BASIN_ELEVATOR));
    segment.push(Action::use_item("Soul of a Proud Knight").detail(BASIN_ELEVATOR));
    segment.push(
        Action::use_item("Soul of a Nameless Soldier")
            .detail(BASIN_ELEVATOR)
            .when(so.options.loot_new_londo_ruins_elevator_soul),
    );
    segment.push(Action::equip("Red Tearstone Ring", "Ring 2").detail(BASIN_ELEVATOR));

    segment.push(Action::region("Darkroot Basin"));
    segment.push(Action::loot("Grass Crest Shield"));
    segment.push(Action::equip("Grass Crest Shield", "Left Hand").detail("immediately"));
    segment.push(
        Action::kill("Black Knight", 1800)
            .detail(if plus_four {
                concat!(
                    "by Grass Crest Shield.",
                    "<br/><span class=\"warning\">SKIPPING THIS MEANS",
                    " ONLY HAVING A +3 WEAPON</span>"
                )
            } else {
                "by Grass Crest Shield."
            })
            .when(so.options.kill_darkroot_basin_black_knight)
            .optional(plus_four)
            .note(if plus_four {
                format!(
                    concat!(
                        "Black Knight in Darkroot Basin <b>PRECISELY</b> determines",
                        " whether you can afford upgrading your {} to +3 or +4."
                    ),
                    so.options.early_weapon
                )
            } else {
                "Black Knight in Darkroot Basin <b>MUST</b> be killed.".to_owned()
            }),
    );
    segment.push(
        Segment::new("Black Knight skipped")
            .when(!so.options.kill_darkroot_basin_black_knight)
            .note("Black Knight in Darkroot Basin <b>DOES NOT</b> need killed."),
    );
    segment.push(Action::run_to("Undead Parish").detail(
        if so.options.kill_darkroot_basin_black_knight {
            ""
        } else {
            "no need to kill Black Knight"
        },
    ));

    segment.push(Action::region("Undead Parish"));
    segment.push(
        Action::buy("Battle Axe", 1000)
            .detail(ANDRE)
            .when(so.uses_battle_axe()),
    );
    segment.push(
        Segment::new("Early weapon upgrade")
            .when(so.options.initial_upgrade > 0)
            .add(
                Action::buy(items::TITANITE_SHARD, 800)
                    .count(shards)
                    .detail(ANDRE),
            )
            .add(
                Action::upgrade_item(
                    so.options.early_weapon.as_str(),
                    so.options.early_upgraded_weapon(),
                )
                .souls(200 * so.options.initial_upgrade)
                .material(items::TITANITE_SHARD, shards)
                .detail(ANDRE),
            )
            .add(
                Action::equip(so.options.early_upgraded_weapon(), "Right Hand 1")
                    .detail(ANDRE)
                    .when(so.uses_battle_axe()),
            ),
    );
    segment.push(
        Action::loot("Fire Keeper Soul")
            .humanities(5)
            .detail("on altar behind Berenike Knight")
            .when(so.humanity().loot_undead_parish_fire_keeper_soul),
    );
    segment.push(
        Action::activate("Elevator to Firelink Shrine").detail("run in, trigger it, run back out"),
    );
    segment.push(Action::kill("Bell Gargoyles", 10000));
    segment.push(
        Action::receive(items::TWIN_HUMANITIES)
            .humanities(2)
            .detail("Bell Gargoyles"),
    );
    segment.push(Action::activate("First bell"));
    segment.push(
        Action::run_to(OSWALD)
            .detail("TODO: RTSR setup: heal, fall down both ladders")
            .when(so.humanity().kill_oswald || !so.options.loot_firelink_homeward_bones),
    );
    segment.push(
        Action::buy(items::BONE, 500)
            .count(so.options.bone_count_if_from_oswald)
            .detail(OSWALD)
            .when(!so.options.loot_firelink_homeward_bones)
            .note(format!(
                "{OSWALD} <b>MUST</b> be visited to buy {}s.",
                items::BONE
            )),
    );
    segment.push(Action::kill(OSWALD, 2000).when(so.humanity().kill_oswald));
    segment.push(
        Action::loot(items::TWIN_HUMANITIES)
            .count(2)
            .humanities(2)
            .detail(OSWALD)
            .when(so.humanity().kill_oswald),
    );
    segment.push(
        Action::equip(items::BONE, "Item 5")
            .detail("immediately")
            .when(!so.options.loot_firelink_homeward_bones),
    );
    segment.push(Action::use_item(items::BONE));

    segment
}

fn firelink_to_quelaag() -> Segment {
    Segment::new("Firelink to Quelaag")
        .add(Action::region("Firelink Shrine"))
        .add(Action::kill("Lautrec", 1000).detail("kick off ledge, with bare hands for safety"))
        .add(
            Action::loot(items::HUMANITY)
                .count(5)
                .humanities(1)
                .detail("Lautrec... TODO S&Q now or get later?"),
        )
        .add(Action::run_to(format!(
            "{NEW_LONDO_ELEVATOR} then back entrance of Blighttown"
        )))
        .add(Action::region("Blighttown"))
        .add(Action::perform("Blighttown drop"))
        .add(Action::kill("Blowdart Sniper", 600).detail("run off ledge and plunging attack"))
        .add(Action::receive("Purple Moss").detail("Blowdart Sniper"))
        .add(Action::heal("using Estus Flask").detail("on waterwheel"))
        .add(
            Action::fall_damage("waterwheel onto scaffold then scaffold to ground")
                .detail("RTSR setup, swamp poison finishes the job"),
        )
        .add(Action::use_menu("Purple Moss").detail("once in RTSR range and out of swamp"))
        .add(Action::kill("Quelaag", 20000))
        .add(Action::receive("Soul of Quelaag").souls(8000).detail("Quelaag"))
        .add(
            Action::receive(items::TWIN_HUMANITIES)
                .humanities(2)
                .detail("Quelaag"),
        )
        .add(Action::activate("Second bell"))
        .add(Action::receive(items::BONE).detail("Second bell"))
        .add(Action::use_item(items::BONE))
}

fn firelink_to_sens_fortress(so: &SegmentOptions) -> Segment {
    Segment::new("Firelink to Sen's Fortress")
        .add(Action::region("Firelink Shrine"))
        .add(
            Action::loot(items::HUMANITY)
                .count(3)
                .humanities(1)
                .detail(format!("side of well, get on way to {PARISH_ELEVATOR}."))
                .when(
                    so.options.loot_firelink_well_humanity
                        && !so.loots_firelink_at_start()
                        && !so.uses_reinforced_club(),
                )
                .note("3 humanities at Firelink well looted on way to elevator before Sens Fortress."),
        )
        .add(Action::run_to(PARISH_ELEVATOR))
        .add(Action::use_menu("Soul of Quelaag").detail(PARISH_ELEVATOR))
        .add(Action::region("Undead Parish"))
        .add(
            Action::bonfire_sit("Undead Parish")
                .detail("for warping to later, and safety for Sen's Fortress"),
        )
        .add(Action::run_to("Sen's Fortress"))
        .add(Action::region("Sen's Fortress"))
        .add(Action::run_to("room before 2nd boulder"))
        .add(Action::wait_for("boulder to pass").detail("hitting enemy in room 5 times"))
        .add(Action::run_to("top of ramp").detail("must go IMMEDIATELY after boulder"))
        .add(Action::run_to("fog gate at top of Sen's Fortress"))
        .add(
            Segment::new("Slumbering Dragoncrest Ring detour")
                .when(so.equipment().slumbering_dragoncrest_ring)
                .add(
                    Action::bonfire_sit("Sen's Fortress")
                        .detail(format!("to bone back after getting {SLUMBERING}")),
                )
                .add(
                    Action::run_to("hole at dead end below bonfire and to the right")
                        .detail("fall down it"),
                )
                .add(Action::loot(SLUMBERING))
                .add(Action::use_item(items::BONE)),
        )
        .add(
            Segment::new("No ring detour")
                .when(!so.equipment().slumbering_dragoncrest_ring)
                .add(
                    Action::bonfire_sit("Sen's Fortress")
                        .detail("safety for Iron Golem")
                        .optional(true),
                ),
        )
}

fn sens_fortress_to_anor_londo_residence(so: &SegmentOptions) -> Segment {
    Segment::new("Sen's Fortress to Anor Londo Residence")
        .add(Action::region("Sen's Fortress"))
        .add(Action::fall_damage("off right side of bridge, twice").detail("RTSR setup"))
        .add(Action::kill("Undead Knight Archer", 600).detail("just because he blocks the doorway"))
        .add(Action::kill("Iron Golem", 40000).detail("try to stagger and knock him off"))
        .add(
            Action::receive("Core of an Iron Golem")
                .souls(12000)
                .detail("Iron Golem"),
        )
        .add(
            Action::receive(items::HUMANITY)
                .humanities(1)
                .detail("Iron Golem"),
        )
        .add(Action::region("Anor Londo"))
        .add(
            Segment::new("All-bosses bonfire")
                .when(so.is_all_bosses())
                .add(
                    Action::bonfire_sit("Anor Londo")
                        .detail("safety for rafters")
                        .optional(true),
                ),
        )
        .add(
            Segment::new("Warp-back bonfire")
                .when(!so.is_all_bosses())
                .add(
                    Action::bonfire_sit("Anor Londo")
                        .detail(format!("so you can warp back for {SEATH}")),
                ),
        )
        .add(Action::run_to("elevator"))
        .add(Action::use_menu("Core of an Iron Golem").detail("elevator"))
        .add(Action::run_to("other end of rafters"))
        .add(Action::activate("Bridge lever (1st time to level)"))
        .add(
            Action::equip(SLUMBERING, "Ring 1")
                .detail("while pushing bridge lever")
                .when(so.equipment().slumbering_dragoncrest_ring),
        )
        .add(
            Segment::new("Darkmoon Tomb bonfire")
                .when(so.is_all_bosses())
                .add(Action::activate("Bridge lever (2nd time for Darkmoon Tomb)"))
                .add(Action::run_to("bottom of the stairs"))
                .add(
                    Action::bonfire_sit("Darkmoon Tomb")
                        .detail(format!("so you can warp back for {GWYNDOLIN} and {PRISCILLA}")),
                )
                .add(Action::run_to("top of the stairs"))
                .add(Action::activate("Bridge lever (3rd time to re-level)")),
        )
        .add(Action::run_to("sniper ledge"))
        .add(Action::kill("Silver Knight", 1300).detail("bait melee then run to make him fall"))
        .add(Action::bonfire_sit("Anor Londo Residence"))
}

fn get_and_upgrade_blacksmith_giant_hammer() -> Segment {
    Segment::new("Get and upgrade Blacksmith Giant Hammer")
        .add(Action::region("Anor Londo"))
        .add(Action::run_to("Giant Blacksmith"))
        .add(Action::buy("Weapon Smithbox", 2000).detail("Giant Blacksmith"))
        .add(
            Action::buy(items::TWINKLING_TITANITE, 8000)
                .count(10)
                .detail("Giant Blacksmith"),
        )
        .add(Action::kill("Giant Blacksmith", 3000))
        .add(Action::loot("Blacksmith Giant Hammer").detail("Giant Blacksmith"))
        .add(Action::use_item(items::BONE))
        .add(
            Action::upgrade_item("Blacksmith Giant Hammer", "Blacksmith Giant Hammer +5")
                .souls(10000)
                .material(items::TWINKLING_TITANITE, 10)
                .detail("Bonfire"),
        )
        .add(
            Action::equip("Blacksmith Giant Hammer +5", "Right Hand 1")
                .detail("could wait until O&S fog gate"),
        )
}

fn anor_londo_residence_to_sif(so: &SegmentOptions) -> Segment {
    Segment::new("Anor Londo Residence to Sif")
        .add(Action::run_to(
            "door past Silver Knight, through fireplace, down stairs",
        ))
        .add(
            Segment::new("Occult Club pickup")
                .when(so.equipment().occult_club)
                .add(Action::kill("Mimic", 2000))
                .add(Action::loot("Occult Club").detail("Mimic"))
                .add(
                    Action::use_item(items::BONE)
                        .detail("could darksign too, O&S gives plenty of souls")
                        .note(format!(
                            "Could save 1 {} by using {} at Mimic with Occult Club",
                            items::BONE,
                            items::DARKSIGN
                        )),
                ),
        )
        .add(Action::run_to("Spiral Stairs and jump out for shortcut"))
        .add(
            Action::fall_damage(concat!(
                "Jumping from upper stairs over the rail of the flat section,",
                " landing on the ground, rolling immediately."
            ))
            .detail("RTSR setup (1/2)"),
        )
        .add(Action::run_to("Top of stairs by where you entered the room"))
        .add(
            Action::fall_damage("Jumping from top of stairs toward boss fog gate rolling immediately.")
                .detail("RTSR setup (2/2)"),
        )
        .add(Action::kill(O_AND_S, 50000).detail(if so.humanity().kill_smough_first {
            "Kill Smough first"
        } else {
            "Kill Ornstein first"
        }))
        .add(
            Action::receive("Soul of Smough")
                .souls(12000)
                .detail(O_AND_S)
                .when(!so.humanity().kill_smough_first),
        )
        .add(
            Action::receive("Soul of Ornstein")
                .souls(12000)
                .detail(O_AND_S)
                .when(so.humanity().kill_smough_first),
        )
        .add(Action::activate("Door to Gwynevere"))
        .add(
            Segment::new("Occult Club to off hand")
                .when(so.equipment().occult_club)
                .add(
                    Action::equip("Occult Club", "Right Hand 2")
                        .detail("(2nd slot) while door is opening"),
                ),
        )
        .add(Action::talk_to("Gwynevere"))
        .add(Action::receive("Lordvessel").detail("Gwynevere"))
        .add(Action::use_item(items::BONE))
        .add(Action::warp_to("Undead Parish"))
        .add(Action::buy("Crest of Artorias", 20000).detail(ANDRE))
        .add(
            Segment::new("Occult Club downgrade")
                .when(so.equipment().occult_club)
                .add(
                    Action::downgrade_item("Occult Club", "Divine Club +5")
                        .souls(200)
                        .detail(ANDRE),
                ),
        )
        .add(Action::run_to("Darkroot Garden door"))
        .add(Action::region("Darkroot Garden"))
        .add(Action::activate("Darkroot Garden door").detail("using Crest of Artorias"))
        .add(Action::equip(items::DARKSIGN, "Item 5").detail("while door is opening"))
        .add(Action::run_to(format!("Door to {SIF}")))
        .add(Action::activate(format!("Door to {SIF}")))
        .add(
            Action::equip(items::DARKSIGN, "Item 5")
                .detail("while door is opening (if missed)")
                .optional(true),
        )
        .add(Action::loot("Hornet Ring").detail(format!("Behind grave guarded by {SIF}")))
        .add(Action::kill(SIF, 40000))
        .add(Action::receive("Covenant of Artorias").detail(SIF))
        .add(Action::receive("Soul of Sif").souls(16000).detail(SIF))
        .add(
            Segment::new("Sif drops skipped")
                .when(!so.humanity().wait_for_sif_drops)
                .note(format!(
                    "1 slow {} and {} skipped from {SIF}.",
                    items::HUMANITY,
                    items::BONE
                )),
        )
        .add(
            Segment::new("Sif drops awaited")
                .when(so.humanity().wait_for_sif_drops)
                .note(format!("wait for 1 slow {} from {SIF}.", items::HUMANITY))
                .add(
                    Action::receive(items::HUMANITY)
                        .humanities(1)
                        .detail(format!("{SIF} (slow to receive it)")),
                )
                .add(Action::receive(items::BONE).detail(format!("{SIF} (slow to receive it)"))),
        )
        .add(Action::use_item(items::DARKSIGN))
}

fn todo_segment(so: &SegmentOptions) -> Segment {
    Segment::new("Remaining bosses, unrouted")
        .add(Action::region("TODO"))
        .add(
            Action::receive(items::HUMANITY)
                .humanities(1)
                .detail(O_AND_S),
        )
        .add(Action::kill("Pinwheel", 15000))
        .add(Action::receive("Rite of Kindling").detail("Pinwheel"))
        .add(
            Action::receive(items::HUMANITY)
                .humanities(1)
                .detail("Pinwheel"),
        )
        .add(Action::receive(items::BONE).detail("Pinwheel"))
        .add(Action::kill(NITO, 60000))
        .add(Action::receive("Lord Soul").detail(NITO))
        .add(
            Segment::new("Nito drop skipped")
                .when(!so.humanity().wait_for_nito_drops)
                .note(format!("1 slow {} skipped from {NITO}.", items::HUMANITY)),
        )
        .add(
            Segment::new("Nito drop awaited")
                .when(so.humanity().wait_for_nito_drops)
                .note(format!("wait for 1 slow {} from {NITO}.", items::HUMANITY))
                .add(
                    Action::receive(items::HUMANITY)
                        .humanities(1)
                        .detail(format!("{NITO} (slow to receive it)")),
                ),
        )
        .add(Action::kill(FOUR_KINGS, 60000))
        .add(Action::receive("Bequeathed Lord Soul Shard").detail(FOUR_KINGS))
        .add(
            Segment::new("Four Kings drops skipped")
                .when(!so.humanity().wait_for_four_kings_drops)
                .note(format!(
                    "4 slow {} skipped from {FOUR_KINGS}.",
                    items::HUMANITY
                )),
        )
        .add(
            Segment::new("Four Kings drops awaited")
                .when(so.humanity().wait_for_four_kings_drops)
                .note(format!(
                    "wait for 4 slow {} from {FOUR_KINGS}.",
                    items::HUMANITY
                ))
                .add(
                    Action::receive(items::HUMANITY)
                        .count(4)
                        .humanities(1)
                        .detail(format!("{FOUR_KINGS} (slow to receive it)")),
                ),
        )
        .add(
            Action::kill("Darkmoon Knightess", 1000)
                .detail("Anor Londo fire keeper")
                .when(so.humanity().kill_darkmoon_knightess),
        )
        .add(
            Action::loot("Fire Keeper Soul")
                .detail("Darkmoon Knightess")
                .when(so.humanity().kill_darkmoon_knightess),
        )
        .add(Action::kill(SEATH, 60000))
        .add(Action::receive("Bequeathed Lord Soul Shard").detail(SEATH))
        .add(
            Segment::new("Seath drop skipped")
                .when(!so.humanity().wait_for_seath_drops)
                .note(format!("1 slow {} skipped from {SEATH}.", items::HUMANITY)),
        )
        .add(
            Segment::new("Seath drop awaited")
                .when(so.humanity().wait_for_seath_drops)
                .note(format!("wait for 1 slow humanity from {SEATH}."))
                .add(
                    Action::receive(items::HUMANITY)
                        .humanities(1)
                        .detail(format!("{SEATH} (slow to receive it)")),
                ),
        )
        .add(
            Action::kill("Patches", 2000)
                .detail("Tomb of the Giants")
                .when(so.humanity().kill_patches),
        )
        .add(
            Action::loot(items::HUMANITY)
                .count(4)
                .humanities(1)
                .detail("Patches")
                .when(so.humanity().kill_patches),
        )
        .add(Action::kill(PETRUS, 1000).when(so.humanity().kill_petrus))
        .add(
            Action::loot(items::HUMANITY)
                .count(2)
                .humanities(1)
                .detail(PETRUS)
                .when(so.humanity().kill_petrus),
        )
        .add(Action::kill(ANDRE, 1000).when(so.humanity().kill_andre))
        .add(
            Action::loot(items::HUMANITY)
                .count(3)
                .humanities(1)
                .detail(ANDRE)
                .when(so.humanity().kill_andre),
        )
        .add(
            Action::use_menu("Fire Keeper Soul")
                .count(6)
                .allow_partial()
                .detail("use all that you have"),
        )
        .add(
            Action::use_menu(items::HUMANITY)
                .count(30)
                .allow_partial()
                .detail("use all that you have"),
        )
        .add(
            Action::use_menu(items::TWIN_HUMANITIES)
                .count(15)
                .allow_partial()
                .detail("use all that you have"),
        )
}

// ============================================================================
// Shipped option sets
// ============================================================================

fn any_percent_run() -> RunOptions {
    RunOptions::new(
        RunType::AnyPercent,
        EquipmentOptions {
            occult_club: true,
            ..EquipmentOptions::default()
        },
        HumanityOptions {
            loot_undead_parish_fire_keeper_soul: true,
            kill_darkmoon_knightess: true,
            wait_for_four_kings_drops: true,
            ..HumanityOptions::default()
        },
    )
}

fn option_sets() -> Vec<Options> {
    vec![
        Options {
            loot_firelink_well_humanity: true,
            loot_firelink_elevator_soul: true,
            loot_firelink_homeward_bones: true,
            loot_firelink_graveyard_souls: true,
            loot_new_londo_ruins_elevator_soul: true,
            kill_darkroot_basin_black_knight: true,
            runs: BTreeMap::from([("Any%".to_owned(), any_percent_run())]),
            damage_tables: vec![
                DamageTable::new(
                    "Reinforced Club +0",
                    &HUMANOID_ENEMIES_WITHOUT_UPGRADES,
                    &HUMANOID_HIT_TYPES,
                ),
                DamageTable::new(
                    "Reinforced Club +5",
                    &[
                        ENEMIES_WITH_UPGRADES.as_slice(),
                        ENEMIES_MAYBE_WITH_FINAL_WEAPON.as_slice(),
                    ]
                    .concat(),
                    &STANDARD_HIT_TYPES,
                ),
                DamageTable::new(
                    "Reinforced Club +5",
                    &[
                        HUMANOID_ENEMIES_WITH_UPGRADES.as_slice(),
                        HUMANOID_ENEMIES_MAYBE_WITH_FINAL_WEAPON.as_slice(),
                    ]
                    .concat(),
                    &HUMANOID_HIT_TYPES,
                ),
                DamageTable::new(
                    "Blacksmith Giant Hammer +5",
                    &ENEMIES_MAYBE_WITH_FINAL_WEAPON,
                    &STANDARD_HIT_TYPES_2H,
                ),
                DamageTable::new(
                    "Blacksmith Giant Hammer +5",
                    &HUMANOID_ENEMIES_MAYBE_WITH_FINAL_WEAPON,
                    &HUMANOID_HIT_TYPES_2H,
                ),
            ],
            ..Options::new("Reinforced Club", 5)
        },
        Options {
            loot_firelink_well_humanity: true,
            kill_darkroot_basin_black_knight: true,
            runs: BTreeMap::from([("Any%".to_owned(), any_percent_run())]),
            damage_tables: vec![
                DamageTable::new(
                    "Hand Axe +0",
                    &HUMANOID_ENEMIES_WITHOUT_UPGRADES,
                    &HUMANOID_HIT_TYPES,
                ),
                DamageTable::new(
                    "Battle Axe +4",
                    &[
                        ENEMIES_WITH_UPGRADES.as_slice(),
                        ENEMIES_MAYBE_WITH_FINAL_WEAPON.as_slice(),
                    ]
                    .concat(),
                    &STANDARD_HIT_TYPES,
                ),
                DamageTable::new(
                    "Battle Axe +4",
                    &[
                        HUMANOID_ENEMIES_WITH_UPGRADES.as_slice(),
                        HUMANOID_ENEMIES_MAYBE_WITH_FINAL_WEAPON.as_slice(),
                    ]
                    .concat(),
                    &HUMANOID_HIT_TYPES,
                ),
                DamageTable::new(
                    "Battle Axe +3",
                    &[
                        ENEMIES_WITH_UPGRADES.as_slice(),
                        ENEMIES_MAYBE_WITH_FINAL_WEAPON.as_slice(),
                    ]
                    .concat(),
                    &STANDARD_HIT_TYPES,
                ),
                DamageTable::new(
                    "Battle Axe +3",
                    &[
                        HUMANOID_ENEMIES_WITH_UPGRADES.as_slice(),
                        HUMANOID_ENEMIES_MAYBE_WITH_FINAL_WEAPON.as_slice(),
                    ]
                    .concat(),
                    &HUMANOID_HIT_TYPES,
                ),
                DamageTable::new(
                    "Blacksmith Giant Hammer +5",
                    &ENEMIES_MAYBE_WITH_FINAL_WEAPON,
                    &STANDARD_HIT_TYPES_2H,
                ),
                DamageTable::new(
                    "Blacksmith Giant Hammer +5",
                    &HUMANOID_ENEMIES_MAYBE_WITH_FINAL_WEAPON,
                    &HUMANOID_HIT_TYPES_2H,
                ),
            ],
            ..Options::new("Battle Axe", 4)
        },
        Options {
            loot_firelink_well_humanity: true,
            loot_firelink_homeward_bones: true,
            loot_firelink_graveyard_souls: true,
            loot_new_londo_ruins_elevator_soul: true,
            runs: BTreeMap::from([("Any% without Black Knight".to_owned(), any_percent_run())]),
            damage_tables: vec![
                DamageTable::new(
                    "Hand Axe +0",
                    &HUMANOID_ENEMIES_WITHOUT_UPGRADES,
                    &HUMANOID_HIT_TYPES,
                ),
                DamageTable::new(
                    "Battle Axe +4",
                    &[
                        ENEMIES_WITH_UPGRADES.as_slice(),
                        ENEMIES_MAYBE_WITH_FINAL_WEAPON.as_slice(),
                    ]
                    .concat(),
                    &STANDARD_HIT_TYPES,
                ),
                DamageTable::new(
                    "Battle Axe +4",
                    &[
                        HUMANOID_ENEMIES_WITH_UPGRADES.as_slice(),
                        HUMANOID_ENEMIES_MAYBE_WITH_FINAL_WEAPON.as_slice(),
                    ]
                    .concat(),
                    &HUMANOID_HIT_TYPES,
                ),
                DamageTable::new(
                    "Blacksmith Giant Hammer +5",
                    &ENEMIES_MAYBE_WITH_FINAL_WEAPON,
                    &STANDARD_HIT_TYPES_2H,
                ),
                DamageTable::new(
                    "Blacksmith Giant Hammer +5",
                    &HUMANOID_ENEMIES_MAYBE_WITH_FINAL_WEAPON,
                    &HUMANOID_HIT_TYPES_2H,
                ),
            ],
            ..Options::new("Battle Axe", 4)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_run(initial_upgrade: i64) -> Options {
        let mut options = Options::new("Battle Axe", initial_upgrade);
        options.runs.insert("Any%".to_owned(), any_percent_run());
        options
    }

    #[test]
    fn upgrade_levels_outside_the_shard_path_are_rejected() {
        let error = SegmentOptions::new(&options_with_run(6), "Any%").unwrap_err();
        assert_eq!(error, ContentError::UpgradeLevelOutOfRange { level: 6 });
        assert_eq!(
            error.to_string(),
            "initial upgrade +6 is outside 0..=5"
        );

        assert!(SegmentOptions::new(&options_with_run(0), "Any%").is_ok());
        assert!(SegmentOptions::new(&options_with_run(5), "Any%").is_ok());
    }

    #[test]
    fn unknown_run_names_are_rejected() {
        let error = SegmentOptions::new(&options_with_run(4), "All Bosses").unwrap_err();
        assert_eq!(
            error,
            ContentError::UnknownRun {
                name: "All Bosses".to_owned()
            }
        );
    }

    #[test]
    fn early_upgraded_weapon_leaves_plus_zero_unwritten() {
        assert_eq!(Options::new("Hand Axe", 0).early_upgraded_weapon(), "Hand Axe");
        assert_eq!(
            Options::new("Battle Axe", 4).early_upgraded_weapon(),
            "Battle Axe +4"
        );
        assert_eq!(
            Options::new("Reinforced Club", 5).early_upgraded_weapon(),
            "Reinforced Club +5"
        );
    }

    #[test]
    fn shard_counts_follow_the_reinforcement_schedule() {
        let counts: Vec<i64> = (0..=5)
            .map(|level| {
                let options = options_with_run(level);
                SegmentOptions::new(&options, "Any%")
                    .unwrap()
                    .early_weapon_shards()
            })
            .collect();
        assert_eq!(counts, vec![0, 1, 2, 4, 6, 9]);
    }

    #[test]
    fn display_names_combine_run_and_weapon() {
        let options = options_with_run(4);
        let so = SegmentOptions::new(&options, "Any%").unwrap();
        assert_eq!(so.display_name(), "Any% with Battle Axe +4");
    }

    #[test]
    fn conditional_branches_share_one_skeleton() {
        // Every variation flattens the same unconditional spine; option
        // flags only add or remove steps, never reorder them.
        let with_knight = build(&option_sets()[1], "Any%").unwrap();
        let without_knight = build(&option_sets()[2], "Any% without Black Knight").unwrap();

        let kills = |route: &Route| -> Vec<String> {
            route
                .segment
                .flatten()
                .actions
                .iter()
                .filter(|action| action.name() == "Kill")
                .map(|action| action.target().to_owned())
                .collect()
        };

        let mut expected = kills(&with_knight);
        expected.retain(|target| target != "Black Knight");
        assert_eq!(kills(&without_knight), expected);
    }
}
