//! Accumulated run state.
//!
//! This module owns the data structures that describe everything a route has
//! granted, spent, equipped, and visited so far. Replay clones and snapshots
//! this state but mutates it exclusively through action application.
//!
//! All maps are `BTreeMap` so iteration order, and with it every report and
//! error listing derived from a state, is identical across runs.

use std::collections::{BTreeMap, BTreeSet};
use std::mem;

use crate::error::ReplayError;

/// Canonical snapshot of the deterministic run state.
///
/// The four counters mirror the two currencies of a run: `souls` and
/// `humanity` are spendable, while `item_souls` and `item_humanities` track
/// value still banked inside unconsumed items. Consuming an item moves its
/// value from the banked pool to the spendable one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    /// Spendable souls.
    pub souls: i64,
    /// Souls banked inside unconsumed items.
    pub item_souls: i64,
    /// Spendable humanity.
    pub humanity: i64,
    /// Humanity banked inside unconsumed items.
    pub item_humanities: i64,

    /// Most recently sat bonfire.
    pub bonfire: String,
    /// Current region, used for trace segmentation and warp bookkeeping.
    pub region: String,

    /// Region each bonfire was first sat at in. Append-only; a recorded
    /// binding never changes.
    bonfire_to_region: BTreeMap<String, String>,
    /// Item occupying each equipment slot. Absent slot means empty.
    equipment: BTreeMap<String, String>,
    /// Held count per item. May go negative between a consuming action and
    /// the balance scan; that is exactly what the scan reports.
    inventory: BTreeMap<String, i64>,

    /// First stated per-unit soul value of each item.
    souls_lookup: BTreeMap<String, i64>,
    /// First stated per-unit humanity value of each item.
    humanities_lookup: BTreeMap<String, i64>,

    /// Soft errors queued since the last [`State::errors`] drain.
    new_errors: Vec<String>,
    /// Total soft errors reported over the life of this state.
    error_count: u64,
    /// Deficits already reported, so a standing overdraft is named once.
    last_overdrafts: BTreeSet<String>,
}

impl State {
    /// Creates an empty state: no currencies, no items, nowhere visited.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the held count of `item`, zero when never seen.
    pub fn item_count(&self, item: &str) -> i64 {
        self.inventory.get(item).copied().unwrap_or(0)
    }

    /// Returns the item occupying `slot`, if any.
    pub fn equipped(&self, slot: &str) -> Option<&str> {
        self.equipment.get(slot).map(String::as_str)
    }

    /// Returns true if any slot holds `item`.
    pub fn is_equipped(&self, item: &str) -> bool {
        self.equipment.values().any(|occupant| occupant == item)
    }

    /// Returns the region `bonfire` is recorded in, if it was ever sat at.
    pub fn bonfire_region(&self, bonfire: &str) -> Option<&str> {
        self.bonfire_to_region.get(bonfire).map(String::as_str)
    }

    /// Iterates equipment as `(slot, item)` pairs in slot order.
    pub fn equipment(&self) -> impl Iterator<Item = (&str, &str)> {
        self.equipment
            .iter()
            .map(|(slot, item)| (slot.as_str(), item.as_str()))
    }

    /// Iterates the inventory as `(item, count)` pairs in item order.
    pub fn inventory(&self) -> impl Iterator<Item = (&str, i64)> {
        self.inventory
            .iter()
            .map(|(item, count)| (item.as_str(), *count))
    }

    /// Total soft errors reported so far, including drained ones.
    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    // ========================================================================
    // Soft errors
    // ========================================================================

    /// Drains pending soft errors plus any newly appearing deficits.
    ///
    /// A deficit is a negative counter or item count, formatted as
    /// `name(value)`. Each distinct deficit is reported once, prefixed with
    /// `insufficient amount: `; it is reported again only if its value
    /// changes or if it heals and later reappears. Counters are scanned
    /// before inventory so souls problems lead the listing.
    pub fn errors(&mut self) -> Vec<String> {
        let mut errors = mem::take(&mut self.new_errors);
        let overdrafts = self.overdrafts();
        for deficit in &overdrafts {
            if !self.last_overdrafts.contains(deficit) {
                errors.push(format!("insufficient amount: {deficit}"));
            }
        }
        self.last_overdrafts = overdrafts.into_iter().collect();
        self.error_count += errors.len() as u64;
        errors
    }

    /// Queues a soft error for the next [`State::errors`] drain.
    pub(crate) fn push_error(&mut self, message: String) {
        self.new_errors.push(message);
    }

    /// Current deficits in reporting order: counters, then inventory.
    fn overdrafts(&self) -> Vec<String> {
        let counters = [
            ("souls", self.souls),
            ("item souls", self.item_souls),
            ("humanity", self.humanity),
            ("item humanities", self.item_humanities),
        ];
        let items = self
            .inventory
            .iter()
            .map(|(item, count)| (item.as_str(), *count));

        counters
            .into_iter()
            .chain(items)
            .filter(|(_, value)| *value < 0)
            .map(|(name, value)| format!("{name}({value})"))
            .collect()
    }

    // ========================================================================
    // Mutation (action application only)
    // ========================================================================

    /// Records `bonfire` as sat at, binding it to the current region.
    ///
    /// The first sit wins: re-sitting from a different region keeps the
    /// original binding and queues a soft error naming both regions.
    pub(crate) fn sit_at_bonfire(&mut self, bonfire: &str) {
        match self.bonfire_to_region.get(bonfire).cloned() {
            None => {
                self.bonfire_to_region
                    .insert(bonfire.to_owned(), self.region.clone());
            }
            Some(known) if known != self.region => {
                self.push_error(format!(
                    "bonfire region mismatch: \"{bonfire}\" belongs to \
                     \"{known}\", not \"{}\"",
                    self.region
                ));
            }
            Some(_) => {}
        }
        self.bonfire = bonfire.to_owned();
    }

    /// Moves to the region `bonfire` is recorded in and returns it.
    pub(crate) fn warp_through(&mut self, bonfire: &str) -> Result<String, ReplayError> {
        let region = self
            .bonfire_to_region
            .get(bonfire)
            .cloned()
            .ok_or_else(|| ReplayError::unknown_bonfire(bonfire))?;
        self.region = region.clone();
        Ok(region)
    }

    /// Adds `count` of `item` to the inventory. Negative counts subtract.
    pub(crate) fn add_item(&mut self, item: &str, count: i64) {
        *self.inventory.entry(item.to_owned()).or_insert(0) += count;
    }

    /// Puts `item` into `slot`, returning the displaced occupant if any.
    pub(crate) fn equip(&mut self, slot: &str, item: &str) -> Option<String> {
        self.equipment.insert(slot.to_owned(), item.to_owned())
    }

    /// Empties `slot`, returning its occupant if any.
    pub(crate) fn unequip(&mut self, slot: &str) -> Option<String> {
        self.equipment.remove(slot)
    }

    /// Empties the first slot holding `item` and returns the slot name.
    ///
    /// "First" is the smallest slot name; slots iterate in sorted order.
    pub fn remove_equipment(&mut self, item: &str) -> Option<String> {
        let slot = self
            .equipment
            .iter()
            .find(|(_, occupant)| occupant.as_str() == item)
            .map(|(slot, _)| slot.clone())?;
        self.equipment.remove(&slot);
        Some(slot)
    }

    /// Resolves the per-unit soul value of `item`.
    ///
    /// The first non-zero stated value is recorded and governs forever; a
    /// different non-zero restatement queues a soft error and the recorded
    /// value is used. A zero (unstated) value falls back to the recording.
    pub(crate) fn soul_value(&mut self, item: &str, stated: i64) -> i64 {
        resolve_value(
            &mut self.souls_lookup,
            &mut self.new_errors,
            "souls",
            item,
            stated,
        )
    }

    /// Resolves the per-unit humanity value of `item`.
    ///
    /// Same recording rules as [`State::soul_value`].
    pub(crate) fn humanity_value(&mut self, item: &str, stated: i64) -> i64 {
        resolve_value(
            &mut self.humanities_lookup,
            &mut self.new_errors,
            "humanity",
            item,
            stated,
        )
    }
}

/// Shared first-write-wins logic for the two value lookups.
fn resolve_value(
    lookup: &mut BTreeMap<String, i64>,
    errors: &mut Vec<String>,
    kind: &str,
    item: &str,
    stated: i64,
) -> i64 {
    if stated == 0 {
        return lookup.get(item).copied().unwrap_or(0);
    }
    match lookup.get(item) {
        None => {
            lookup.insert(item.to_owned(), stated);
            stated
        }
        Some(&recorded) if recorded == stated => stated,
        Some(&recorded) => {
            errors.push(format!(
                "conflicting {kind} value: {item}({stated} != {recorded})"
            ));
            recorded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_no_errors() {
        let mut state = State::new();
        assert_eq!(state.errors(), Vec::<String>::new());
        assert_eq!(state.error_count(), 0);
    }

    #[test]
    fn standing_deficit_is_reported_once() {
        let mut state = State::new();
        state.souls = -50;
        assert_eq!(state.errors(), vec!["insufficient amount: souls(-50)"]);
        assert_eq!(state.errors(), Vec::<String>::new());
        assert_eq!(state.error_count(), 1);
    }

    #[test]
    fn changed_deficit_is_reported_again() {
        let mut state = State::new();
        state.souls = -50;
        assert_eq!(state.errors().len(), 1);
        state.souls = -70;
        assert_eq!(state.errors(), vec!["insufficient amount: souls(-70)"]);
    }

    #[test]
    fn healed_then_reappearing_deficit_is_reported_again() {
        let mut state = State::new();
        state.add_item("Homeward Bone", -1);
        assert_eq!(
            state.errors(),
            vec!["insufficient amount: Homeward Bone(-1)"]
        );
        state.add_item("Homeward Bone", 1);
        assert_eq!(state.errors(), Vec::<String>::new());
        state.add_item("Homeward Bone", -1);
        assert_eq!(
            state.errors(),
            vec!["insufficient amount: Homeward Bone(-1)"]
        );
        assert_eq!(state.error_count(), 2);
    }

    #[test]
    fn counters_are_listed_before_inventory() {
        let mut state = State::new();
        state.add_item("Arrow", -3);
        state.souls = -10;
        state.item_humanities = -2;
        assert_eq!(
            state.errors(),
            vec![
                "insufficient amount: souls(-10)",
                "insufficient amount: item humanities(-2)",
                "insufficient amount: Arrow(-3)",
            ]
        );
    }

    #[test]
    fn remove_equipment_takes_the_first_slot_in_order() {
        let mut state = State::new();
        state.equip("Right Hand 2", "Hand Axe");
        state.equip("Right Hand 1", "Hand Axe");
        assert_eq!(
            state.remove_equipment("Hand Axe"),
            Some("Right Hand 1".to_owned())
        );
        assert_eq!(state.equipped("Right Hand 1"), None);
        assert_eq!(state.equipped("Right Hand 2"), Some("Hand Axe"));
        assert_eq!(state.remove_equipment("Pendant"), None);
    }

    #[test]
    fn bonfire_binding_is_first_write_wins() {
        let mut state = State::new();
        state.region = "Firelink Shrine".to_owned();
        state.sit_at_bonfire("Firelink Shrine");

        state.region = "Undead Burg".to_owned();
        state.sit_at_bonfire("Firelink Shrine");

        assert_eq!(
            state.bonfire_region("Firelink Shrine"),
            Some("Firelink Shrine")
        );
        let errors = state.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Firelink Shrine"));
        assert!(errors[0].contains("Undead Burg"));
    }

    #[test]
    fn warp_requires_a_known_bonfire() {
        let mut state = State::new();
        assert_eq!(
            state.warp_through("Anor Londo"),
            Err(ReplayError::unknown_bonfire("Anor Londo"))
        );

        state.region = "Anor Londo".to_owned();
        state.sit_at_bonfire("Anor Londo");
        state.region = "Sen's Fortress".to_owned();
        assert_eq!(state.warp_through("Anor Londo"), Ok("Anor Londo".to_owned()));
        assert_eq!(state.region, "Anor Londo");
    }

    #[test]
    fn stated_values_are_first_write_wins() {
        let mut state = State::new();
        assert_eq!(state.soul_value("Soul of a Lost Undead", 200), 200);
        assert_eq!(state.soul_value("Soul of a Lost Undead", 0), 200);
        assert_eq!(state.soul_value("Soul of a Lost Undead", 150), 200);
        assert_eq!(
            state.errors(),
            vec!["conflicting souls value: Soul of a Lost Undead(150 != 200)"]
        );
        assert_eq!(state.soul_value("Dungeon Cell Key", 0), 0);
    }
}
