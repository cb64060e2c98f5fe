//! Action domain - the step vocabulary routes are written in.
//!
//! An [`Action`] is an immutable template: route definitions construct one
//! per step and the replay engine applies it against a [`State`], producing
//! a [`Record`] that owns every derived field (displaced equipment, resolved
//! targets, effective counts). The template itself is never mutated, so one
//! route tree can be replayed any number of times.
//!
//! # Module Structure
//!
//! - `kind`: the closed [`ActionKind`] sum type
//! - `record`: the applied [`Record`] and its display rules
//! - `apply`: the mutation rule for each kind

mod apply;
mod kind;
mod record;

pub use kind::ActionKind;
pub use record::Record;

use std::collections::BTreeMap;

#[cfg(doc)]
use crate::state::State;

/// One step of a route.
///
/// Constructors cover every kind; the fluent builders fill in the optional
/// data the way route definitions state it. Numeric builders only touch the
/// kinds that carry the field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub(crate) kind: ActionKind,
    /// Subject of the step: item, enemy, place, or error message.
    pub(crate) target: String,
    /// Free text shown under the step in reports.
    pub(crate) detail: String,
    /// False excludes the step (and its notes) from flattening entirely.
    pub(crate) condition: bool,
    /// Cosmetic marker for steps that can be skipped without replanning.
    pub(crate) optional: bool,
    /// Template-level display suppression.
    pub(crate) output: bool,
    /// Hoisted to the owning segment when the step is included.
    pub(crate) notes: Vec<String>,
    /// Overrides the kind's canonical name in reports.
    pub(crate) display_name: Option<String>,
}

impl Action {
    fn new(kind: ActionKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            detail: String::new(),
            condition: true,
            optional: false,
            output: true,
            notes: Vec::new(),
            display_name: None,
        }
    }

    fn renamed(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_owned());
        self
    }

    // ========================================================================
    // Constructors, one per kind (plus the renamed same-behavior variants)
    // ========================================================================

    /// Moves to `region`. Rendered as a section divider, not a step row.
    pub fn region(region: impl Into<String>) -> Self {
        let mut action = Self::new(ActionKind::Region, region);
        action.output = false;
        action
    }

    /// Sits at `bonfire` deliberately.
    pub fn bonfire_sit(bonfire: impl Into<String>) -> Self {
        Self::new(ActionKind::BonfireSit, bonfire)
    }

    /// Sits at `bonfire` as a side effect of arriving (first visit lights it).
    pub fn auto_bonfire(bonfire: impl Into<String>) -> Self {
        Self::bonfire_sit(bonfire).renamed("AutoBonfire")
    }

    /// Warps to the region `bonfire` was sat in. Hard failure if unknown.
    pub fn warp_to(bonfire: impl Into<String>) -> Self {
        Self::new(ActionKind::WarpTo, bonfire)
    }

    /// Equips `item` into `slot`.
    pub fn equip(item: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::new(
            ActionKind::Equip {
                slot: slot.into(),
                expected_to_replace: None,
            },
            item,
        )
    }

    /// Equips `item` into `slot` without a deliberate menu trip.
    pub fn auto_equip(item: impl Into<String>, slot: impl Into<String>) -> Self {
        Self::equip(item, slot).renamed("AutoEquip")
    }

    /// Clears `slot`. The report shows whatever was removed.
    pub fn unequip(slot: impl Into<String>) -> Self {
        let slot = slot.into();
        Self::new(
            ActionKind::UnEquip {
                slot: slot.clone(),
                expected_to_replace: None,
            },
            slot,
        )
    }

    /// Picks `item` up from the world.
    pub fn loot(item: impl Into<String>) -> Self {
        Self::new(
            ActionKind::Loot {
                count: 1,
                souls: 0,
                humanities: 0,
            },
            item,
        )
    }

    /// Is handed `item` by an event or character.
    pub fn receive(item: impl Into<String>) -> Self {
        Self::loot(item).renamed("Receive")
    }

    /// Consumes `item` from the inventory menu.
    pub fn use_menu(item: impl Into<String>) -> Self {
        Self::new(
            ActionKind::UseMenu {
                count: 1,
                allow_partial: false,
            },
            item,
        )
    }

    /// Consumes one `item` via its equip slot. Soft error if not equipped.
    pub fn use_item(item: impl Into<String>) -> Self {
        Self::new(ActionKind::Use, item)
    }

    /// Kills `target` for `souls`.
    pub fn kill(target: impl Into<String>, souls: i64) -> Self {
        Self::new(ActionKind::Kill { count: 1, souls }, target)
    }

    /// Kill that happens in passing (plunge, ledge, scripted death).
    pub fn auto_kill(target: impl Into<String>, souls: i64) -> Self {
        Self::kill(target, souls).renamed("AutoKill")
    }

    /// Buys `item` at `souls` apiece.
    pub fn buy(item: impl Into<String>, souls: i64) -> Self {
        Self::new(
            ActionKind::Buy {
                count: 1,
                souls,
                always: true,
            },
            item,
        )
    }

    /// Reinforces `item` into `result` at a blacksmith or bonfire.
    pub fn upgrade_item(item: impl Into<String>, result: impl Into<String>) -> Self {
        Self::new(
            ActionKind::UpgradeItem {
                result: result.into(),
                souls: 0,
                materials: BTreeMap::new(),
            },
            item,
        )
    }

    /// Ascends `item` down a path into `result` (same mechanics as an
    /// upgrade, different menu).
    pub fn downgrade_item(item: impl Into<String>, result: impl Into<String>) -> Self {
        Self::upgrade_item(item, result).renamed("DowngradeItem")
    }

    /// Travel on foot.
    pub fn run_to(place: impl Into<String>) -> Self {
        Self::new(ActionKind::RunTo, place)
    }

    /// Waits for a world event.
    pub fn wait_for(event: impl Into<String>) -> Self {
        Self::new(ActionKind::WaitFor, event)
    }

    /// Performs a named maneuver.
    pub fn perform(maneuver: impl Into<String>) -> Self {
        Self::new(ActionKind::Perform, maneuver)
    }

    /// Operates a lever, door, or trigger.
    pub fn activate(target: impl Into<String>) -> Self {
        Self::new(ActionKind::Activate, target)
    }

    /// Talks to a character.
    pub fn talk_to(character: impl Into<String>) -> Self {
        Self::new(ActionKind::TalkTo, character)
    }

    /// Heals by the named means.
    pub fn heal(means: impl Into<String>) -> Self {
        Self::new(ActionKind::Heal, means)
    }

    /// Takes deliberate fall damage.
    pub fn fall_damage(ledge: impl Into<String>) -> Self {
        Self::new(ActionKind::FallDamage, ledge)
    }

    /// Jumps somewhere a run cannot reach.
    pub fn jump(target: impl Into<String>) -> Self {
        Self::new(ActionKind::Jump, target)
    }

    /// Synthetic soft-error step carrying `message` as its target.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ActionKind::Error, message)
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the free-text detail line.
    #[must_use]
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Includes this step only when `condition` holds.
    #[must_use]
    pub fn when(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }

    /// Marks the step skippable.
    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Appends a note, hoisted to the owning segment on inclusion.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Sets the count on the kinds that carry one.
    #[must_use]
    pub fn count(mut self, value: i64) -> Self {
        match &mut self.kind {
            ActionKind::Loot { count, .. }
            | ActionKind::UseMenu { count, .. }
            | ActionKind::Kill { count, .. }
            | ActionKind::Buy { count, .. } => *count = value,
            _ => {}
        }
        self
    }

    /// Sets the per-unit soul value or cost on the kinds that carry one.
    #[must_use]
    pub fn souls(mut self, value: i64) -> Self {
        match &mut self.kind {
            ActionKind::Loot { souls, .. }
            | ActionKind::Kill { souls, .. }
            | ActionKind::Buy { souls, .. }
            | ActionKind::UpgradeItem { souls, .. } => *souls = value,
            _ => {}
        }
        self
    }

    /// Sets the per-unit humanity value on loots.
    #[must_use]
    pub fn humanities(mut self, value: i64) -> Self {
        if let ActionKind::Loot { humanities, .. } = &mut self.kind {
            *humanities = value;
        }
        self
    }

    /// Lets a menu use clamp to the held count instead of overdrafting.
    #[must_use]
    pub fn allow_partial(mut self) -> Self {
        if let ActionKind::UseMenu { allow_partial, .. } = &mut self.kind {
            *allow_partial = true;
        }
        self
    }

    /// Makes a buy top up to `count` held instead of always buying `count`.
    #[must_use]
    pub fn as_needed(mut self) -> Self {
        if let ActionKind::Buy { always, .. } = &mut self.kind {
            *always = false;
        }
        self
    }

    /// Asserts what an equip or un-equip is expected to displace.
    #[must_use]
    pub fn expecting(mut self, item: impl Into<String>) -> Self {
        match &mut self.kind {
            ActionKind::Equip {
                expected_to_replace,
                ..
            }
            | ActionKind::UnEquip {
                expected_to_replace,
                ..
            } => *expected_to_replace = Some(item.into()),
            _ => {}
        }
        self
    }

    /// Adds a material cost to an upgrade.
    #[must_use]
    pub fn material(mut self, item: impl Into<String>, count: i64) -> Self {
        if let ActionKind::UpgradeItem { materials, .. } = &mut self.kind {
            materials.insert(item.into(), count);
        }
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The kind discriminant and its data.
    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Subject of the step.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Display name: the override if set, else the kind's canonical name.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.kind.name())
    }

    /// Notes attached directly to this step.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}
