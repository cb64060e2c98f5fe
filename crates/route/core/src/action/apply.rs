//! Mutation rules, one per action kind.
//!
//! Application is the only place run state changes. Each rule reads the
//! immutable template, mutates the [`State`], and stores everything it
//! derived on the returned [`Record`]. Soft errors are queued on the state
//! for the replay loop to drain; only an unknown warp destination is a hard
//! failure.

use super::{Action, ActionKind, Record};
use crate::config::{PartialUsePolicy, ReplayConfig};
use crate::error::ReplayError;
use crate::items;
use crate::state::State;

impl Action {
    /// Applies this template against `state`, returning the applied record.
    pub(crate) fn apply(
        &self,
        state: &mut State,
        config: &ReplayConfig,
    ) -> Result<Record, ReplayError> {
        let mut record = Record::new(self.clone());

        match &self.kind {
            ActionKind::Region => {
                state.region = self.target.clone();
            }

            ActionKind::BonfireSit => {
                state.sit_at_bonfire(&self.target);
            }

            ActionKind::WarpTo => {
                record.resolved_target = Some(state.warp_through(&self.target)?);
            }

            ActionKind::Equip {
                slot,
                expected_to_replace,
            } => {
                let displaced = state.equipped(slot).map(str::to_owned);
                check_expected(state, expected_to_replace.as_deref(), displaced.as_deref(), slot);
                let held = state.item_count(&self.target);
                if held <= 0 {
                    state.push_error(format!("not in inventory: {}({held})", self.target));
                }
                state.equip(slot, &self.target);
                record.replaces = displaced;
            }

            ActionKind::UnEquip {
                slot,
                expected_to_replace,
            } => {
                let removed = state.unequip(slot);
                check_expected(state, expected_to_replace.as_deref(), removed.as_deref(), slot);
                record.resolved_target = removed;
            }

            ActionKind::Loot {
                count,
                souls,
                humanities,
            } => {
                let soul_value = state.soul_value(&self.target, *souls);
                let humanity_value = state.humanity_value(&self.target, *humanities);
                state.add_item(&self.target, *count);
                state.item_souls += soul_value * count;
                state.item_humanities += humanity_value * count;
                record.count = *count;
                record.output &= *count != 0;
            }

            ActionKind::UseMenu {
                count,
                allow_partial,
            } => {
                let consumed = consume(
                    state,
                    config,
                    &self.target,
                    *count,
                    *allow_partial,
                    Warp::AtBonfire,
                )?;
                record.count = consumed.count;
                record.resolved_target = consumed.destination;
                record.output &= consumed.count != 0;
            }

            ActionKind::Use => {
                if !state.is_equipped(&self.target) {
                    state.push_error(format!("not equipped: {}", self.target));
                }
                let consumed = consume(state, config, &self.target, 1, false, Warp::AtBonfire)?;
                record.resolved_target = consumed.destination;
            }

            ActionKind::Kill { count, souls } => {
                state.souls += souls * count;
                record.count = *count;
            }

            ActionKind::Buy {
                count,
                souls,
                always,
            } => {
                let bought = if *always {
                    *count
                } else {
                    (*count - state.item_count(&self.target)).max(0)
                };
                state.souls -= souls * bought;
                state.add_item(&self.target, bought);
                record.count = bought;
                record.output &= bought != 0;
            }

            ActionKind::UpgradeItem {
                result,
                souls,
                materials,
            } => {
                state.souls -= souls;
                for (material, count) in materials {
                    consume(state, config, material, *count, false, Warp::Disabled)?;
                }
                state.add_item(&self.target, -1);
                state.add_item(result, 1);
                if let Some(slot) = state.remove_equipment(&self.target) {
                    state.equip(&slot, result);
                }
            }

            ActionKind::RunTo
            | ActionKind::WaitFor
            | ActionKind::Perform
            | ActionKind::Activate
            | ActionKind::TalkTo
            | ActionKind::Heal
            | ActionKind::FallDamage
            | ActionKind::Jump
            | ActionKind::Error => {}
        }

        Ok(record)
    }
}

/// Whether a consumption may trigger the return-item warp.
///
/// Upgrade materials are consumed through the same path as menu uses but
/// must never move the player.
enum Warp {
    AtBonfire,
    Disabled,
}

struct Consumed {
    count: i64,
    destination: Option<String>,
}

/// Removes `requested` of `item`, converting its banked value to spendable.
///
/// The respawn item is special-cased: it zeroes both spendable currencies,
/// warps, and is not consumed. The return item warps to the current
/// bonfire's region when at least one was actually consumed.
fn consume(
    state: &mut State,
    config: &ReplayConfig,
    item: &str,
    requested: i64,
    allow_partial: bool,
    warp: Warp,
) -> Result<Consumed, ReplayError> {
    if item == items::DARKSIGN {
        let destination = match warp {
            Warp::AtBonfire => {
                let bonfire = state.bonfire.clone();
                Some(state.warp_through(&bonfire)?)
            }
            Warp::Disabled => None,
        };
        state.souls = 0;
        state.humanity = 0;
        return Ok(Consumed {
            count: requested,
            destination,
        });
    }

    let held = state.item_count(item);
    let count = if allow_partial {
        let clamped = requested.min(held.max(0));
        if clamped < requested && config.partial_use == PartialUsePolicy::Report {
            state.push_error(format!("partial use: {item}({held} of {requested})"));
        }
        clamped
    } else {
        requested
    };

    let soul_value = state.soul_value(item, 0);
    let humanity_value = state.humanity_value(item, 0);

    state.add_item(item, -count);
    state.souls += soul_value * count;
    state.item_souls -= soul_value * count;
    state.humanity += humanity_value * count;
    state.item_humanities -= humanity_value * count;

    if count > 0 && state.item_count(item) <= 0 {
        state.remove_equipment(item);
    }

    let destination = match warp {
        Warp::AtBonfire if item == items::BONE && count > 0 => {
            let bonfire = state.bonfire.clone();
            Some(state.warp_through(&bonfire)?)
        }
        _ => None,
    };

    Ok(Consumed { count, destination })
}

fn check_expected(state: &mut State, expected: Option<&str>, found: Option<&str>, slot: &str) {
    let Some(expected) = expected else { return };
    let found = found.unwrap_or("");
    if expected != found {
        state.push_error(format!(
            "expected to replace \"{expected}\" in slot \"{slot}\" but found \"{found}\""
        ));
    }
}
