//! The applied form of an action.

use super::{Action, ActionKind};

/// What actually happened when an [`Action`] was applied.
///
/// The template stays untouched; everything the application derived lives
/// here: displaced equipment, targets resolved against state, and the
/// effective count after clamping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub(crate) action: Action,
    /// Item displaced out of the slot by an equip.
    pub(crate) replaces: Option<String>,
    /// Target resolved against state: the un-equipped item, or a warp
    /// destination region.
    pub(crate) resolved_target: Option<String>,
    /// Effective count after clamping or top-up arithmetic.
    pub(crate) count: i64,
    /// Whether the step shows up as a report row.
    pub(crate) output: bool,
}

impl Record {
    pub(crate) fn new(action: Action) -> Self {
        let output = action.output;
        Self {
            action,
            replaces: None,
            resolved_target: None,
            count: 1,
            output,
        }
    }

    /// The template this record was applied from.
    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn kind(&self) -> &ActionKind {
        &self.action.kind
    }

    pub fn target(&self) -> &str {
        &self.action.target
    }

    /// Display name of the step.
    pub fn name(&self) -> &str {
        self.action.name()
    }

    /// Human line for the step row.
    ///
    /// Equipment changes show the slot and any displaced item, upgrades show
    /// the result, and counted steps show `Nx target` when the effective
    /// count isn't one.
    pub fn display(&self) -> String {
        match &self.action.kind {
            ActionKind::Equip { slot, .. } => match &self.replaces {
                Some(replaced) if *replaced != self.action.target => {
                    format!(
                        "{} ({slot}), replacing {replaced}",
                        self.action.target
                    )
                }
                _ => format!("{} ({slot})", self.action.target),
            },
            ActionKind::UnEquip { slot, .. } => match &self.resolved_target {
                Some(item) => format!("{item} ({slot})"),
                None => slot.clone(),
            },
            ActionKind::UpgradeItem { result, .. } => {
                format!("{} to {result}", self.action.target)
            }
            _ if self.count != 1 => format!("{}x {}", self.count, self.action.target),
            _ => self.action.target.clone(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.action.detail
    }

    pub fn optional(&self) -> bool {
        self.action.optional
    }

    /// Whether the step shows up as a report row.
    pub fn output(&self) -> bool {
        self.output
    }

    /// True for synthetic soft-error steps.
    pub fn is_error(&self) -> bool {
        matches!(self.action.kind, ActionKind::Error)
    }

    /// Effective count after clamping or top-up arithmetic.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// Item displaced out of the slot by an equip.
    pub fn replaces(&self) -> Option<&str> {
        self.replaces.as_deref()
    }

    /// State-resolved target, where the kind has one.
    pub fn resolved_target(&self) -> Option<&str> {
        self.resolved_target.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_display_shows_the_slot() {
        let record = Record::new(Action::equip("Hand Axe", "Right Hand"));
        assert_eq!(record.display(), "Hand Axe (Right Hand)");
    }

    #[test]
    fn equip_display_names_a_displaced_item() {
        let mut record = Record::new(Action::equip("Reinforced Club", "Right Hand"));
        record.replaces = Some("Hand Axe".to_owned());
        assert_eq!(
            record.display(),
            "Reinforced Club (Right Hand), replacing Hand Axe"
        );
    }

    #[test]
    fn reequipping_the_same_item_does_not_mention_itself() {
        let mut record = Record::new(Action::equip("Hand Axe", "Right Hand"));
        record.replaces = Some("Hand Axe".to_owned());
        assert_eq!(record.display(), "Hand Axe (Right Hand)");
    }

    #[test]
    fn unequip_display_prefers_the_resolved_item() {
        let mut resolved = Record::new(Action::unequip("Right Hand"));
        resolved.resolved_target = Some("Hand Axe".to_owned());
        assert_eq!(resolved.display(), "Hand Axe (Right Hand)");

        let empty = Record::new(Action::unequip("Right Hand"));
        assert_eq!(empty.display(), "Right Hand");
    }

    #[test]
    fn upgrade_display_names_the_result() {
        let record = Record::new(Action::upgrade_item("Hand Axe", "Hand Axe +5"));
        assert_eq!(record.display(), "Hand Axe to Hand Axe +5");
    }

    #[test]
    fn counted_display_prefixes_the_effective_count() {
        let mut record = Record::new(Action::loot("Titanite Shard").count(3));
        record.count = 3;
        assert_eq!(record.display(), "3x Titanite Shard");

        record.count = 1;
        assert_eq!(record.display(), "Titanite Shard");
    }
}
