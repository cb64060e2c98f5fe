//! Closed set of action kinds.

use std::collections::BTreeMap;

/// Discriminates every step the replay engine knows how to apply.
///
/// Kinds that move numbers carry their own data. The narrative kinds are
/// unit variants with no mutation rule; they exist to appear in the rendered
/// trace with free text. The variant name doubles as the canonical display
/// name; same-behavior renames (AutoBonfire, Receive, ...) are a display
/// override on the action, not extra variants.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Moves to a named region. Reports render these as section dividers,
    /// not step rows.
    Region,
    /// Sits at a bonfire, binding it to the current region on first sit.
    BonfireSit,
    /// Warps to the region of a previously sat bonfire.
    WarpTo,
    /// Puts the target item into an equipment slot.
    Equip {
        slot: String,
        expected_to_replace: Option<String>,
    },
    /// Clears an equipment slot.
    UnEquip {
        slot: String,
        expected_to_replace: Option<String>,
    },
    /// Grants items, banking their per-unit soul/humanity value.
    Loot {
        count: i64,
        souls: i64,
        humanities: i64,
    },
    /// Consumes items from the inventory menu.
    UseMenu { count: i64, allow_partial: bool },
    /// Consumes one item that must currently be equipped.
    Use,
    /// Awards souls for kills.
    Kill { count: i64, souls: i64 },
    /// Spends souls on items. With `always` off, only tops up to `count`.
    Buy { count: i64, souls: i64, always: bool },
    /// Turns the target item into `result` for souls and materials.
    UpgradeItem {
        result: String,
        souls: i64,
        materials: BTreeMap<String, i64>,
    },

    // Narrative steps. No mutation, display only.
    RunTo,
    WaitFor,
    Perform,
    Activate,
    TalkTo,
    Heal,
    FallDamage,
    Jump,

    /// Synthesized by the replay engine to surface a soft error inline.
    /// The message travels in the action's target.
    Error,
}

impl ActionKind {
    /// Canonical display name, e.g. `BonfireSit`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// True for the display-only kinds with no mutation rule.
    pub fn is_narrative(&self) -> bool {
        matches!(
            self,
            Self::RunTo
                | Self::WaitFor
                | Self::Perform
                | Self::Activate
                | Self::TalkTo
                | Self::Heal
                | Self::FallDamage
                | Self::Jump
        )
    }
}
