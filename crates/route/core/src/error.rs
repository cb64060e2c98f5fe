//! Hard-failure errors for route replay.
//!
//! Route inconsistencies come in two tiers. Soft errors (negative balances,
//! mismatched item values, bonfire region conflicts) are collected on
//! [`State`](crate::state::State) and surface as synthetic error events so a
//! broken route still renders end to end. `ReplayError` is the other tier:
//! defects that leave no sensible state to continue from abort the whole
//! `process` call.

use thiserror::Error;

/// Unrecoverable replay failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplayError {
    /// A warp referenced a bonfire that has never been sat at, so there is
    /// no region to arrive in.
    #[error("unknown bonfire \"{bonfire}\"")]
    UnknownBonfire { bonfire: String },
}

impl ReplayError {
    /// Creates an [`ReplayError::UnknownBonfire`] for the given bonfire name.
    pub fn unknown_bonfire(bonfire: impl Into<String>) -> Self {
        Self::UnknownBonfire {
            bonfire: bonfire.into(),
        }
    }
}
