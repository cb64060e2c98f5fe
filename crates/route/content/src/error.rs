//! Errors raised while assembling routes from their options.

use thiserror::Error;

/// A route definition asked for something its options cannot satisfy.
///
/// These fire at assembly time, before any replay happens. A shipped route
/// that returns one is a defect in the route definition itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentError {
    /// Shard-path reinforcement stops at +5.
    #[error("initial upgrade +{level} is outside 0..=5")]
    UpgradeLevelOutOfRange { level: i64 },

    /// A run name was requested that the options never defined.
    #[error("unknown run variation \"{name}\"")]
    UnknownRun { name: String },
}

impl ContentError {
    pub(crate) fn upgrade_level_out_of_range(level: i64) -> Self {
        Self::UpgradeLevelOutOfRange { level }
    }

    pub(crate) fn unknown_run(name: impl Into<String>) -> Self {
        Self::UnknownRun { name: name.into() }
    }
}
