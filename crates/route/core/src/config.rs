//! Replay policy configuration.
//!
//! Earlier revisions of the planner hard-coded stricter behaviors: the
//! balance scan ran only once at the end of a run, and using more items than
//! held was rejected outright. Those behaviors live on here as explicit
//! policies so routes can still be checked the way they were written, while
//! `Default` matches current route semantics.

/// When the negative-balance scan runs during replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverdraftTiming {
    /// Scan after every action. Each deficit surfaces as an error event
    /// immediately after the action that introduced it.
    #[default]
    EveryAction,

    /// Scan once after the last action. Only deficits still present at the
    /// end of the run are reported; transient ones pass silently.
    EndOfRun,
}

/// How a menu use behaves when fewer items are held than requested.
///
/// Applies only to actions that opted into partial use; without the opt-in
/// the full requested count is consumed and any shortfall shows up as a
/// negative balance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartialUsePolicy {
    /// Silently clamp the count to what is held.
    #[default]
    Clamp,

    /// Clamp, but also record a soft error naming the shortfall.
    Report,
}

/// Tunable replay policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayConfig {
    pub overdraft_timing: OverdraftTiming,
    pub partial_use: PartialUsePolicy,
}

impl ReplayConfig {
    /// Policies matching current route semantics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets when the negative-balance scan runs (builder pattern).
    #[must_use]
    pub fn overdraft_timing(mut self, timing: OverdraftTiming) -> Self {
        self.overdraft_timing = timing;
        self
    }

    /// Sets the partial-use policy (builder pattern).
    #[must_use]
    pub fn partial_use(mut self, policy: PartialUsePolicy) -> Self {
        self.partial_use = policy;
        self
    }
}
