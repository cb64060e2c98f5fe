//! Route structure.
//!
//! A route is a tree: a [`Segment`] holds an ordered list of [`Step`]s, each
//! either a single [`Action`] or a nested segment. Trees are built once by
//! route-definition code and replayed as read-only templates; [`flatten`]
//! prunes false conditions, hoists notes, and yields the flat action list
//! the replay engine folds over.
//!
//! [`flatten`]: Segment::flatten

use crate::action::Action;
use crate::config::ReplayConfig;
use crate::error::ReplayError;
use crate::replay::{self, Trace};
use crate::state::State;

/// One entry in a segment.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    Action(Action),
    Segment(Segment),
}

impl From<Action> for Step {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Segment> for Step {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

/// A named, optionally conditional list of steps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    name: String,
    notes: Vec<String>,
    condition: bool,
    steps: Vec<Step>,
}

impl Segment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: Vec::new(),
            condition: true,
            steps: Vec::new(),
        }
    }

    /// Includes this segment, and everything under it, only when
    /// `condition` holds.
    #[must_use]
    pub fn when(mut self, condition: bool) -> Self {
        self.condition = condition;
        self
    }

    /// Appends a note, surfaced with the flattened route.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Appends a step (builder form).
    #[must_use]
    pub fn add(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Appends a step in place.
    pub fn push(&mut self, step: impl Into<Step>) {
        self.steps.push(step.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flattens the tree into an action list plus hoisted notes.
    ///
    /// Walks depth-first in definition order. A false condition prunes the
    /// whole subtree, notes included. Notes surface in encounter order:
    /// a segment's own notes, then each included step's.
    pub fn flatten(&self) -> Flattened {
        let mut flattened = Flattened::default();
        self.collect_into(&mut flattened);
        flattened
    }

    fn collect_into(&self, flattened: &mut Flattened) {
        if !self.condition {
            return;
        }
        flattened.notes.extend(self.notes.iter().cloned());
        for step in &self.steps {
            match step {
                Step::Action(action) => {
                    if action.condition {
                        flattened.notes.extend(action.notes.iter().cloned());
                        flattened.actions.push(action.clone());
                    }
                }
                Step::Segment(segment) => segment.collect_into(flattened),
            }
        }
    }

    /// Replays this segment from an empty state with default policies.
    pub fn process(&self) -> Result<Trace, ReplayError> {
        self.process_from(State::new())
    }

    /// Replays this segment from a caller-supplied state, so runs can be
    /// chained.
    pub fn process_from(&self, state: State) -> Result<Trace, ReplayError> {
        self.process_with(state, &ReplayConfig::default())
    }

    /// Replays this segment with explicit policies.
    pub fn process_with(
        &self,
        state: State,
        config: &ReplayConfig,
    ) -> Result<Trace, ReplayError> {
        replay::run(&self.flatten().actions, state, config)
    }
}

/// The flat fold input produced from a segment tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flattened {
    /// Included actions in replay order.
    pub actions: Vec<Action>,
    /// Hoisted notes in encounter order.
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;

    #[test]
    fn false_conditions_prune_whole_subtrees() {
        let segment = Segment::new("Undead Burg")
            .add(Action::loot("Soul of a Lost Undead").souls(200))
            .add(
                Segment::new("optional detour")
                    .when(false)
                    .note("never seen")
                    .add(Action::loot("Gold Pine Resin")),
            )
            .add(Action::kill("Undead Merchant", 120).when(false).note("skipped"))
            .add(Action::run_to("Undead Parish"));

        let flattened = segment.flatten();
        let targets: Vec<&str> = flattened
            .actions
            .iter()
            .map(|action| action.target())
            .collect();
        assert_eq!(targets, ["Soul of a Lost Undead", "Undead Parish"]);
        assert_eq!(flattened.notes, Vec::<String>::new());
    }

    #[test]
    fn a_false_root_contributes_nothing() {
        let segment = Segment::new("skipped entirely")
            .when(false)
            .note("root note")
            .add(Action::loot("Humanity"));
        assert_eq!(segment.flatten(), Flattened::default());
    }

    #[test]
    fn notes_surface_in_encounter_order() {
        let segment = Segment::new("outer")
            .note("first")
            .add(Action::run_to("Firelink Shrine").note("second"))
            .add(
                Segment::new("inner")
                    .note("third")
                    .add(Action::run_to("Undead Burg").note("fourth")),
            )
            .add(Action::run_to("Undead Parish").note("fifth"));

        assert_eq!(
            segment.flatten().notes,
            ["first", "second", "third", "fourth", "fifth"]
        );
    }

    #[test]
    fn nested_segments_flatten_depth_first() {
        let segment = Segment::new("outer")
            .add(Action::region("Firelink Shrine"))
            .add(
                Segment::new("inner")
                    .add(Action::bonfire_sit("Firelink Shrine"))
                    .add(Segment::new("innermost").add(Action::loot("Humanity"))),
            )
            .add(Action::run_to("Undead Burg"));

        let flattened = segment.flatten();
        let kinds: Vec<&ActionKind> = flattened.actions.iter().map(Action::kind).collect();
        assert_eq!(
            kinds,
            [
                &ActionKind::Region,
                &ActionKind::BonfireSit,
                &ActionKind::Loot {
                    count: 1,
                    souls: 0,
                    humanities: 0
                },
                &ActionKind::RunTo,
            ]
        );
    }

    #[test]
    fn process_replays_the_flattened_actions() {
        let segment = Segment::new("opening")
            .add(Action::region("Northern Undead Asylum"))
            .add(Action::kill("Asylum Demon", 2000));

        let trace = segment.process().unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.final_state().souls, 2000);
        assert_eq!(trace.error_count(), 0);
    }
}
