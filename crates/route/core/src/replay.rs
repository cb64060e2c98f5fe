//! The replay fold and its materialized trace.
//!
//! Replay is a pure left-to-right fold of a flattened action list over one
//! [`State`]. The result is a [`Trace`]: an owned, finite list of events
//! that can be walked any number of times. Consumers diff consecutive
//! snapshots, so every event owns an independent copy of the state as it
//! stood right after its record.

use crate::action::{Action, Record};
use crate::config::{OverdraftTiming, ReplayConfig};
use crate::error::ReplayError;
use crate::state::State;

/// One applied step and the state immediately after it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Snapshot taken right after the record was applied. Independent of
    /// every other snapshot; later events never mutate it.
    pub state: State,
    pub record: Record,
}

/// A completed replay.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    events: Vec<Event>,
    final_state: State,
}

impl Trace {
    /// Events in replay order, soft-error events inline.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// State after the last event.
    pub fn final_state(&self) -> &State {
        &self.final_state
    }

    /// Total soft errors surfaced during the replay.
    pub fn error_count(&self) -> u64 {
        self.final_state.error_count()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Folds `actions` over `state`, materializing the full trace.
///
/// After each action, pending soft errors are drained into synthetic
/// error events directly behind the action's own event (or once at the
/// end, under [`OverdraftTiming::EndOfRun`]). A hard failure aborts the
/// whole replay; there is no partial trace.
pub(crate) fn run(
    actions: &[Action],
    mut state: State,
    config: &ReplayConfig,
) -> Result<Trace, ReplayError> {
    let mut events = Vec::with_capacity(actions.len());
    for action in actions {
        let record = action.apply(&mut state, config)?;
        events.push(Event {
            state: state.clone(),
            record,
        });
        if config.overdraft_timing == OverdraftTiming::EveryAction {
            drain_errors(&mut state, &mut events);
        }
    }
    if config.overdraft_timing == OverdraftTiming::EndOfRun {
        drain_errors(&mut state, &mut events);
    }
    Ok(Trace {
        events,
        final_state: state,
    })
}

fn drain_errors(state: &mut State, events: &mut Vec<Event>) {
    for message in state.errors() {
        events.push(Event {
            state: state.clone(),
            record: Record::new(Action::error(message)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    #[test]
    fn events_snapshot_the_state_after_each_action() {
        let trace = Segment::new("snapshots")
            .add(Action::kill("Asylum Demon", 2000))
            .add(Action::kill("Taurus Demon", 3000))
            .process()
            .unwrap();

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.events()[0].state.souls, 2000);
        assert_eq!(trace.events()[1].state.souls, 5000);
        assert_eq!(trace.final_state().souls, 5000);
    }

    #[test]
    fn soft_errors_follow_their_action_immediately() {
        let trace = Segment::new("overspend")
            .add(Action::buy("Homeward Bone", 500))
            .add(Action::kill("Taurus Demon", 3000))
            .process()
            .unwrap();

        let names: Vec<&str> = trace.iter().map(|event| event.record.name()).collect();
        assert_eq!(names, ["Buy", "Error", "Kill"]);

        let error = &trace.events()[1];
        assert!(error.record.is_error());
        assert_eq!(error.record.target(), "insufficient amount: souls(-500)");
        assert_eq!(error.state.souls, -500);
        assert_eq!(trace.error_count(), 1);
    }

    #[test]
    fn end_of_run_timing_misses_transient_deficits() {
        let segment = Segment::new("dip below zero")
            .add(Action::buy("Homeward Bone", 500))
            .add(Action::kill("Bell Gargoyles", 10000));

        let eager = segment.process().unwrap();
        assert_eq!(eager.error_count(), 1);

        let deferred = segment
            .process_with(
                State::new(),
                &ReplayConfig::new().overdraft_timing(OverdraftTiming::EndOfRun),
            )
            .unwrap();
        assert_eq!(deferred.error_count(), 0);
        assert!(deferred.iter().all(|event| !event.record.is_error()));
    }

    #[test]
    fn replaying_one_template_twice_gives_identical_traces() {
        let segment = Segment::new("repeatable")
            .add(Action::region("Firelink Shrine"))
            .add(Action::bonfire_sit("Firelink Shrine"))
            .add(Action::loot("Humanity").count(3).humanities(1))
            .add(Action::equip("Humanity", "Item 2"))
            .add(Action::use_menu("Humanity").count(3));

        let first = segment.process().unwrap();
        let second = segment.process().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.final_state().humanity, 3);
        assert!(!first.final_state().is_equipped("Humanity"));
    }

    #[test]
    fn a_hard_failure_yields_no_partial_trace() {
        let result = Segment::new("broken warp")
            .add(Action::kill("Asylum Demon", 2000))
            .add(Action::warp_to("Firelink Shrine"))
            .process();
        assert_eq!(
            result,
            Err(ReplayError::unknown_bonfire("Firelink Shrine"))
        );
    }
}
