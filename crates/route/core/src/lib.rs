//! Deterministic route replay logic and data types shared across tools.
//!
//! `route-core` defines the canonical rules (actions, state, replay) and
//! exposes pure APIs that can be reused by both the report renderer and
//! offline tools. All state mutation flows through [`Segment`] processing,
//! and supporting crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod error;
pub mod items;
pub mod replay;
pub mod segment;
pub mod state;

pub use action::{Action, ActionKind, Record};
pub use config::{OverdraftTiming, PartialUsePolicy, ReplayConfig};
pub use error::ReplayError;
pub use replay::{Event, Trace};
pub use segment::{Flattened, Segment, Step};
pub use state::State;
