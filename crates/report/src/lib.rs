//! Route Report - HTML rendering for replayed routes.
//!
//! Takes the trace a [`route_core::Segment`] replay produces and renders it
//! as a running-totals table, alongside the route's notes and damage
//! reference tables. [`page`] wraps a rendered body with an embedded
//! stylesheet and re-indents the whole thing for readable output files.

pub mod page;
pub mod pretty;
pub mod render;

pub use page::{Style, page};
pub use pretty::prettify;
pub use render::{damage_table, notes_list, render_route, steps_table};
