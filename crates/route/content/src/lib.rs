//! Route Content - the shipped SL1 routes and their damage reference data.
//!
//! `route-core` knows how to replay a segment tree; this crate holds the
//! trees worth replaying. Each route definition pairs a [`Segment`] with the
//! damage tables rendered alongside it, and [`all_routes`] returns every
//! shipped variation in index order.
//!
//! [`Segment`]: route_core::Segment

pub mod damage;
pub mod error;
pub mod routes;
pub mod sl1;

pub use damage::{DamageTable, Enemy, Form, Hit, HitLookup, HitType};
pub use error::ContentError;
pub use routes::{Route, all_routes};
