//! Route definitions and the shipped route list.

pub mod sl1_rangeless_hitless;

pub use sl1_rangeless_hitless::{
    EquipmentOptions, HumanityOptions, Options, RunOptions, RunType,
};

use route_core::Segment;

use crate::damage::{DamageTable, HitLookup};
use crate::error::ContentError;

/// A fully assembled route: a replayable segment tree plus the damage
/// reference material rendered alongside its step table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub name: String,
    pub segment: Segment,
    pub damage_tables: Vec<DamageTable>,
    pub hit_lookup: HitLookup,
}

/// Every shipped route, in the order the index lists them.
pub fn all_routes() -> Result<Vec<Route>, ContentError> {
    sl1_rangeless_hitless::routes()
}
