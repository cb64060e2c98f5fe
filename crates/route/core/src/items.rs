//! Item names the replay rules treat specially.
//!
//! Items are free-form strings owned by route content; the replay model only
//! needs to recognize the two warp consumables. The remaining constants exist
//! so route modules and tests spell multi-use names consistently.

/// Return item. Using one warps to the current bonfire's region and consumes
/// the item.
pub const BONE: &str = "Homeward Bone";

/// Respawn item. Using it warps like [`BONE`] but also forfeits all held
/// souls and humanity. The item itself is kept.
pub const DARKSIGN: &str = "Darksign";

/// Consumable worth one humanity.
pub const HUMANITY: &str = "Humanity";

/// Consumable worth two humanity.
pub const TWIN_HUMANITIES: &str = "Twin Humanities";

/// Standard weapon reinforcement material.
pub const TITANITE_SHARD: &str = "Titanite Shard";

/// Reinforcement material for unique weapons.
pub const TWINKLING_TITANITE: &str = "Twinkling Titanite";
