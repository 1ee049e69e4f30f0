//! Terrain Module
//!
//! Procedural island layout: placement, pickups, the bridge network and the
//! ground height field.

pub mod bridge;
pub mod generation;
pub mod island;
pub mod pickups;

pub use bridge::{Bridge, BridgeSpan, build_bridges, is_point_on_bridge};
pub use generation::HeightField;
pub use island::{Island, contain_in_region, place_island};
pub use pickups::{PickupScatter, scatter_pickups};
