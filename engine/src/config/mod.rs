//! Config Module
//!
//! Centralized configuration for archipelago layout and gameplay parameters.

pub mod archipelago_config;

pub use archipelago_config::{
    ArchipelagoConfig, BRIDGE_DECK_OFFSET, BRIDGE_WIDTH, ISLAND_SIZE, MAX_PICKUP_ATTEMPTS,
    PICKUP_COLLISION_RADIUS, PICKUP_OFFSET_RATIO, REGION_SIZE,
};
