//! Archipelago Configuration
//!
//! Centralized configuration for island layout, pickups, bridges and the
//! procedural height field. `Default` reproduces the fixed layout constants,
//! and the whole struct round-trips through JSON so tools can tweak a layout
//! without touching code.

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::error::ArchipelagoError;

// ============================================================================
// LAYOUT CONSTANTS
// ============================================================================

/// Side length of one square region cell (meters)
pub const REGION_SIZE: f32 = 150.0;

/// Half-size of an island footprint (meters)
pub const ISLAND_SIZE: f32 = 50.0;

/// Radius of the pickup sampling circle as a fraction of `ISLAND_SIZE`
pub const PICKUP_OFFSET_RATIO: f32 = 0.8;

/// Width of a bridge walkway (meters)
pub const BRIDGE_WIDTH: f32 = 5.0;

/// Height of the bridge deck above the averaged ground at its ends
pub const BRIDGE_DECK_OFFSET: f32 = 0.5;

/// Radius of a single pickup for collection tests
pub const PICKUP_COLLISION_RADIUS: f32 = 2.0;

/// Rejection-sampling retries per pickup before falling back to the island center
pub const MAX_PICKUP_ATTEMPTS: u32 = 32;

// A footprint rotated by 45 degrees spans its full diagonal; it must still fit.
const_assert!(2.0 * ISLAND_SIZE * std::f32::consts::SQRT_2 <= REGION_SIZE);
const_assert!(PICKUP_OFFSET_RATIO > 0.0 && PICKUP_OFFSET_RATIO <= 1.0);

/// Configuration for one archipelago generator.
///
/// Every generation pass calls [`ArchipelagoConfig::validate`] first, so an
/// island footprint that cannot fit its region fails fast instead of
/// producing overlapping islands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchipelagoConfig {
    /// Side length of each region cell (meters)
    pub region_size: f32,
    /// Half-size of each island footprint (meters)
    pub island_size: f32,
    /// Pickup sampling radius = `island_size * pickup_offset_ratio`
    pub pickup_offset_ratio: f32,
    /// Minimum pickups per island (inclusive)
    pub pickup_count_min: u32,
    /// Maximum pickups per island (inclusive)
    pub pickup_count_max: u32,
    /// Lowest pickup height above the island surface
    pub pickup_height_min: f32,
    /// Highest pickup height above the island surface
    pub pickup_height_max: f32,
    /// Rejection-sampling retries per pickup
    pub max_pickup_attempts: u32,
    /// Radius of a pickup for collection tests
    pub pickup_collision_radius: f32,
    /// Width of a bridge walkway (meters)
    pub bridge_width: f32,
    /// Deck height above the averaged ground at the bridge ends
    pub bridge_deck_offset: f32,
    /// Height field frequency (radians per meter)
    pub height_frequency: f32,
    /// Height field amplitude (meters)
    pub height_amplitude: f32,
    /// Central-difference offset for normal estimation
    pub normal_delta: f32,
    /// Fixed seed for reproducible layouts; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for ArchipelagoConfig {
    fn default() -> Self {
        Self {
            region_size: REGION_SIZE,
            island_size: ISLAND_SIZE,
            pickup_offset_ratio: PICKUP_OFFSET_RATIO,
            pickup_count_min: 1,
            pickup_count_max: 3,
            pickup_height_min: 1.0,
            pickup_height_max: 3.0,
            max_pickup_attempts: MAX_PICKUP_ATTEMPTS,
            pickup_collision_radius: PICKUP_COLLISION_RADIUS,
            bridge_width: BRIDGE_WIDTH,
            bridge_deck_offset: BRIDGE_DECK_OFFSET,
            height_frequency: 0.05,
            height_amplitude: 2.0,
            normal_delta: 0.1,
            seed: None,
        }
    }
}

impl ArchipelagoConfig {
    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Radius of the circle pickups are sampled in.
    pub fn pickup_radius(&self) -> f32 {
        self.island_size * self.pickup_offset_ratio
    }

    /// Full diagonal of a footprint, i.e. its widest extent under any yaw.
    pub fn island_diagonal(&self) -> f32 {
        2.0 * self.island_size * std::f32::consts::SQRT_2
    }

    /// Check every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<(), ArchipelagoError> {
        positive("region_size", self.region_size)?;
        positive("island_size", self.island_size)?;
        positive("bridge_width", self.bridge_width)?;
        positive("normal_delta", self.normal_delta)?;
        positive("pickup_collision_radius", self.pickup_collision_radius)?;
        finite("bridge_deck_offset", self.bridge_deck_offset)?;
        finite("height_frequency", self.height_frequency)?;
        finite("height_amplitude", self.height_amplitude)?;

        if !(self.pickup_offset_ratio > 0.0 && self.pickup_offset_ratio <= 1.0) {
            return Err(ArchipelagoError::InvalidParameter {
                name: "pickup_offset_ratio",
                reason: format!("{} is outside (0, 1]", self.pickup_offset_ratio),
            });
        }
        if self.pickup_count_min == 0 {
            return Err(ArchipelagoError::InvalidParameter {
                name: "pickup_count_min",
                reason: "every island needs at least one pickup".to_string(),
            });
        }
        if self.pickup_count_min > self.pickup_count_max {
            return Err(ArchipelagoError::InvalidParameter {
                name: "pickup_count_min",
                reason: format!(
                    "{} exceeds pickup_count_max {}",
                    self.pickup_count_min, self.pickup_count_max
                ),
            });
        }
        finite("pickup_height_min", self.pickup_height_min)?;
        finite("pickup_height_max", self.pickup_height_max)?;
        if self.pickup_height_min > self.pickup_height_max {
            return Err(ArchipelagoError::InvalidParameter {
                name: "pickup_height_min",
                reason: format!(
                    "{} exceeds pickup_height_max {}",
                    self.pickup_height_min, self.pickup_height_max
                ),
            });
        }
        if self.max_pickup_attempts == 0 {
            return Err(ArchipelagoError::InvalidParameter {
                name: "max_pickup_attempts",
                reason: "must allow at least one attempt".to_string(),
            });
        }

        let diagonal = self.island_diagonal();
        if diagonal > self.region_size {
            return Err(ArchipelagoError::IslandExceedsRegion {
                island_diagonal: diagonal,
                region_size: self.region_size,
            });
        }

        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ArchipelagoError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ArchipelagoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ArchipelagoError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ArchipelagoError::InvalidParameter {
            name,
            reason: format!("{value} is not finite"),
        })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ArchipelagoError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ArchipelagoError::InvalidParameter {
            name,
            reason: format!("{value} must be greater than zero"),
        })
    }
}
