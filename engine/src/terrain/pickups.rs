//! Pickup Scattering
//!
//! Scatters collectible items over an island. Local (x, z) offsets are drawn
//! from the square `[-r, r]²` and rejected until they land in the inscribed
//! circle of radius `r = island_size * pickup_offset_ratio` (acceptance rate
//! about π/4). Each pickup gets a height from a fixed vertical band and is
//! carried into world space by the island's yaw and position.

use glam::Vec3;
use rand::Rng;

use super::island::Island;
use crate::config::ArchipelagoConfig;
use crate::physics::collision::local_to_world;

/// Parameters for scattering pickups over one island.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickupScatter {
    /// Radius of the sampling circle (meters)
    pub radius: f32,
    /// Inclusive pickup count range
    pub count_min: u32,
    pub count_max: u32,
    /// Vertical band (meters above the island)
    pub height_min: f32,
    pub height_max: f32,
    /// Rejection-sampling retries per pickup
    pub max_attempts: u32,
}

impl PickupScatter {
    /// Scatter parameters taken from a configuration.
    pub fn from_config(config: &ArchipelagoConfig) -> Self {
        Self {
            radius: config.pickup_radius(),
            count_min: config.pickup_count_min,
            count_max: config.pickup_count_max,
            height_min: config.pickup_height_min,
            height_max: config.pickup_height_max,
            max_attempts: config.max_pickup_attempts.max(1),
        }
    }

    /// Sample a local (x, z) offset inside the circle.
    ///
    /// Returns `None` once `max_attempts` candidates have all been rejected.
    pub fn sample_offset<R: Rng>(&self, rng: &mut R) -> Option<(f32, f32)> {
        let r = self.radius;
        let r_sq = r * r;
        for _ in 0..self.max_attempts {
            let x = rng.gen_range(-r..=r);
            let z = rng.gen_range(-r..=r);
            if x * x + z * z <= r_sq {
                return Some((x, z));
            }
        }
        None
    }

    /// Sample a height inside the vertical band.
    fn sample_height<R: Rng>(&self, rng: &mut R) -> f32 {
        if self.height_max > self.height_min {
            rng.gen_range(self.height_min..self.height_max)
        } else {
            self.height_min
        }
    }
}

/// Replace an island's pickups with a freshly scattered set.
///
/// Returns how many offsets fell back to the island center after exhausting
/// their retries.
pub fn scatter_pickups<R: Rng>(rng: &mut R, island: &mut Island, scatter: &PickupScatter) -> usize {
    let count = rng.gen_range(scatter.count_min..=scatter.count_max);
    let mut fallbacks = 0;

    island.pickup_positions.clear();
    island.pickup_positions.reserve(count as usize);

    for _ in 0..count {
        let (x, z) = scatter.sample_offset(rng).unwrap_or_else(|| {
            fallbacks += 1;
            (0.0, 0.0)
        });
        let y = scatter.sample_height(rng);
        let world = local_to_world(Vec3::new(x, y, z), island.position, island.rotation_y);
        island.pickup_positions.push(world);
    }

    if fallbacks > 0 {
        log::warn!(
            "{fallbacks} pickup(s) at ({:.1}, {:.1}) fell back to the island center after {} attempts",
            island.position.x,
            island.position.z,
            scatter.max_attempts
        );
    }

    fallbacks
}
