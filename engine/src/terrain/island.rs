//! Island Placement
//!
//! Places one square island footprint inside each region:
//! - Random offset from the region center, random yaw
//! - Rotated footprint corners give the world-space bounding extents
//! - Extents that spill over the region edge are pushed back by exactly the
//!   overflow, one pass per axis
//!
//! The correction always succeeds when the footprint diagonal fits the region,
//! which `ArchipelagoConfig::validate` checks before any placement runs.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::physics::collision::{point_in_rotated_square, rotated_square_corners, xz_bounds};
use crate::world::grid::Region;

/// One generated island.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Island {
    /// World-space center; x/z are meaningful, y sits on the ground plane
    pub position: Vec3,
    /// Yaw about the Y axis (radians)
    pub rotation_y: f32,
    /// Set once placement and containment correction have finished
    pub initialized: bool,
    /// World-space pickup positions, in generation order
    pub pickup_positions: Vec<Vec3>,
}

impl Island {
    /// World-space corners of the footprint.
    pub fn corners(&self, half_size: f32) -> [Vec3; 4] {
        rotated_square_corners(self.position, self.rotation_y, half_size)
    }

    /// Axis-aligned (x, z) bounds of the rotated footprint.
    pub fn footprint_bounds(&self, half_size: f32) -> (Vec2, Vec2) {
        xz_bounds(&self.corners(half_size))
    }

    /// Check if a ground-plane point is on the rotated footprint.
    pub fn contains_xz(&self, x: f32, z: f32, half_size: f32) -> bool {
        point_in_rotated_square(Vec3::new(x, 0.0, z), self.position, self.rotation_y, half_size)
    }

    /// Ground-plane distance from the island center.
    pub fn distance_xz(&self, point: Vec3) -> f32 {
        Vec2::new(self.position.x - point.x, self.position.z - point.z).length()
    }
}

/// Sample a random island for `region` and correct it into the region.
///
/// Draws, in order: x offset, z offset, yaw.
pub fn place_island<R: Rng>(rng: &mut R, region: &Region, half_size: f32) -> Island {
    let half = region.half_extent;
    let dx = rng.gen_range(-half..=half);
    let dz = rng.gen_range(-half..=half);
    let rotation_y = rng.gen_range(0.0..TAU);

    let mut island = Island {
        position: region.center + Vec3::new(dx, 0.0, dz),
        rotation_y,
        initialized: false,
        pickup_positions: Vec::new(),
    };

    contain_in_region(&mut island, region, half_size);
    island.initialized = true;
    island
}

/// Nudge an island so its rotated footprint lies inside `region`.
///
/// Each axis is shifted by exactly the amount the footprint overflows, so a
/// single pass is enough. Returns the applied (x, z) shift.
pub fn contain_in_region(island: &mut Island, region: &Region, half_size: f32) -> Vec2 {
    let (min, max) = island.footprint_bounds(half_size);
    let (region_min, region_max) = (region.min(), region.max());

    let shift = Vec2::new(
        axis_shift(min.x, max.x, region_min.x, region_max.x),
        axis_shift(min.y, max.y, region_min.y, region_max.y),
    );

    island.position.x += shift.x;
    island.position.z += shift.y;
    shift
}

/// Shift that moves `[min, max]` inside `[lo, hi]` along one axis.
fn axis_shift(min: f32, max: f32, lo: f32, hi: f32) -> f32 {
    if min < lo {
        lo - min
    } else if max > hi {
        hi - max
    } else {
        0.0
    }
}
