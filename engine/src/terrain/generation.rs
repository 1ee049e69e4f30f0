//! Terrain Height Field
//!
//! Closed-form procedural ground: `sin(x·f)·cos(z·f)·a`. Stateless, so it can
//! be sampled from any thread at any time, independent of the island layout.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::ArchipelagoConfig;

/// Parameters of the procedural height field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightField {
    /// Spatial frequency (radians per meter)
    pub frequency: f32,
    /// Peak height (meters)
    pub amplitude: f32,
    /// Sample offset for normal estimation (meters)
    pub normal_delta: f32,
}

impl Default for HeightField {
    fn default() -> Self {
        Self::from_config(&ArchipelagoConfig::default())
    }
}

impl HeightField {
    pub fn from_config(config: &ArchipelagoConfig) -> Self {
        Self {
            frequency: config.height_frequency,
            amplitude: config.height_amplitude,
            normal_delta: config.normal_delta,
        }
    }

    /// Sample the ground height at a world (x, z).
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        (x * self.frequency).sin() * (z * self.frequency).cos() * self.amplitude
    }

    /// Surface normal from four central-difference samples.
    ///
    /// Builds `(h_left - h_right, 2·delta, h_down - h_up)` and normalizes it.
    /// A zero-length result (only possible with a zero delta) falls back to
    /// world-up.
    pub fn normal_at(&self, x: f32, z: f32) -> Vec3 {
        let d = self.normal_delta;
        let h_left = self.height_at(x - d, z);
        let h_right = self.height_at(x + d, z);
        let h_down = self.height_at(x, z - d);
        let h_up = self.height_at(x, z + d);

        Vec3::new(h_left - h_right, 2.0 * d, h_down - h_up).normalize_or(Vec3::Y)
    }
}
