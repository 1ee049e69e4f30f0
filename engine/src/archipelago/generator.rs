//! Island Generator
//!
//! Runs a full generation pass: region grid → island placement → pickup
//! scattering (per island) → bridge network. Each pass builds a brand new
//! [`Archipelago`]; nothing from the previous layout carries over.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::Archipelago;
use crate::config::ArchipelagoConfig;
use crate::error::ArchipelagoError;
use crate::terrain::{PickupScatter, build_bridges, place_island, scatter_pickups};
use crate::world::{RegionGrid, rng_from_option};

/// Owns the configuration and the random source for layout generation.
///
/// The RNG is never shared; two generators built from the same seed produce
/// identical layouts. Any `rand::Rng` can be injected with
/// [`IslandGenerator::with_rng`].
#[derive(Debug)]
pub struct IslandGenerator<R = ChaCha8Rng> {
    config: ArchipelagoConfig,
    rng: R,
}

impl IslandGenerator<ChaCha8Rng> {
    /// Generator seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: ArchipelagoConfig) -> Result<Self, ArchipelagoError> {
        let rng = rng_from_option(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> IslandGenerator<R> {
    /// Generator drawing from a caller-supplied RNG. `config.seed` is ignored.
    pub fn with_rng(config: ArchipelagoConfig, rng: R) -> Result<Self, ArchipelagoError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &ArchipelagoConfig {
        &self.config
    }

    /// Generate a complete layout with `island_count` islands.
    ///
    /// Fails only on an invalid configuration; zero or one island is a valid
    /// layout with no bridges.
    pub fn generate(&mut self, island_count: usize) -> Result<Archipelago, ArchipelagoError> {
        self.config.validate()?;

        let grid = RegionGrid::new(island_count, self.config.region_size);
        let scatter = PickupScatter::from_config(&self.config);
        let half_size = self.config.island_size;

        let mut islands = Vec::with_capacity(island_count);
        let mut fallbacks = 0;
        for (index, region) in grid.regions.iter().enumerate() {
            let mut island = place_island(&mut self.rng, region, half_size);
            fallbacks += scatter_pickups(&mut self.rng, &mut island, &scatter);
            log::debug!(
                "Island {index}: ({:.1}, {:.1}) yaw {:.2} rad, {} pickups",
                island.position.x,
                island.position.z,
                island.rotation_y,
                island.pickup_positions.len()
            );
            islands.push(island);
        }

        let bridges = build_bridges(&islands);

        let archipelago = Archipelago::new(self.config.clone(), grid, islands, bridges);
        log::info!(
            "Generated {} islands in a {}x{} grid, {} bridges, {} pickups ({} center fallbacks)",
            archipelago.island_count(),
            archipelago.regions().cols,
            archipelago.regions().rows,
            archipelago.bridges().len(),
            archipelago.pickup_count(),
            fallbacks
        );

        Ok(archipelago)
    }

    /// Ground-plane position (y = 0) of a uniformly chosen island.
    ///
    /// Returns the origin when the layout has no islands.
    pub fn random_island_position(&mut self, archipelago: &Archipelago) -> Vec3 {
        let islands = archipelago.islands();
        if islands.is_empty() {
            return Vec3::ZERO;
        }
        let island = &islands[self.rng.gen_range(0..islands.len())];
        Vec3::new(island.position.x, 0.0, island.position.z)
    }
}
