//! Archipelago Module
//!
//! A generated island layout and the spatial queries gameplay code runs
//! against it every frame.
//!
//! - [`IslandGenerator`] owns the random source and builds layouts
//! - [`Archipelago`] is one finished layout: islands, bridges, regions, plus
//!   the ground queries (`is_on_island`, `on_bridge`, `height`, `normal`)
//! - [`SharedArchipelago`] publishes layouts to concurrent readers by swapping
//!   an `Arc`, so a reader never sees half of an old layout and half of a new one
//!
//! Queries are linear scans over islands and bridges; fine for tens of
//! islands.

pub mod generator;
pub mod shared;

pub use generator::IslandGenerator;
pub use shared::SharedArchipelago;

use glam::{Vec2, Vec3};

use crate::config::ArchipelagoConfig;
use crate::physics::collision::spheres_touch;
use crate::terrain::{Bridge, BridgeSpan, HeightField, Island, is_point_on_bridge};
use crate::world::RegionGrid;

/// One complete generated layout.
///
/// Built in a single pass by [`IslandGenerator::generate`] and never
/// partially updated afterwards, apart from pickups being collected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Archipelago {
    config: ArchipelagoConfig,
    grid: RegionGrid,
    islands: Vec<Island>,
    bridges: Vec<Bridge>,
    height_field: HeightField,
}

impl Archipelago {
    pub(crate) fn new(
        config: ArchipelagoConfig,
        grid: RegionGrid,
        islands: Vec<Island>,
        bridges: Vec<Bridge>,
    ) -> Self {
        let height_field = HeightField::from_config(&config);
        Self {
            config,
            grid,
            islands,
            bridges,
            height_field,
        }
    }

    /// A layout with no islands. Every query answers "not found".
    pub fn empty(config: ArchipelagoConfig) -> Self {
        Self::new(config, RegionGrid::default(), Vec::new(), Vec::new())
    }

    pub fn config(&self) -> &ArchipelagoConfig {
        &self.config
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    pub fn bridges(&self) -> &[Bridge] {
        &self.bridges
    }

    /// Region cells, indexed like the islands.
    pub fn regions(&self) -> &RegionGrid {
        &self.grid
    }

    pub fn height_field(&self) -> &HeightField {
        &self.height_field
    }

    pub fn island_count(&self) -> usize {
        self.islands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    // ========================================================================
    // GROUND QUERIES
    // ========================================================================

    /// Index of the first island whose rotated footprint contains (x, z).
    pub fn island_at(&self, x: f32, z: f32) -> Option<usize> {
        let half_size = self.config.island_size;
        self.islands
            .iter()
            .position(|island| island.initialized && island.contains_xz(x, z, half_size))
    }

    /// Check if (x, z) stands on any island.
    pub fn is_on_island(&self, x: f32, z: f32) -> bool {
        self.island_at(x, z).is_some()
    }

    /// Index of the first bridge whose walkway contains (x, z).
    pub fn bridge_at(&self, x: f32, z: f32) -> Option<usize> {
        let width = self.config.bridge_width;
        self.bridges.iter().position(|bridge| {
            match (self.islands.get(bridge.island_a), self.islands.get(bridge.island_b)) {
                (Some(a), Some(b)) => is_point_on_bridge(x, z, a.position, b.position, width),
                _ => false,
            }
        })
    }

    /// Check if (x, z) stands on any bridge walkway.
    pub fn on_bridge(&self, x: f32, z: f32) -> bool {
        self.bridge_at(x, z).is_some()
    }

    /// Procedural ground height at (x, z).
    pub fn height(&self, x: f32, z: f32) -> f32 {
        self.height_field.height_at(x, z)
    }

    /// Unit surface normal at (x, z); world-up where the field is degenerate.
    pub fn normal(&self, x: f32, z: f32) -> Vec3 {
        self.height_field.normal_at(x, z)
    }

    /// Ground height where there is ground (island or bridge), `None` over the void.
    pub fn ground_height(&self, x: f32, z: f32) -> Option<f32> {
        (self.is_on_island(x, z) || self.on_bridge(x, z)).then(|| self.height(x, z))
    }

    /// Nearest initialized island by ground-plane distance.
    pub fn closest_island_index(&self, point: Vec3) -> Option<usize> {
        self.islands
            .iter()
            .enumerate()
            .filter(|(_, island)| island.initialized)
            .min_by(|(_, a), (_, b)| a.distance_xz(point).total_cmp(&b.distance_xz(point)))
            .map(|(i, _)| i)
    }

    /// Axis-aligned wander box `position ± island_size`, ignoring yaw.
    pub fn island_bounds(&self, index: usize) -> Option<(Vec2, Vec2)> {
        let island = self.islands.get(index)?;
        let center = Vec2::new(island.position.x, island.position.z);
        let half = Vec2::splat(self.config.island_size);
        Some((center - half, center + half))
    }

    /// Walkway geometry for a bridge of this layout.
    pub fn bridge_span(&self, bridge: &Bridge) -> Option<BridgeSpan> {
        let a = self.islands.get(bridge.island_a)?;
        let b = self.islands.get(bridge.island_b)?;
        Some(BridgeSpan::between(
            a,
            b,
            self.height(a.position.x, a.position.z),
            self.height(b.position.x, b.position.z),
            self.config.bridge_deck_offset,
        ))
    }

    /// Walkway geometry for every bridge, in bridge order.
    pub fn bridge_spans(&self) -> Vec<BridgeSpan> {
        self.bridges
            .iter()
            .filter_map(|bridge| self.bridge_span(bridge))
            .collect()
    }

    // ========================================================================
    // PICKUPS
    // ========================================================================

    /// Every remaining pickup as `(island_index, position)`.
    pub fn pickups(&self) -> impl Iterator<Item = (usize, Vec3)> + '_ {
        self.islands
            .iter()
            .enumerate()
            .flat_map(|(i, island)| island.pickup_positions.iter().map(move |&p| (i, p)))
    }

    pub fn pickup_count(&self) -> usize {
        self.islands.iter().map(|i| i.pickup_positions.len()).sum()
    }

    /// Collect the first pickup touching a sphere at `point`.
    ///
    /// Removes it from its island and returns its position.
    pub fn check_pickup_collision(&mut self, point: Vec3, radius: f32) -> Option<Vec3> {
        let pickup_radius = self.config.pickup_collision_radius;
        for island in &mut self.islands {
            if let Some(slot) = island
                .pickup_positions
                .iter()
                .position(|&p| spheres_touch(point, radius, p, pickup_radius))
            {
                return Some(island.pickup_positions.remove(slot));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn island(x: f32, z: f32, yaw: f32, pickups: Vec<Vec3>) -> Island {
        Island {
            position: Vec3::new(x, 0.0, z),
            rotation_y: yaw,
            initialized: true,
            pickup_positions: pickups,
        }
    }

    fn two_island_layout() -> Archipelago {
        let config = ArchipelagoConfig::seeded(1);
        let grid = RegionGrid::new(2, config.region_size);
        let islands = vec![
            island(75.0, 75.0, 0.0, vec![Vec3::new(80.0, 2.0, 80.0)]),
            island(
                225.0,
                75.0,
                0.5,
                vec![Vec3::new(230.0, 1.5, 70.0), Vec3::new(210.0, 2.5, 90.0)],
            ),
        ];
        let bridges = vec![Bridge { island_a: 0, island_b: 1 }];
        Archipelago::new(config, grid, islands, bridges)
    }

    #[test]
    fn test_empty_layout_answers_not_found() {
        let mut layout = Archipelago::empty(ArchipelagoConfig::default());
        assert!(layout.is_empty());
        assert!(!layout.is_on_island(75.0, 75.0));
        assert!(!layout.on_bridge(75.0, 75.0));
        assert_eq!(layout.ground_height(75.0, 75.0), None);
        assert_eq!(layout.closest_island_index(Vec3::ZERO), None);
        assert_eq!(layout.island_bounds(0), None);
        assert_eq!(layout.check_pickup_collision(Vec3::ZERO, 100.0), None);
        assert!(layout.bridge_spans().is_empty());
    }

    #[test]
    fn test_island_and_bridge_queries() {
        let layout = two_island_layout();
        assert_eq!(layout.island_at(75.0, 75.0), Some(0));
        assert_eq!(layout.island_at(225.0, 75.0), Some(1));
        // Between the islands only the bridge holds you up
        assert!(!layout.is_on_island(150.0, 75.0));
        assert!(layout.on_bridge(150.0, 75.0));
        assert!(layout.on_bridge(150.0, 77.4));
        assert!(!layout.on_bridge(150.0, 77.6));
        assert_eq!(layout.ground_height(150.0, 75.0), Some(layout.height(150.0, 75.0)));
        assert_eq!(layout.ground_height(150.0, 120.0), None);
    }

    #[test]
    fn test_uninitialized_islands_are_ignored() {
        let mut layout = two_island_layout();
        layout.islands[0].initialized = false;
        assert!(!layout.is_on_island(75.0, 75.0));
        assert_eq!(layout.closest_island_index(Vec3::new(70.0, 0.0, 70.0)), Some(1));
    }

    #[test]
    fn test_closest_island_and_bounds() {
        let layout = two_island_layout();
        assert_eq!(layout.closest_island_index(Vec3::new(140.0, 9.0, 0.0)), Some(0));
        assert_eq!(layout.closest_island_index(Vec3::new(160.0, 0.0, 0.0)), Some(1));
        let (min, max) = layout.island_bounds(1).expect("island exists");
        assert_eq!(min, Vec2::new(175.0, 25.0));
        assert_eq!(max, Vec2::new(275.0, 125.0));
    }

    #[test]
    fn test_bridge_span_uses_height_field() {
        let layout = two_island_layout();
        let spans = layout.bridge_spans();
        assert_eq!(spans.len(), 1);
        let expected = (layout.height(75.0, 75.0) + layout.height(225.0, 75.0)) * 0.5 + 0.5;
        assert!((spans[0].deck_height - expected).abs() < 1e-5);
        assert!((spans[0].length - 150.0).abs() < 1e-4);

        let dangling = Bridge { island_a: 0, island_b: 9 };
        assert_eq!(layout.bridge_span(&dangling), None);
    }

    #[test]
    fn test_pickup_collection_removes_once() {
        let mut layout = two_island_layout();
        assert_eq!(layout.pickup_count(), 3);

        let near = Vec3::new(230.5, 1.5, 70.0);
        assert_eq!(layout.check_pickup_collision(near, 1.0), Some(Vec3::new(230.0, 1.5, 70.0)));
        assert_eq!(layout.pickup_count(), 2);
        assert_eq!(layout.check_pickup_collision(near, 1.0), None);

        let remaining: Vec<(usize, Vec3)> = layout.pickups().collect();
        assert_eq!(
            remaining,
            vec![(0, Vec3::new(80.0, 2.0, 80.0)), (1, Vec3::new(210.0, 2.5, 90.0))]
        );
    }

    #[test]
    fn test_pickup_uses_combined_radius() {
        let mut layout = two_island_layout();
        // Player radius 1, pickup radius 2: reach sqrt(5) ≈ 2.236
        assert_eq!(layout.check_pickup_collision(Vec3::new(82.3, 2.0, 80.0), 1.0), None);
        assert!(layout.check_pickup_collision(Vec3::new(82.2, 2.0, 80.0), 1.0).is_some());
    }
}
