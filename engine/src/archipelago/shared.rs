//! Shared Archipelago Handle
//!
//! Lets a UI thread regenerate the layout while simulation threads keep
//! querying it. Generation is serialized behind a mutex around the generator;
//! each finished layout is published by swapping one `Arc`. Readers clone the
//! current `Arc` and query it without holding any lock.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{Archipelago, IslandGenerator};
use crate::config::ArchipelagoConfig;
use crate::error::ArchipelagoError;
use crate::physics::collision::spheres_touch;

/// Thread-safe owner of the current layout and the generator that replaces it.
#[derive(Debug)]
pub struct SharedArchipelago<R = ChaCha8Rng> {
    generator: Mutex<IslandGenerator<R>>,
    current: RwLock<Arc<Archipelago>>,
}

impl SharedArchipelago<ChaCha8Rng> {
    /// Handle with an empty layout, seeded from `config.seed`.
    pub fn from_config(config: ArchipelagoConfig) -> Result<Self, ArchipelagoError> {
        Ok(Self::new(IslandGenerator::new(config)?))
    }
}

impl<R: Rng> SharedArchipelago<R> {
    /// Wrap a generator. Until the first [`regenerate`](Self::regenerate) the
    /// published layout is empty and every query answers "not found".
    pub fn new(generator: IslandGenerator<R>) -> Self {
        let empty = Archipelago::empty(generator.config().clone());
        Self {
            generator: Mutex::new(generator),
            current: RwLock::new(Arc::new(empty)),
        }
    }

    /// The currently published layout.
    pub fn snapshot(&self) -> Arc<Archipelago> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Generate a new layout and publish it.
    ///
    /// Concurrent calls run one after another. On error the previous layout
    /// stays published.
    pub fn regenerate(&self, island_count: usize) -> Result<Arc<Archipelago>, ArchipelagoError> {
        let mut generator = self.generator.lock().unwrap_or_else(PoisonError::into_inner);
        let layout = Arc::new(generator.generate(island_count)?);

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&layout);
        Ok(layout)
    }

    /// Ground-plane position of a random island of the current layout.
    ///
    /// Waits for a regeneration in progress and picks from the layout it
    /// publishes.
    pub fn random_island_position(&self) -> Vec3 {
        let mut generator = self.generator.lock().unwrap_or_else(PoisonError::into_inner);
        let layout = self.snapshot();
        generator.random_island_position(&layout)
    }

    /// Collect the first pickup touching a sphere at `point`.
    ///
    /// Copy-on-write: readers still holding the previous snapshot keep seeing
    /// the pickup; new snapshots do not.
    pub fn check_pickup_collision(&self, point: Vec3, radius: f32) -> Option<Vec3> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let pickup_radius = current.config().pickup_collision_radius;
        let hit = current
            .pickups()
            .any(|(_, p)| spheres_touch(point, radius, p, pickup_radius));
        if !hit {
            return None;
        }
        Arc::make_mut(&mut *current).check_pickup_collision(point, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_starts_empty() {
        let shared = SharedArchipelago::from_config(ArchipelagoConfig::seeded(1))
            .expect("valid config");
        let snapshot = shared.snapshot();
        assert!(snapshot.is_empty());
        assert!(!snapshot.is_on_island(75.0, 75.0));
        assert_eq!(shared.random_island_position(), Vec3::ZERO);
    }

    #[test]
    fn test_regenerate_publishes() {
        let shared = SharedArchipelago::from_config(ArchipelagoConfig::seeded(2))
            .expect("valid config");
        let old = shared.snapshot();
        let new = shared.regenerate(4).expect("generates");
        assert!(Arc::ptr_eq(&new, &shared.snapshot()));
        // Readers holding the old handle are unaffected
        assert!(old.is_empty());
        assert_eq!(shared.snapshot().island_count(), 4);
    }

    #[test]
    fn test_pickup_collection_is_copy_on_write() {
        let shared = SharedArchipelago::from_config(ArchipelagoConfig::seeded(3))
            .expect("valid config");
        shared.regenerate(2).expect("generates");
        let before = shared.snapshot();
        let (_, target) = before.pickups().next().expect("every island has a pickup");

        assert_eq!(shared.check_pickup_collision(target, 0.5), Some(target));
        assert_eq!(before.pickup_count(), shared.snapshot().pickup_count() + 1);
        // A miss leaves the published layout untouched
        let after = shared.snapshot();
        assert_eq!(shared.check_pickup_collision(Vec3::splat(-1.0e4), 0.5), None);
        assert!(Arc::ptr_eq(&after, &shared.snapshot()));
    }

    #[test]
    fn test_spawn_waits_for_regeneration() {
        let shared = Arc::new(
            SharedArchipelago::from_config(ArchipelagoConfig::seeded(6)).expect("valid config"),
        );
        let layout = IslandGenerator::new(ArchipelagoConfig::seeded(7))
            .expect("valid config")
            .generate(3)
            .expect("generates");

        // Hold the generator like a regeneration in progress, then publish
        // before releasing it.
        let guard = shared.generator.lock().expect("generator lock");
        let spawner = {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared.random_island_position())
        };
        thread::sleep(Duration::from_millis(50));
        *shared.current.write().expect("layout lock") = Arc::new(layout.clone());
        drop(guard);

        let spawn = spawner.join().expect("spawner thread");
        assert!(layout.is_on_island(spawn.x, spawn.z), "spawn {spawn:?} on the old layout");
    }

    #[test]
    fn test_concurrent_readers_see_whole_layouts() {
        let shared = Arc::new(
            SharedArchipelago::from_config(ArchipelagoConfig::seeded(4)).expect("valid config"),
        );
        shared.regenerate(4).expect("generates");

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let layout = shared.snapshot();
                        let n = layout.island_count();
                        // Bridge count always matches the island count of the same layout
                        assert_eq!(layout.bridges().len(), n.saturating_sub(1));
                        assert_eq!(layout.regions().len(), n);
                    }
                })
            })
            .collect();

        for count in [1, 9, 2, 16, 5] {
            shared.regenerate(count).expect("generates");
        }
        for reader in readers {
            reader.join().expect("reader thread");
        }
    }
}
