//! Archipelago Engine Library
//!
//! Procedural island layouts on an infinite ground plane: one island per
//! region cell, a minimum spanning tree of bridges between them, pickups
//! scattered over each island, and the ground queries gameplay code calls
//! every frame.
//!
//! # Modules
//!
//! - [`config`] - Layout constants and the JSON-loadable [`ArchipelagoConfig`]
//! - [`world`] - Region grid and the seeded random source
//! - [`terrain`] - Island placement, pickups, bridges and the height field
//! - [`physics`] - Ground-plane geometry tests
//! - [`archipelago`] - Generator, published layouts and spatial queries
//!
//! # Example
//!
//! ```
//! use archipelago_engine::{ArchipelagoConfig, IslandGenerator};
//!
//! let mut generator = IslandGenerator::new(ArchipelagoConfig::seeded(42)).unwrap();
//! let layout = generator.generate(4).unwrap();
//! assert_eq!(layout.bridges().len(), 3);
//!
//! let center = layout.islands()[0].position;
//! assert!(layout.is_on_island(center.x, center.z));
//! let ground = layout.height(center.x, center.z);
//! let up = layout.normal(center.x, center.z);
//! assert!(up.y > 0.0 && ground.is_finite());
//! ```

pub mod archipelago;
pub mod config;
pub mod error;
pub mod physics;
pub mod terrain;
pub mod world;

pub use archipelago::{Archipelago, IslandGenerator, SharedArchipelago};
pub use config::ArchipelagoConfig;
pub use error::ArchipelagoError;
pub use terrain::{Bridge, BridgeSpan, HeightField, Island};
pub use world::{Region, RegionGrid};
