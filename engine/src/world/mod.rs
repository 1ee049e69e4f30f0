//! World Module
//!
//! World-space layout: the region grid islands are placed in, and the
//! seeded random source generation draws from.

pub mod grid;
pub mod rng;

pub use grid::{Region, RegionGrid, grid_dimensions};
pub use rng::{DEFAULT_SEED, rng_from_option, seeded_rng};
