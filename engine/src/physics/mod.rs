//! Physics module
//!
//! Geometry primitives behind the archipelago ground queries.
//! No simulation happens here; every function is a pure test on the
//! ground plane.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! # Submodules
//!
//! - [`collision`] - Rotated-square membership, segment distance, sphere overlap

pub mod collision;

pub use collision::{
    distance_to_segment_xz, local_to_world, point_in_rotated_square, rotated_square_corners,
    segment_parameter_xz, spheres_touch, world_to_local, xz_bounds,
};
