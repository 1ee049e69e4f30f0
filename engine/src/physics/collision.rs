//! Collision detection module
//!
//! Ground-plane geometry used by the spatial queries: rotated box membership,
//! point-to-segment distance, and sphere overlap for pickups.
//!
//! All tests work on the x/z plane; y is ignored unless stated otherwise.
//!
//! # Example
//!
//! ```
//! use archipelago_engine::physics::collision::{point_in_rotated_square, distance_to_segment_xz};
//! use glam::Vec3;
//!
//! // Square of half-size 10 at the origin, rotated 45 degrees
//! let center = Vec3::ZERO;
//! let yaw = std::f32::consts::FRAC_PI_4;
//! assert!(point_in_rotated_square(Vec3::new(13.0, 0.0, 0.0), center, yaw, 10.0));
//!
//! let d = distance_to_segment_xz(Vec3::new(5.0, 0.0, 3.0), Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
//! assert!((d - 3.0).abs() < 1e-6);
//! ```

use glam::{Quat, Vec2, Vec3};

/// Transform a world point into the local frame of a yawed object.
///
/// Translates by `-position` and rotates by `-yaw` about the Y axis, so the
/// result can be compared against the object's unrotated footprint.
pub fn world_to_local(point: Vec3, position: Vec3, yaw: f32) -> Vec3 {
    Quat::from_rotation_y(-yaw) * (point - position)
}

/// Transform a local point of a yawed object into world space.
///
/// Inverse of [`world_to_local`]: rotate by `yaw`, then translate.
pub fn local_to_world(local: Vec3, position: Vec3, yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * local + position
}

/// Check if a point lies inside a square footprint rotated about Y.
///
/// # Arguments
///
/// * `point` - World-space query point (y ignored)
/// * `center` - World-space center of the square
/// * `yaw` - Rotation of the square about the Y axis (radians)
/// * `half_size` - Half the side length of the square
///
/// # Returns
///
/// `true` when `|local.x| <= half_size && |local.z| <= half_size`
pub fn point_in_rotated_square(point: Vec3, center: Vec3, yaw: f32, half_size: f32) -> bool {
    let flat = Vec3::new(point.x, center.y, point.z);
    let local = world_to_local(flat, center, yaw);
    local.x.abs() <= half_size && local.z.abs() <= half_size
}

/// The four footprint corners of a rotated square, in world space.
pub fn rotated_square_corners(center: Vec3, yaw: f32, half_size: f32) -> [Vec3; 4] {
    let h = half_size;
    [
        Vec3::new(-h, 0.0, -h),
        Vec3::new(h, 0.0, -h),
        Vec3::new(h, 0.0, h),
        Vec3::new(-h, 0.0, h),
    ]
    .map(|corner| local_to_world(corner, center, yaw))
}

/// Axis-aligned (x, z) bounds of a set of points.
///
/// Returns `(min, max)` where `Vec2::x` is world x and `Vec2::y` is world z.
pub fn xz_bounds(points: &[Vec3]) -> (Vec2, Vec2) {
    points.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), p| {
            let xz = Vec2::new(p.x, p.z);
            (min.min(xz), max.max(xz))
        },
    )
}

/// Closest-point parameter of `point` on segment `start..end`, clamped to `[0, 1]`.
///
/// A zero-length segment returns `0.0`.
pub fn segment_parameter_xz(point: Vec3, start: Vec3, end: Vec3) -> f32 {
    let a = Vec2::new(start.x, start.z);
    let ab = Vec2::new(end.x, end.z) - a;
    let length_sq = ab.length_squared();
    if length_sq <= f32::EPSILON {
        return 0.0;
    }
    let ap = Vec2::new(point.x, point.z) - a;
    (ap.dot(ab) / length_sq).clamp(0.0, 1.0)
}

/// Minimum ground-plane distance from `point` to the segment `start..end`.
///
/// Projects onto the segment with a clamped parameter, so points beyond either
/// end measure to that endpoint.
pub fn distance_to_segment_xz(point: Vec3, start: Vec3, end: Vec3) -> f32 {
    let t = segment_parameter_xz(point, start, end);
    let a = Vec2::new(start.x, start.z);
    let b = Vec2::new(end.x, end.z);
    let closest = a + (b - a) * t;
    Vec2::new(point.x, point.z).distance(closest)
}

/// Sphere-sphere overlap with the combined-radius rule used for pickups.
///
/// Overlap when `|a - b|² <= ra² + rb²`.
pub fn spheres_touch(a: Vec3, radius_a: f32, b: Vec3, radius_b: f32) -> bool {
    a.distance_squared(b) <= radius_a * radius_a + radius_b * radius_b
}
