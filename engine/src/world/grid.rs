//! Region Grid Module
//!
//! Divides the ground plane into a roughly square grid of fixed-size square
//! cells ("regions"), one per island. Cells tile the plane edge to edge, so
//! two regions never overlap.
//!
//! ## Layout
//! - `cols = ceil(sqrt(count))`, `rows = ceil(count / cols)`
//! - Region `i` sits in column `i % cols`, row `i / cols`
//! - Grid origin is the world origin; the grid grows toward +X and +Z
//! - 1 unit = 1 meter

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// One square cell of the region grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Center of the cell on the ground plane (y = 0)
    pub center: Vec3,
    /// Half the side length of the cell
    pub half_extent: f32,
}

impl Region {
    /// Minimum (x, z) corner.
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.center.x - self.half_extent, self.center.z - self.half_extent)
    }

    /// Maximum (x, z) corner.
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.center.x + self.half_extent, self.center.z + self.half_extent)
    }

    /// Check if a ground-plane point lies inside the cell (edges inclusive).
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        (x - self.center.x).abs() <= self.half_extent
            && (z - self.center.z).abs() <= self.half_extent
    }

    /// Check if two cells share interior area. Touching edges do not count.
    pub fn overlaps(&self, other: &Region) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }
}

/// Region layout for one archipelago.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionGrid {
    /// Side length of every cell (meters)
    pub region_size: f32,
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// One cell per island, indexed like the island list
    pub regions: Vec<Region>,
}

impl RegionGrid {
    /// Lay out `count` regions of side `region_size`.
    ///
    /// `count = 0` yields an empty grid with zero rows and columns.
    pub fn new(count: usize, region_size: f32) -> Self {
        let (cols, rows) = grid_dimensions(count);
        let half_extent = region_size / 2.0;

        let regions = (0..count)
            .map(|i| {
                let col = i % cols;
                let row = i / cols;
                Region {
                    center: Vec3::new(
                        (col as f32 + 0.5) * region_size,
                        0.0,
                        (row as f32 + 0.5) * region_size,
                    ),
                    half_extent,
                }
            })
            .collect();

        Self {
            region_size,
            cols,
            rows,
            regions,
        }
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True when the grid holds no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region for an island index.
    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Side length of the square that bounds the whole grid.
    pub fn extent(&self) -> f32 {
        self.cols.max(self.rows) as f32 * self.region_size
    }

    /// Index of the region containing a ground-plane point, if any.
    ///
    /// Points outside the grid, including non-finite ones, map to `None`.
    pub fn region_index_at(&self, x: f32, z: f32) -> Option<usize> {
        if self.is_empty() || !x.is_finite() || !z.is_finite() || x < 0.0 || z < 0.0 {
            return None;
        }
        let col = (x / self.region_size).floor();
        let row = (z / self.region_size).floor();
        if col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        let index = row as usize * self.cols + col as usize;
        (index < self.regions.len()).then_some(index)
    }
}

/// Grid dimensions for a roughly square arrangement of `count` cells.
pub fn grid_dimensions(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    (cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(grid_dimensions(0), (0, 0));
        assert_eq!(grid_dimensions(1), (1, 1));
        assert_eq!(grid_dimensions(2), (2, 1));
        assert_eq!(grid_dimensions(4), (2, 2));
        assert_eq!(grid_dimensions(5), (3, 2));
        assert_eq!(grid_dimensions(10), (4, 3));
    }

    #[test]
    fn test_empty_grid() {
        let grid = RegionGrid::new(0, 150.0);
        assert!(grid.is_empty());
        assert_eq!(grid.cols, 0);
        assert_eq!(grid.region_index_at(10.0, 10.0), None);
    }

    #[test]
    fn test_region_centers() {
        let grid = RegionGrid::new(4, 150.0);
        assert_eq!(grid.cols, 2);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.regions[0].center, Vec3::new(75.0, 0.0, 75.0));
        assert_eq!(grid.regions[1].center, Vec3::new(225.0, 0.0, 75.0));
        assert_eq!(grid.regions[2].center, Vec3::new(75.0, 0.0, 225.0));
        assert_eq!(grid.regions[3].center, Vec3::new(225.0, 0.0, 225.0));
        assert_eq!(grid.extent(), 300.0);
    }

    #[test]
    fn test_regions_never_overlap() {
        for count in [1, 2, 3, 7, 16, 30] {
            let grid = RegionGrid::new(count, 150.0);
            assert_eq!(grid.len(), count);
            for i in 0..count {
                for j in (i + 1)..count {
                    assert!(
                        !grid.regions[i].overlaps(&grid.regions[j]),
                        "regions {i} and {j} overlap for count {count}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_region_index_lookup() {
        let grid = RegionGrid::new(5, 150.0); // 3 cols x 2 rows, last row partial
        assert_eq!(grid.region_index_at(10.0, 10.0), Some(0));
        assert_eq!(grid.region_index_at(400.0, 10.0), Some(2));
        assert_eq!(grid.region_index_at(200.0, 200.0), Some(4));
        // Row 1, column 2 would be index 5 which does not exist
        assert_eq!(grid.region_index_at(400.0, 200.0), None);
        assert_eq!(grid.region_index_at(-1.0, 10.0), None);
        assert_eq!(grid.region_index_at(500.0, 10.0), None);
    }

    #[test]
    fn test_region_lookup_far_and_non_finite() {
        let grid = RegionGrid::new(4, 150.0);
        assert_eq!(grid.region_index_at(10.0, 1.0e30), None);
        assert_eq!(grid.region_index_at(1.0e30, 10.0), None);
        assert_eq!(grid.region_index_at(f32::MAX, f32::MAX), None);
        assert_eq!(grid.region_index_at(f32::NAN, f32::NAN), None);
        assert_eq!(grid.region_index_at(10.0, f32::NAN), None);
        assert_eq!(grid.region_index_at(f32::INFINITY, 10.0), None);
        // Last valid cell still resolves
        assert_eq!(grid.region_index_at(299.0, 299.0), Some(3));
    }

    #[test]
    fn test_region_contains_edges() {
        let region = RegionGrid::new(1, 150.0).regions[0];
        assert!(region.contains_xz(0.0, 0.0));
        assert!(region.contains_xz(150.0, 150.0));
        assert!(!region.contains_xz(150.1, 75.0));
        assert_eq!(region.min(), Vec2::ZERO);
        assert_eq!(region.max(), Vec2::splat(150.0));
    }
}
