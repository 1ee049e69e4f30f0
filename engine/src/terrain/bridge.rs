//! Bridge Network
//!
//! Connects every island with the cheapest possible set of straight bridges:
//! a minimum spanning tree over island centers, weighted by ground-plane
//! distance, built with Prim's algorithm from island 0.
//!
//! Also provides walkway geometry for a built bridge (deck endpoints, length,
//! heading, deck height) and the point-on-walkway test.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::island::Island;
use crate::physics::collision::distance_to_segment_xz;

// ============================================================================
// BRIDGE TYPES
// ============================================================================

/// Undirected connection between two islands.
///
/// Indices refer to the island list of the generation pass that built the
/// bridge and are invalid once the islands are regenerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bridge {
    pub island_a: usize,
    pub island_b: usize,
}

impl Bridge {
    /// Check if the bridge touches the given island.
    pub fn connects(&self, island: usize) -> bool {
        self.island_a == island || self.island_b == island
    }
}

/// Renderable walkway geometry for one bridge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BridgeSpan {
    /// Deck start (island A center at deck height)
    pub start: Vec3,
    /// Deck end (island B center at deck height)
    pub end: Vec3,
    /// Ground-plane length (meters)
    pub length: f32,
    /// Heading from A to B about the Y axis, `atan2(dz, dx)` (radians)
    pub angle: f32,
    /// Deck height: mean ground height at both ends plus the deck offset
    pub deck_height: f32,
}

impl BridgeSpan {
    /// Build the walkway between two islands.
    ///
    /// # Arguments
    /// * `a`, `b` - Connected islands
    /// * `height_a`, `height_b` - Ground height under each island center
    /// * `deck_offset` - Deck height above the averaged ends
    pub fn between(a: &Island, b: &Island, height_a: f32, height_b: f32, deck_offset: f32) -> Self {
        let deck_height = (height_a + height_b) * 0.5 + deck_offset;
        let delta = Vec2::new(b.position.x - a.position.x, b.position.z - a.position.z);
        Self {
            start: Vec3::new(a.position.x, deck_height, a.position.z),
            end: Vec3::new(b.position.x, deck_height, b.position.z),
            length: delta.length(),
            angle: delta.y.atan2(delta.x),
            deck_height,
        }
    }

    /// Midpoint of the walkway.
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }
}

// ============================================================================
// SPANNING TREE
// ============================================================================

/// Build the minimum spanning tree over island centers.
///
/// Returns `islands.len() - 1` bridges for two or more islands and none
/// otherwise. Each bridge is emitted as `(parent, child)` for every non-root
/// island, in island order. Among equally cheap candidates the lowest index
/// joins the tree first.
///
/// O(n²) in time and memory; meant for island counts in the tens.
pub fn build_bridges(islands: &[Island]) -> Vec<Bridge> {
    let n = islands.len();
    if n < 2 {
        return Vec::new();
    }

    let centers: Vec<Vec2> = islands
        .iter()
        .map(|island| Vec2::new(island.position.x, island.position.z))
        .collect();

    // Full pairwise distance matrix, row-major
    let mut distance = vec![0.0_f32; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = centers[i].distance(centers[j]);
            distance[i * n + j] = d;
            distance[j * n + i] = d;
        }
    }

    let mut key = vec![f32::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    key[0] = 0.0;

    for _ in 0..n {
        let Some(u) = cheapest_outside(&key, &in_tree) else {
            break;
        };
        in_tree[u] = true;

        for v in 0..n {
            let d = distance[u * n + v];
            if !in_tree[v] && d < key[v] {
                key[v] = d;
                parent[v] = Some(u);
            }
        }
    }

    let bridges: Vec<Bridge> = parent
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(child, parent)| {
            parent.map(|p| Bridge {
                island_a: p,
                island_b: child,
            })
        })
        .collect();

    let total: f32 = bridges
        .iter()
        .map(|b| distance[b.island_a * n + b.island_b])
        .sum();
    log::debug!("Bridge network: {} bridges, {:.1}m total span", bridges.len(), total);

    bridges
}

/// Index of the not-yet-included island with the smallest key (first found on ties).
fn cheapest_outside(key: &[f32], in_tree: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, (&k, &included)) in key.iter().zip(in_tree).enumerate() {
        if included {
            continue;
        }
        match best {
            Some(b) if key[b] <= k => {}
            _ => best = Some(i),
        }
    }
    best
}

// ============================================================================
// WALKWAY TEST
// ============================================================================

/// Check if a ground-plane point is on the walkway between two island centers.
///
/// True when the distance to the segment (clamped projection) is strictly
/// less than half the bridge width.
pub fn is_point_on_bridge(x: f32, z: f32, start: Vec3, end: Vec3, width: f32) -> bool {
    distance_to_segment_xz(Vec3::new(x, 0.0, z), start, end) < width / 2.0
}
