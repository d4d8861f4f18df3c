//! Axis-aligned bounds and their aggregation over a scene hierarchy.

use glam::Vec3;

use crate::scene::SceneNode;

/// Axis-aligned bounding box stored as center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Box center in world space.
    pub center: Vec3,
    /// Half the box size along each axis.
    pub half_extents: Vec3,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            half_extents: Vec3::splat(0.5),
        }
    }
}

impl BoundingBox {
    /// Create a box from its center and half-extents.
    #[must_use]
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Create a box spanning two corners.
    #[must_use]
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_extents: (max - min) * 0.5,
        }
    }

    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Largest half-extent across the three axes.
    #[must_use]
    pub fn max_half_extent(&self) -> f32 {
        self.half_extents.max_element()
    }

    /// Grow this box to also enclose `other`.
    pub fn add(&mut self, other: &BoundingBox) {
        *self = Self::from_min_max(
            self.min().min(other.min()),
            self.max().max(other.max()),
        );
    }
}

/// Union the bounds of every mesh under `root` into `aggregate`.
///
/// Traversal is depth-first: a node's own meshes, then each child in order.
/// The first mesh found overwrites `aggregate`; later meshes are unioned in.
/// Returns the number of meshes visited. With no meshes, `aggregate` is
/// left as it was.
pub fn aggregate_bounds<N: SceneNode>(
    root: &N,
    aggregate: &mut BoundingBox,
) -> usize {
    collect(root, aggregate, 0)
}

fn collect<N: SceneNode>(
    node: &N,
    aggregate: &mut BoundingBox,
    visited: usize,
) -> usize {
    let mut count = visited;

    for bounds in node.mesh_bounds() {
        if count == 0 {
            *aggregate = *bounds;
        } else {
            aggregate.add(bounds);
        }
        count += 1;
    }

    for child in node.children() {
        count = collect(child, aggregate, count);
    }

    count
}
