use rapier3d::parry::bounding_volume::Aabb;

use super::bounds::Bounded;

/// Snapshot of obstacle boxes for worlds whose geometry does not move.
///
/// Notes:
/// - The cache holds one `Aabb` per obstacle, in the same order as the source slice, so
///   "first intersecting obstacle" selection is unchanged when querying through it.
/// - Nothing tracks transforms automatically; call [`BoundsCache::refresh`] after moving
///   any obstacle.
#[derive(Clone, Debug, Default)]
pub struct BoundsCache {
    boxes: Vec<Aabb>,
}

impl BoundsCache {
    /// Compute and store the current box of every obstacle.
    pub fn from_obstacles<B: Bounded>(obstacles: &[B]) -> Self {
        let mut cache = Self::default();
        cache.refresh(obstacles);
        cache
    }

    /// Discard the stored boxes and recompute them from `obstacles`.
    pub fn refresh<B: Bounded>(&mut self, obstacles: &[B]) {
        self.boxes.clear();
        self.boxes.extend(obstacles.iter().map(Bounded::world_aabb));
    }

    /// Cached boxes, usable anywhere an obstacle slice is expected.
    #[inline]
    pub fn as_slice(&self) -> &[Aabb] {
        &self.boxes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }
}
