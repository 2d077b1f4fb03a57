use rapier3d::parry::{bounding_volume::Aabb, shape::Cuboid};

use super::types::StaticBox;

/// Anything that can report its current world-space axis-aligned box.
///
/// `check_collision` calls this once per obstacle per query and never caches the answer.
/// Use [`BoundsCache`](super::broad::BoundsCache) when the world is static and the
/// obstacle count makes recomputation noticeable.
pub trait Bounded {
    fn world_aabb(&self) -> Aabb;
}

impl Bounded for Aabb {
    #[inline]
    fn world_aabb(&self) -> Aabb {
        *self
    }
}

impl Bounded for StaticBox {
    /// Rotated cuboids report the box enclosing all eight corners.
    #[inline]
    fn world_aabb(&self) -> Aabb {
        Cuboid::new(self.half_extents).aabb(&self.transform.iso())
    }
}

impl<T: Bounded + ?Sized> Bounded for &T {
    #[inline]
    fn world_aabb(&self) -> Aabb {
        (**self).world_aabb()
    }
}
