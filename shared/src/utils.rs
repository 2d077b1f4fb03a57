use crate::{collision::Vec3, constants::YAW_EPS};
use nalgebra::Vector2;

/// Project a world position onto the XZ plane.
#[inline]
pub fn to_planar(v: &Vec3) -> Vector2<f32> {
    Vector2::new(v.x, v.z)
}

/// Yaw that makes the planar forward `(sin(yaw), 0, cos(yaw))` point along `direction`.
///
/// Returns `None` if the planar part of `direction` is too short to define a heading.
pub fn yaw_facing(direction: &Vec3) -> Option<f32> {
    let xz = to_planar(direction);
    if xz.norm_squared() > YAW_EPS {
        return Some(xz.x.atan2(xz.y));
    }

    None
}
