/*!
Collision root module.

This module re-exports submodules that implement the agent's discrete move-and-slide
against static axis-aligned obstacle boxes. The code is split for clarity:

- types:        shared data types (AgentVolume, StaticBox, ContactNormal, MoveResult, etc.)
- settings:     integrator constants and `MoveSettings`
- bounds:       the `Bounded` provider contract implemented by obstacles
- broad:        `BoundsCache` for worlds whose boxes never move
- narrow_phase: single collision query and nearest-face normal selection
- kinematic:    sub-stepped move-and-slide integrator
*/

pub mod bounds;
pub mod broad;
pub mod kinematic;
pub mod narrow_phase;
pub mod settings;
pub mod types;

// Re-export commonly used types and functions.
pub use bounds::Bounded;
pub use broad::BoundsCache;
pub use kinematic::{slide_vector, try_move};
pub use narrow_phase::{check_collision, nearest_face_normal};
pub use rapier3d::parry::bounding_volume::Aabb;
pub use settings::MoveSettings;
pub use types::{
    AgentVolume, CollisionOutcome, ContactNormal, Iso, MoveResult, Point3, Quat, StaticBox,
    Transform, Vec3,
};

/// Convenience: build an `Aabb` from its minimum and maximum corners.
#[inline]
pub fn aabb_from_corners(min: Vec3, max: Vec3) -> Aabb {
    Aabb::new(Point3::from(min), Point3::from(max))
}
