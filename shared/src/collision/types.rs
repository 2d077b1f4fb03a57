/*!
Core collision types and math aliases shared by the collision submodules.

This module intentionally contains no algorithms. It defines the data types
exchanged between:
- bounds       (the bounding volume provider contract and the agent volume)
- broad        (cached obstacle boxes for static worlds)
- narrow_phase (single discrete collision query)
- kinematic    (sub-stepped move-and-slide)
- the camera facade, which owns the agent pose and calls into `kinematic`
*/

use nalgebra as na;
use rapier3d::parry::bounding_volume::Aabb;

use super::settings::{AGENT_DEPTH, AGENT_HEIGHT, AGENT_WIDTH};

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// A rigid transform (isometry) in world space.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::identity())
    }

    /// Convert to nalgebra `Isometry3` for use with parry bounding volume queries.
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(
            na::Translation3::new(self.translation.x, self.translation.y, self.translation.z),
            self.rotation,
        )
    }
}

/// A static world block: an oriented cuboid placed by `transform`.
///
/// Its world-space box is derived from the current transform every time it is asked
/// for, so moving the block between queries is picked up without invalidation.
#[derive(Clone, Copy, Debug)]
pub struct StaticBox {
    /// Local-space half-extents (hx, hy, hz).
    pub half_extents: Vec3,
    /// World-space pose of the cuboid.
    pub transform: Transform,
}

impl StaticBox {
    #[inline]
    pub fn new(half_extents: Vec3, transform: Transform) -> Self {
        Self {
            half_extents,
            transform,
        }
    }

    /// Axis-aligned cube of edge `size` centred on `center`.
    #[inline]
    pub fn cube(center: Vec3, size: f32) -> Self {
        let h = size * 0.5;
        Self::new(Vec3::new(h, h, h), Transform::from_translation(center))
    }
}

/// The agent's collision volume: a fixed-size axis-aligned box centred on a position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentVolume {
    pub half_extents: Vec3,
}

impl AgentVolume {
    #[inline]
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            half_extents: Vec3::new(width * 0.5, height * 0.5, depth * 0.5),
        }
    }

    /// Box of this volume centred at `center`.
    #[inline]
    pub fn aabb_at(&self, center: &Vec3) -> Aabb {
        Aabb::from_half_extents(Point3::from(*center), self.half_extents)
    }
}

impl Default for AgentVolume {
    fn default() -> Self {
        Self::new(AGENT_WIDTH, AGENT_HEIGHT, AGENT_DEPTH)
    }
}

/// One of the six axis-aligned face directions of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactNormal {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl ContactNormal {
    /// All directions in tie-break order.
    pub const ALL: [ContactNormal; 6] = [
        ContactNormal::PosX,
        ContactNormal::NegX,
        ContactNormal::PosY,
        ContactNormal::NegY,
        ContactNormal::PosZ,
        ContactNormal::NegZ,
    ];

    /// Unit vector for this direction.
    #[inline]
    pub fn to_vector(self) -> Vec3 {
        match self {
            ContactNormal::PosX => Vec3::new(1.0, 0.0, 0.0),
            ContactNormal::NegX => Vec3::new(-1.0, 0.0, 0.0),
            ContactNormal::PosY => Vec3::new(0.0, 1.0, 0.0),
            ContactNormal::NegY => Vec3::new(0.0, -1.0, 0.0),
            ContactNormal::PosZ => Vec3::new(0.0, 0.0, 1.0),
            ContactNormal::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

/// Result of a single collision query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// The tested displacement is unobstructed.
    Clear,
    /// The agent box at the candidate position overlaps an obstacle.
    Blocked {
        /// Face of the obstacle nearest the candidate position.
        normal: ContactNormal,
        /// Index of the first intersecting obstacle in list order.
        obstacle: usize,
    },
}

impl CollisionOutcome {
    #[inline]
    pub fn is_blocked(&self) -> bool {
        matches!(self, CollisionOutcome::Blocked { .. })
    }

    #[inline]
    pub fn normal(&self) -> Option<ContactNormal> {
        match *self {
            CollisionOutcome::Clear => None,
            CollisionOutcome::Blocked { normal, .. } => Some(normal),
        }
    }
}

/// Result of a sub-stepped move-and-slide attempt.
#[derive(Clone, Copy, Debug)]
pub struct MoveResult {
    /// Final agent position after applying the committed sub-steps and slide.
    pub end_pos: Vec3,
    /// Contact normal of the obstruction that ended the attempt (if any).
    pub last_hit: Option<ContactNormal>,
    /// Whether any slide step was committed.
    pub slid: bool,
}

impl MoveResult {
    #[inline]
    pub fn unobstructed(end_pos: Vec3) -> Self {
        Self {
            end_pos,
            last_hit: None,
            slid: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_agent_volume_is_walker_sized() {
        let agent = AgentVolume::default();
        let aabb = agent.aabb_at(&Vec3::new(1.0, 2.0, 3.0));

        assert!((aabb.mins.x - 0.8).abs() < 1.0e-6);
        assert!((aabb.maxs.x - 1.2).abs() < 1.0e-6);
        assert!((aabb.mins.y - 1.2).abs() < 1.0e-6);
        assert!((aabb.maxs.y - 2.8).abs() < 1.0e-6);
        assert!((aabb.mins.z - 2.8).abs() < 1.0e-6);
        assert!((aabb.maxs.z - 3.2).abs() < 1.0e-6);
    }

    #[test]
    fn contact_normals_are_unit_and_opposed_in_pairs() {
        for pair in ContactNormal::ALL.chunks(2) {
            let a = pair[0].to_vector();
            let b = pair[1].to_vector();
            assert!((a.norm() - 1.0).abs() < 1.0e-6);
            assert!((a + b).norm() < 1.0e-6);
        }
    }

    #[test]
    fn cube_half_extents_are_half_the_edge() {
        let block = StaticBox::cube(Vec3::new(0.0, -2.0, 0.0), 6.0);
        assert_eq!(block.half_extents, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(block.transform.translation, Vec3::new(0.0, -2.0, 0.0));
    }
}
