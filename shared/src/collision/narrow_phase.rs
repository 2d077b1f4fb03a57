use rapier3d::parry::bounding_volume::{Aabb, BoundingVolume};

use super::{
    bounds::Bounded,
    types::{AgentVolume, CollisionOutcome, ContactNormal, Vec3},
};

/// Test whether moving the agent by `displacement` from `position` lands it inside an obstacle.
///
/// - The agent box is centred on `position + displacement`.
/// - Obstacles are visited in slice order and the first overlapping one wins; there is no
///   nearest-first selection.
/// - Touching faces count as overlap (inclusive interval test on every axis).
///
/// An empty obstacle slice always yields [`CollisionOutcome::Clear`].
pub fn check_collision<B: Bounded>(
    position: &Vec3,
    displacement: &Vec3,
    agent: &AgentVolume,
    obstacles: &[B],
) -> CollisionOutcome {
    let candidate = position + displacement;
    let agent_box = agent.aabb_at(&candidate);

    for (idx, obstacle) in obstacles.iter().enumerate() {
        let obstacle_box = obstacle.world_aabb();
        if agent_box.intersects(&obstacle_box) {
            return CollisionOutcome::Blocked {
                normal: nearest_face_normal(&obstacle_box, &candidate),
                obstacle: idx,
            };
        }
    }

    CollisionOutcome::Clear
}

/// Pick the face of `aabb` closest to `point`.
///
/// Computes the six signed face distances
/// `(max.x - p.x, p.x - min.x, max.y - p.y, p.y - min.y, max.z - p.z, p.z - min.z)`
/// and returns the direction of the smallest. Ties keep the earliest entry in
/// [`ContactNormal::ALL`] order. This approximates the nearest face; it is not a
/// penetration-depth computation, and for a point outside the box a negative distance wins.
pub fn nearest_face_normal(aabb: &Aabb, point: &Vec3) -> ContactNormal {
    let distances = [
        aabb.maxs.x - point.x,
        point.x - aabb.mins.x,
        aabb.maxs.y - point.y,
        point.y - aabb.mins.y,
        aabb.maxs.z - point.z,
        point.z - aabb.mins.z,
    ];

    let mut best = 0;
    for (i, &d) in distances.iter().enumerate().skip(1) {
        // Strict comparison keeps the first minimum.
        if d < distances[best] {
            best = i;
        }
    }

    ContactNormal::ALL[best]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::types::Point3;

    fn aabb(min: [f32; 3], max: [f32; 3]) -> Aabb {
        Aabb::new(Point3::new(min[0], min[1], min[2]), Point3::new(max[0], max[1], max[2]))
    }

    fn wall() -> Aabb {
        aabb([3.0, 0.0, -1.0], [5.0, 2.0, 1.0])
    }

    #[test]
    fn no_obstacles_is_always_clear() {
        let outcome = check_collision::<Aabb>(
            &Vec3::zeros(),
            &Vec3::new(100.0, 0.0, 0.0),
            &AgentVolume::default(),
            &[],
        );
        assert_eq!(outcome, CollisionOutcome::Clear);
    }

    #[test]
    fn separated_candidate_is_clear() {
        let outcome = check_collision(
            &Vec3::new(0.0, 1.0, 0.0),
            &Vec3::new(2.4, 0.0, 0.0),
            &AgentVolume::default(),
            &[wall()],
        );
        assert!(!outcome.is_blocked());
    }

    #[test]
    fn overlap_reports_the_near_face() {
        // Candidate x = 3.2, agent box x in [3.0, 3.4].
        let outcome = check_collision(
            &Vec3::new(2.4, 1.0, 0.0),
            &Vec3::new(0.8, 0.0, 0.0),
            &AgentVolume::default(),
            &[wall()],
        );
        assert_eq!(
            outcome,
            CollisionOutcome::Blocked {
                normal: ContactNormal::NegX,
                obstacle: 0,
            }
        );
    }

    #[test]
    fn touching_faces_count_as_overlap() {
        // Agent box max x lands exactly on the wall's min x.
        let outcome = check_collision(
            &Vec3::new(2.0, 1.0, 0.0),
            &Vec3::new(0.75, 0.0, 0.0),
            &AgentVolume::new(0.5, 1.6, 0.4),
            &[wall()],
        );
        assert!(outcome.is_blocked());
    }

    #[test]
    fn first_listed_obstacle_wins() {
        // Both boxes overlap the agent at (3.2, 1, 0); each yields a different face.
        let thin = aabb([3.1, -10.0, 0.15], [3.3, 10.0, 10.0]);

        let agent = AgentVolume::default();
        let pos = Vec3::new(2.4, 1.0, 0.0);
        let disp = Vec3::new(0.8, 0.0, 0.0);

        let wall_first = check_collision(&pos, &disp, &agent, &[wall(), thin]);
        assert_eq!(wall_first.normal(), Some(ContactNormal::NegX));

        let thin_first = check_collision(&pos, &disp, &agent, &[thin, wall()]);
        assert_eq!(
            thin_first,
            CollisionOutcome::Blocked {
                normal: ContactNormal::NegZ,
                obstacle: 0,
            }
        );
    }

    #[test]
    fn obstacle_index_points_into_the_slice() {
        let far = aabb([100.0, 0.0, 0.0], [101.0, 1.0, 1.0]);
        let outcome = check_collision(
            &Vec3::new(2.4, 1.0, 0.0),
            &Vec3::new(0.8, 0.0, 0.0),
            &AgentVolume::default(),
            &[far, far, wall()],
        );
        assert_eq!(
            outcome,
            CollisionOutcome::Blocked {
                normal: ContactNormal::NegX,
                obstacle: 2,
            }
        );
    }

    #[test]
    fn nearest_face_ties_resolve_in_fixed_order() {
        // Centre of a cube: all six distances equal, +X comes first.
        let cube = aabb([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]);
        assert_eq!(nearest_face_normal(&cube, &Vec3::zeros()), ContactNormal::PosX);

        // Equal -Y and +Z distances: -Y is enumerated first.
        let p = Vec3::new(0.0, -0.5, 0.5);
        assert_eq!(nearest_face_normal(&cube, &p), ContactNormal::NegY);
    }

    #[test]
    fn nearest_face_prefers_the_outside_face() {
        // Point just outside the -X face: its distance is negative.
        let p = Vec3::new(2.9, 1.0, 0.8);
        assert_eq!(nearest_face_normal(&wall(), &p), ContactNormal::NegX);

        let above = Vec3::new(4.0, 2.5, 0.0);
        assert_eq!(nearest_face_normal(&wall(), &above), ContactNormal::PosY);
    }
}
