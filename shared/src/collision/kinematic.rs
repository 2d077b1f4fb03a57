use super::{
    bounds::Bounded,
    narrow_phase::check_collision,
    settings::{MIN_MOVE_SQ, MoveSettings},
    types::{AgentVolume, CollisionOutcome, ContactNormal, MoveResult, Vec3},
};

/// Sub-stepped move-and-slide for the agent box against a set of static obstacles.
///
/// Algorithm:
/// - Split `displacement` into `settings.sub_steps` equal sub-steps.
/// - Commit each unobstructed sub-step.
/// - On the first obstructed sub-step, project it onto the contact plane, scale it by
///   `slide_multiplier`, and try that slide in `slide_steps` fine steps, stopping at the
///   first blocked one. The attempt then ends; remaining sub-steps along the original
///   direction are not retried.
///
/// A zero displacement returns `position` without touching the obstacles.
pub fn try_move<B: Bounded>(
    position: Vec3,
    displacement: Vec3,
    agent: &AgentVolume,
    obstacles: &[B],
    settings: MoveSettings,
) -> MoveResult {
    if displacement.norm_squared() <= MIN_MOVE_SQ {
        return MoveResult::unobstructed(position);
    }

    let settings = settings.sanitized();
    let step = displacement / settings.sub_steps as f32;
    let mut pos = position;

    for i in 0..settings.sub_steps {
        let normal = match check_collision(&pos, &step, agent, obstacles) {
            CollisionOutcome::Clear => {
                pos += step;
                continue;
            }
            CollisionOutcome::Blocked { normal, obstacle } => {
                log::trace!("move blocked at sub-step {i} by obstacle {obstacle}: {normal:?}");
                normal
            }
        };

        let slide = slide_vector(&step, normal, settings.slide_multiplier);
        let slid = slide_along(&mut pos, slide, agent, obstacles, settings.slide_steps);

        return MoveResult {
            end_pos: pos,
            last_hit: Some(normal),
            slid,
        };
    }

    MoveResult::unobstructed(pos)
}

/// Remove the normal-aligned component of `step` and scale what remains.
///
/// A step that points straight into the face yields a zero vector.
#[inline]
pub fn slide_vector(step: &Vec3, normal: ContactNormal, multiplier: f32) -> Vec3 {
    let n = normal.to_vector();
    (step - n * step.dot(&n)) * multiplier
}

/// Attempt `slide` in `fine_steps` equal pieces, committing each clear piece.
///
/// Returns whether any piece was committed.
fn slide_along<B: Bounded>(
    pos: &mut Vec3,
    slide: Vec3,
    agent: &AgentVolume,
    obstacles: &[B],
    fine_steps: u32,
) -> bool {
    if slide.norm_squared() <= MIN_MOVE_SQ {
        return false;
    }

    let fine = slide / fine_steps as f32;
    let mut moved = false;

    for _ in 0..fine_steps {
        if check_collision(pos, &fine, agent, obstacles).is_blocked() {
            break;
        }
        *pos += fine;
        moved = true;
    }

    moved
}
