use crate::{
    camera::{FirstPerson, to_bevy},
    cursor::PointerLock,
    input::InputAction,
    player::PlayerStamina,
    world::{Interactables, Obstacles},
};
use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use shared::{Aabb, Camera};

/// Walking speed in world units per second.
const WALK_SPEED: f32 = 18.0;
/// Q/E turn rate in radians per second, before rotation sensitivity.
const PAN_RATE: f32 = 0.6;

/// Buttons held this frame, decoupled from the input backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub pan_left: bool,
    pub pan_right: bool,
}

impl MoveIntent {
    fn from_actions(actions: &ActionState<InputAction>) -> Self {
        Self {
            forward: actions.pressed(&InputAction::MoveForward),
            backward: actions.pressed(&InputAction::MoveBackward),
            left: actions.pressed(&InputAction::MoveLeft),
            right: actions.pressed(&InputAction::MoveRight),
            pan_left: actions.pressed(&InputAction::PanLeft),
            pan_right: actions.pressed(&InputAction::PanRight),
        }
    }

    fn is_walking(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

pub(super) fn handle_look(
    actions: Res<ActionState<InputAction>>,
    lock: Res<PointerLock>,
    mut camera: Single<&mut FirstPerson>,
) {
    if !lock.0 {
        return;
    }
    let delta = actions.axis_pair(&InputAction::Look);
    if delta == Vec2::ZERO {
        return;
    }
    camera.0.rotate(delta.x, delta.y);
}

pub(super) fn handle_movement(
    actions: Res<ActionState<InputAction>>,
    obstacles: Res<Obstacles>,
    mut stamina: ResMut<PlayerStamina>,
    mut camera: Single<&mut FirstPerson>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    let intent = MoveIntent::from_actions(&actions);
    let sprint_held = actions.pressed(&InputAction::Sprint);
    let multiplier = stamina.0.update(sprint_held, intent.is_walking(), dt);

    if intent == MoveIntent::default() {
        return;
    }

    apply_intent(
        &mut camera.0,
        intent,
        WALK_SPEED * dt * multiplier,
        PAN_RATE * dt,
        obstacles.cache.as_slice(),
    );
}

/// Apply one frame of held buttons to `camera`. Opposing buttons cancel each other out.
pub(super) fn apply_intent(
    camera: &mut Camera,
    intent: MoveIntent,
    speed: f32,
    pan_alpha: f32,
    obstacles: &[Aabb],
) {
    if intent.forward {
        camera.move_forward(speed, obstacles);
    }
    if intent.backward {
        camera.move_backward(speed, obstacles);
    }
    if intent.left {
        camera.move_left(speed, obstacles);
    }
    if intent.right {
        camera.move_right(speed, obstacles);
    }
    if intent.pan_left {
        camera.pan_left(pan_alpha);
    }
    if intent.pan_right {
        camera.pan_right(pan_alpha);
    }
}

pub(super) fn check_interactables(
    camera: Single<&FirstPerson, Changed<FirstPerson>>,
    mut interactables: ResMut<Interactables>,
) {
    let position = camera.0.position();
    if interactables.well.check(&position) {
        info!("Reached the well at {:?}", to_bevy(position));
    }
}
