use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    PanLeft,
    PanRight,
    Sprint,
    #[actionlike(DualAxis)]
    Look,
    GrabCursor,
    ReleaseCursor,
}

impl InputAction {
    pub const MOVEMENT: [InputAction; 4] = [
        InputAction::MoveForward,
        InputAction::MoveBackward,
        InputAction::MoveLeft,
        InputAction::MoveRight,
    ];
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert(InputAction::MoveForward, KeyCode::KeyW);
    input_map.insert(InputAction::MoveBackward, KeyCode::KeyS);
    input_map.insert(InputAction::MoveLeft, KeyCode::KeyA);
    input_map.insert(InputAction::MoveRight, KeyCode::KeyD);
    input_map.insert(InputAction::PanLeft, KeyCode::KeyQ);
    input_map.insert(InputAction::PanRight, KeyCode::KeyE);
    input_map.insert(InputAction::Sprint, KeyCode::Space);
    input_map.insert_dual_axis(InputAction::Look, MouseMove::default());
    input_map.insert(InputAction::GrabCursor, MouseButton::Left);
    input_map.insert(InputAction::ReleaseCursor, KeyCode::Escape);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}
