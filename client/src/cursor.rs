use crate::input::InputAction;
use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused},
};
use leafwing_input_manager::prelude::ActionState;

/// Whether pointer motion should drive the look direction.
#[derive(Resource, Default, Debug)]
pub struct PointerLock(pub bool);

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<PointerLock>();

    app.add_systems(Update, (toggle_lock, release_on_focus_loss));

    // Apply when the desired lock state changes
    app.add_systems(
        Update,
        apply_lock
            .run_if(resource_changed::<PointerLock>)
            .after(toggle_lock)
            .after(release_on_focus_loss),
    );
}

fn toggle_lock(actions: Res<ActionState<InputAction>>, mut lock: ResMut<PointerLock>) {
    if actions.just_pressed(&InputAction::GrabCursor) && !lock.0 {
        lock.0 = true;
    } else if actions.just_pressed(&InputAction::ReleaseCursor) && lock.0 {
        lock.0 = false;
    }
}

fn release_on_focus_loss(mut messages: MessageReader<WindowFocused>, mut lock: ResMut<PointerLock>) {
    for message in messages.read() {
        if !message.focused && lock.0 {
            lock.0 = false;
        }
    }
}

fn apply_lock(lock: Res<PointerLock>, mut cursor: Single<&mut CursorOptions, With<PrimaryWindow>>) {
    if lock.0 {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
        debug!("pointer locked");
    } else {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
        debug!("pointer released");
    }
}
