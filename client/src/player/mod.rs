use bevy::prelude::*;
use shared::Stamina;

mod input;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<PlayerStamina>();

    // Look first so movement this frame uses the updated heading.
    app.add_systems(
        Update,
        (
            input::handle_look,
            input::handle_movement,
            input::check_interactables,
        )
            .chain(),
    );
}

/// Sprint budget of the local walker.
#[derive(Resource, Default, Debug)]
pub struct PlayerStamina(pub Stamina);
