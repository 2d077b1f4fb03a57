use crate::player::PlayerStamina;
use bevy::prelude::*;

const BAR_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 12.0;
const BAR_MARGIN: f32 = 20.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_stamina_bar);
    app.add_systems(
        Update,
        update_stamina_bar.run_if(resource_changed::<PlayerStamina>),
    );
}

/// Inner node whose width tracks the stamina fill level.
#[derive(Component)]
struct StaminaFill;

fn spawn_stamina_bar(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(BAR_MARGIN),
                left: Val::Px(BAR_MARGIN),
                width: Val::Px(BAR_WIDTH),
                height: Val::Px(BAR_HEIGHT),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.07, 0.11, 0.18, 0.72)),
            BorderColor::all(Color::srgba(0.32, 0.38, 0.58, 1.0)),
        ))
        .with_children(|parent| {
            parent.spawn((
                StaminaFill,
                Node {
                    width: fill_width(1.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.35, 0.8, 0.45)),
            ));
        });
}

fn update_stamina_bar(
    stamina: Res<PlayerStamina>,
    mut fill: Single<&mut Node, With<StaminaFill>>,
) {
    fill.width = fill_width(stamina.0.ratio());
}

/// Width of the fill node for a ratio in `[0, 1]`.
fn fill_width(ratio: f32) -> Val {
    Val::Percent(ratio.clamp(0.0, 1.0) * 100.0)
}
