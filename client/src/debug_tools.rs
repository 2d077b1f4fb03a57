//! Debug/performance tooling for native dev builds.
//!
//! This plugin is compiled/used only when the caller gates it behind `dev_native`
//! (recommended: `#[cfg(feature = "dev_native")] mod debug_tools;` in `main.rs`).

use crate::{
    camera::{FirstPerson, to_bevy},
    world::Obstacles,
};
use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;

const TOGGLE_COLLIDERS: KeyCode = KeyCode::F3;

/// Whether obstacle and agent boxes are drawn.
#[derive(Resource, Default)]
struct ShowColliders(bool);

/// Add debug/perf tooling (intended for `dev_native` builds only).
pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.init_resource::<ShowColliders>();
    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(
        Update,
        (
            toggle_colliders,
            draw_colliders.run_if(|show: Res<ShowColliders>| show.0),
        )
            .chain(),
    );
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

fn toggle_colliders(keys: Res<ButtonInput<KeyCode>>, mut show: ResMut<ShowColliders>) {
    if keys.just_pressed(TOGGLE_COLLIDERS) {
        show.0 = !show.0;
        debug!("collider gizmos: {}", show.0);
    }
}

fn draw_colliders(
    obstacles: Res<Obstacles>,
    camera: Single<&FirstPerson>,
    mut gizmos: Gizmos,
) {
    for aabb in obstacles.cache.as_slice() {
        let center = to_bevy(aabb.center().coords);
        let size = to_bevy(aabb.extents());
        gizmos.cuboid(
            Transform::from_translation(center).with_scale(size),
            Color::srgb(1.0, 0.3, 0.2),
        );
    }

    let agent = agent_box(&camera.0);
    gizmos.cuboid(
        Transform::from_translation(to_bevy(agent.center().coords))
            .with_scale(to_bevy(agent.extents())),
        Color::srgb(0.2, 1.0, 0.4),
    );
}

/// Agent box around the eye, where collisions are tested.
fn agent_box(pose: &shared::Camera) -> shared::Aabb {
    pose.settings().agent.aabb_at(&pose.position())
}
