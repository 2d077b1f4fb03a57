use bevy::{camera::Exposure, prelude::*};
use shared::{CameraSettings, DEFAULT_YAW};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(PostUpdate, sync_camera_transform);
}

/// Spawn point in the corridor south of the courtyard.
const SPAWN: Vec3 = Vec3::new(120.0, 0.0, 0.0);
/// Eye height the walker is pinned to.
const EYE_HEIGHT: f32 = 0.0;

/// Drives the render camera from the collision-aware first-person pose.
#[derive(Component)]
pub struct FirstPerson(pub shared::Camera);

fn add_camera(mut commands: Commands) {
    let settings = CameraSettings {
        ground_lock: Some(EYE_HEIGHT),
        ..CameraSettings::with_defaults()
    };
    let first_person = shared::Camera::new(to_shared(SPAWN), DEFAULT_YAW, 0.0, settings);
    let transform = pose_transform(&first_person);
    info!("Camera spawned at {:?}", transform.translation);

    commands.spawn((
        FirstPerson(first_person),
        Exposure { ev100: 13.0 },
        bevy::core_pipeline::tonemapping::Tonemapping::AcesFitted,
        Camera3d::default(),
        transform,
        DistanceFog {
            color: Color::srgba(0.35, 0.48, 0.66, 1.0),
            directional_light_color: Color::srgba(1.0, 0.95, 0.85, 0.5),
            directional_light_exponent: 30.0,
            falloff: FogFalloff::from_visibility_colors(
                1000.0, // Fog distance
                Color::srgb(0.35, 0.5, 0.66),
                Color::srgb(0.8, 0.8, 0.7),
            ),
        },
    ));
}

fn sync_camera_transform(
    mut cameras: Query<(&FirstPerson, &mut Transform), Changed<FirstPerson>>,
) {
    for (first_person, mut transform) in &mut cameras {
        *transform = pose_transform(&first_person.0);
    }
}

/// World transform of the render camera: the inverse of the facade's view transform.
fn pose_transform(camera: &shared::Camera) -> Transform {
    let world_from_view = camera.view().inverse();
    let q = world_from_view.rotation;
    Transform {
        translation: to_bevy(world_from_view.translation.vector),
        rotation: Quat::from_xyzw(q.i, q.j, q.k, q.w),
        ..default()
    }
}

#[inline]
pub fn to_bevy(v: shared::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn to_shared(v: Vec3) -> shared::Vec3 {
    shared::Vec3::new(v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_transform_looks_along_pose() {
        let mut camera = shared::Camera::new(
            to_shared(SPAWN),
            DEFAULT_YAW,
            0.0,
            CameraSettings::with_defaults(),
        );
        camera.rotate(0.0, -200.0);

        let transform = pose_transform(&camera);
        let expected = to_bevy(camera.orientation().look_direction());
        assert!((transform.forward().as_vec3() - expected).length() < 1.0e-4);
        assert!((transform.translation - SPAWN).length() < 1.0e-3);
        assert!(transform.up().y > 0.0);
    }

    #[test]
    fn spawn_faces_the_courtyard() {
        let camera = shared::Camera::new(
            to_shared(SPAWN),
            DEFAULT_YAW,
            0.0,
            CameraSettings::with_defaults(),
        );
        let forward = to_bevy(camera.orientation().planar_forward());
        assert!((forward - Vec3::NEG_X).length() < 1.0e-5);
    }
}
