use crate::level::{BLOCK_SIZE, LAYOUT, block_centers};
use bevy::prelude::*;
use shared::{BoundsCache, ProximityTrigger, StaticBox};

const FLOOR_HEIGHT: f32 = -5.0;
const FLOOR_SIZE: f32 = 2000.0;

const WELL_POSITION: Vec3 = Vec3::new(-40.0, -5.0, -5.0);
const WELL_RADIUS: f32 = 20.0;

const CLOUD_HEIGHT: f32 = 300.0;
/// Units per second along +X.
const CLOUD_DRIFT_SPEED: f32 = 42.0;
/// Clouds past `+CLOUD_WRAP` reappear at `-CLOUD_WRAP`.
const CLOUD_WRAP: f32 = 1500.0;
const CLOUD_COUNT: usize = 12;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Obstacles>();
    app.init_resource::<Interactables>();

    app.add_systems(Startup, (setup, spawn_blocks, spawn_clouds));
    app.add_systems(Update, drift_clouds);
}

/// Static collision geometry of the level, in spawn order.
#[derive(Resource, Default)]
pub struct Obstacles {
    pub boxes: Vec<StaticBox>,
    pub cache: BoundsCache,
}

impl Obstacles {
    pub fn push(&mut self, obstacle: StaticBox) {
        self.boxes.push(obstacle);
        self.cache.refresh(&self.boxes);
    }

    pub fn extend(&mut self, obstacles: impl IntoIterator<Item = StaticBox>) {
        self.boxes.extend(obstacles);
        self.cache.refresh(&self.boxes);
    }
}

/// Named areas that react once when the player walks into them.
#[derive(Resource)]
pub struct Interactables {
    pub well: ProximityTrigger,
}

impl Default for Interactables {
    fn default() -> Self {
        Self {
            well: ProximityTrigger::new(
                shared::Vec3::new(WELL_POSITION.x, WELL_POSITION.y, WELL_POSITION.z),
                WELL_RADIUS,
            ),
        }
    }
}

#[derive(Component)]
pub struct Cloud;

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("World setup");

    commands.spawn((
        // Ground
        Transform::from_xyz(0.0, FLOOR_HEIGHT, 0.0),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE).build())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::linear_rgb(0.2, 0.3, 0.25),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
    ));

    // Well
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(3.0, 2.0))),
        MeshMaterial3d(materials.add(Color::srgb_u8(110, 104, 96))),
        Transform::from_translation(WELL_POSITION + Vec3::Y),
    ));

    // Sun
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(100.0, 300.0, 150.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_blocks(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut obstacles: ResMut<Obstacles>,
) {
    let mesh = meshes.add(Cuboid::new(BLOCK_SIZE, BLOCK_SIZE, BLOCK_SIZE));
    let palette: Vec<_> = (0..=9u8)
        .map(|kind| materials.add(block_color(kind)))
        .collect();

    let blocks = block_centers(LAYOUT);
    let mut boxes = Vec::with_capacity(blocks.len());
    for (center, kind) in blocks {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(palette[kind as usize].clone()),
            Transform::from_xyz(center.x, center.y, center.z),
        ));
        boxes.push(StaticBox::cube(center, BLOCK_SIZE));
    }

    obstacles.extend(boxes);
    info!("Spawned {} wall blocks", obstacles.boxes.len());
}

fn block_color(kind: u8) -> Color {
    match kind {
        1 => Color::srgb_u8(150, 90, 60),
        3 => Color::srgb_u8(90, 90, 100),
        7 => Color::srgb_u8(200, 190, 170),
        8 => Color::srgb_u8(180, 170, 150),
        9 => Color::srgb_u8(160, 150, 135),
        _ => Color::srgb_u8(170, 170, 170),
    }
}

fn spawn_clouds(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(Sphere::new(40.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.85),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let spacing = 2.0 * CLOUD_WRAP / CLOUD_COUNT as f32;
    for i in 0..CLOUD_COUNT {
        let x = -CLOUD_WRAP + i as f32 * spacing;
        let z = ((i * 7) % CLOUD_COUNT) as f32 * 120.0 - 700.0;
        commands.spawn((
            Cloud,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(x, CLOUD_HEIGHT, z).with_scale(Vec3::new(2.5, 0.6, 1.5)),
        ));
    }
}

fn drift_clouds(mut clouds: Query<&mut Transform, With<Cloud>>, time: Res<Time>) {
    let step = CLOUD_DRIFT_SPEED * time.delta_secs();
    for mut transform in &mut clouds {
        transform.translation.x = wrap_drift(transform.translation.x, step, CLOUD_WRAP);
    }
}

/// Advance `x` by `step`, wrapping to `-limit` once it passes `limit`.
fn wrap_drift(x: f32, step: f32, limit: f32) -> f32 {
    let next = x + step;
    if next > limit { -limit } else { next }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clouds_wrap_past_the_limit() {
        assert_eq!(wrap_drift(0.0, 0.7, 1500.0), 0.7);
        assert_eq!(wrap_drift(1500.0, 0.0, 1500.0), 1500.0);
        assert_eq!(wrap_drift(1499.9, 0.7, 1500.0), -1500.0);
    }

    #[test]
    fn obstacles_keep_cache_in_sync() {
        let mut obstacles = Obstacles::default();
        obstacles.push(StaticBox::cube(shared::Vec3::zeros(), BLOCK_SIZE));
        obstacles.extend([
            StaticBox::cube(shared::Vec3::new(6.0, 0.0, 0.0), BLOCK_SIZE),
            StaticBox::cube(shared::Vec3::new(12.0, 0.0, 0.0), BLOCK_SIZE),
        ]);
        assert_eq!(obstacles.cache.len(), 3);
        assert_eq!(obstacles.cache.as_slice()[2].mins.x, 9.0);
    }

    #[test]
    fn well_trigger_covers_the_courtyard_centre() {
        let mut interactables = Interactables::default();
        assert!(!interactables.well.check(&shared::Vec3::new(0.0, 0.0, 0.0)));
        assert!(interactables.well.check(&shared::Vec3::new(-40.0, 0.0, 0.0)));
        assert!(!interactables.well.check(&shared::Vec3::new(-40.0, 0.0, 0.0)));
    }
}
