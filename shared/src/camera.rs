//! First-person camera facade.
//!
//! [`Camera`] owns the agent pose (position + [`Orientation`]) and turns movement intent
//! into world-space displacements that go through the collision integrator. Obstacles are
//! borrowed per call, so the camera never holds on to scene state between frames.
//!
//! Time-step scaling is the caller's job: pass `speed = units_per_second * dt`.

use crate::{
    collision::{AgentVolume, Bounded, Iso, MoveResult, MoveSettings, Point3, Vec3, try_move},
    constants::{DEFAULT_SPAWN, DEFAULT_YAW},
    orientation::{Orientation, OrientationSettings},
};

/// Everything a [`Camera`] needs besides its pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub movement: MoveSettings,
    pub agent: AgentVolume,
    pub orientation: OrientationSettings,
    /// When set, the vertical coordinate is pinned to this height after every move.
    pub ground_lock: Option<f32>,
}

impl CameraSettings {
    #[inline]
    pub fn with_defaults() -> Self {
        Self {
            movement: MoveSettings::with_defaults(),
            agent: AgentVolume::default(),
            orientation: OrientationSettings::with_defaults(),
            ground_lock: None,
        }
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec3,
    orientation: Orientation,
    settings: CameraSettings,
    view: Iso,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, settings: CameraSettings) -> Self {
        let mut camera = Self {
            position,
            orientation: Orientation::new(yaw, pitch, settings.orientation),
            settings,
            view: Iso::identity(),
        };
        camera.apply_ground_lock();
        camera.refresh_view();
        camera
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    #[inline]
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// World-to-view transform, recomputed whenever the pose changes.
    #[inline]
    pub fn view(&self) -> &Iso {
        &self.view
    }

    #[inline]
    pub fn view_matrix(&self) -> nalgebra::Matrix4<f32> {
        self.view.to_homogeneous()
    }

    /// Point one unit ahead along the look direction.
    #[inline]
    pub fn look_target(&self) -> Vec3 {
        self.position + self.orientation.look_direction()
    }

    /// Teleport without collision.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.apply_ground_lock();
        self.refresh_view();
    }

    pub fn set_ground_lock(&mut self, height: Option<f32>) {
        self.settings.ground_lock = height;
        self.apply_ground_lock();
        self.refresh_view();
    }

    /// Turn to face a world point on the XZ plane, keeping pitch.
    pub fn face_toward(&mut self, point: &Vec3) {
        self.orientation.face_planar(&(point - self.position));
        self.refresh_view();
    }

    pub fn move_forward<B: Bounded>(&mut self, speed: f32, obstacles: &[B]) -> MoveResult {
        let displacement = self.orientation.planar_forward() * speed;
        self.move_by(displacement, obstacles)
    }

    pub fn move_backward<B: Bounded>(&mut self, speed: f32, obstacles: &[B]) -> MoveResult {
        self.move_forward(-speed, obstacles)
    }

    pub fn move_left<B: Bounded>(&mut self, speed: f32, obstacles: &[B]) -> MoveResult {
        let displacement = self.orientation.planar_left() * speed;
        self.move_by(displacement, obstacles)
    }

    pub fn move_right<B: Bounded>(&mut self, speed: f32, obstacles: &[B]) -> MoveResult {
        self.move_left(-speed, obstacles)
    }

    /// Run an arbitrary world-space displacement through the integrator.
    ///
    /// With a ground lock the vertical component is dropped first, so collisions are
    /// tested at the height the agent ends up at.
    pub fn move_by<B: Bounded>(
        &mut self,
        mut displacement: Vec3,
        obstacles: &[B],
    ) -> MoveResult {
        if self.settings.ground_lock.is_some() {
            displacement.y = 0.0;
        }
        let result = try_move(
            self.position,
            displacement,
            &self.settings.agent,
            obstacles,
            self.settings.movement,
        );
        self.position = result.end_pos;
        self.apply_ground_lock();
        self.refresh_view();
        result
    }

    pub fn pan_left(&mut self, alpha: f32) {
        self.orientation.pan_left(alpha);
        self.refresh_view();
    }

    pub fn pan_right(&mut self, alpha: f32) {
        self.orientation.pan_right(alpha);
        self.refresh_view();
    }

    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.orientation.rotate(delta_x, delta_y);
        self.refresh_view();
    }

    fn apply_ground_lock(&mut self) {
        if let Some(height) = self.settings.ground_lock {
            self.position.y = height;
        }
    }

    fn refresh_view(&mut self) {
        let eye = Point3::from(self.position);
        let target = Point3::from(self.look_target());
        // Pitch never reaches the poles, so +Y is never parallel to the look direction.
        self.view = Iso::look_at_rh(&eye, &target, &Vec3::y());
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vec3::from(DEFAULT_SPAWN),
            DEFAULT_YAW,
            0.0,
            CameraSettings::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{Aabb, aabb_from_corners};
    use rapier3d::parry::bounding_volume::BoundingVolume;

    const EPS: f32 = 1.0e-4;
    const NO_OBSTACLES: &[Aabb] = &[];

    fn camera_at(position: Vec3, yaw: f32) -> Camera {
        Camera::new(position, yaw, 0.0, CameraSettings::default())
    }

    #[test]
    fn default_camera_spawns_at_eye_height() {
        let camera = Camera::default();
        assert!((camera.position() - Vec3::new(0.0, 1.6, 5.0)).norm() < EPS);
        assert!((camera.orientation().yaw() + std::f32::consts::FRAC_PI_2).abs() < EPS);
        assert_eq!(camera.orientation().pitch(), 0.0);
    }

    #[test]
    fn movement_follows_planar_basis() {
        let mut camera = camera_at(Vec3::zeros(), 0.0);

        camera.move_forward(1.0, NO_OBSTACLES);
        assert!((camera.position() - Vec3::new(0.0, 0.0, 1.0)).norm() < EPS);

        camera.move_left(2.0, NO_OBSTACLES);
        assert!((camera.position() - Vec3::new(2.0, 0.0, 1.0)).norm() < EPS);

        camera.move_right(2.0, NO_OBSTACLES);
        camera.move_backward(1.0, NO_OBSTACLES);
        assert!(camera.position().norm() < EPS);
    }

    #[test]
    fn looking_up_does_not_lift_the_walker() {
        let mut camera = camera_at(Vec3::new(0.0, 1.6, 0.0), 0.0);
        camera.rotate(0.0, -500.0);
        camera.move_forward(3.0, NO_OBSTACLES);
        assert!((camera.position().y - 1.6).abs() < EPS);
        assert!((camera.position().z - 3.0).abs() < EPS);
    }

    #[test]
    fn zero_speed_is_a_noop() {
        let wall = aabb_from_corners(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        // Deliberately start inside the box: nothing is tested for a zero move.
        let mut camera = camera_at(Vec3::zeros(), 0.0);
        let result = camera.move_forward(0.0, &[wall]);
        assert!(result.last_hit.is_none());
        assert_eq!(camera.position(), Vec3::zeros());
    }

    #[test]
    fn walking_into_a_wall_stops_short() {
        // Facing +X (yaw = π/2) toward the [3,5] x [0,2] x [-1,1] wall.
        let wall = aabb_from_corners(Vec3::new(3.0, 0.0, -1.0), Vec3::new(5.0, 2.0, 1.0));
        let mut camera = camera_at(Vec3::new(0.0, 1.0, 0.0), std::f32::consts::FRAC_PI_2);

        let result = camera.move_forward(4.0, &[wall]);
        assert!(result.last_hit.is_some());
        assert!(camera.position().x < 2.8 + EPS);

        for _ in 0..20 {
            camera.move_forward(4.0, &[wall]);
        }
        let agent_box = camera.settings().agent.aabb_at(&camera.position());
        assert!(!agent_box.intersects(&wall));
    }

    #[test]
    fn ground_lock_pins_height() {
        let mut camera = camera_at(Vec3::new(0.0, 3.0, 0.0), 0.0);
        camera.set_ground_lock(Some(1.6));
        assert!((camera.position().y - 1.6).abs() < EPS);

        camera.set_position(Vec3::new(5.0, 9.0, 5.0));
        assert!((camera.position().y - 1.6).abs() < EPS);

        camera.move_by(Vec3::new(0.0, 4.0, 1.0), NO_OBSTACLES);
        assert!((camera.position().y - 1.6).abs() < EPS);
        assert!((camera.position().z - 6.0).abs() < EPS);

        camera.set_ground_lock(None);
        camera.move_by(Vec3::new(0.0, 4.0, 0.0), NO_OBSTACLES);
        assert!((camera.position().y - 5.6).abs() < EPS);
    }

    #[test]
    fn ground_lock_never_leaves_agent_inside_low_block() {
        // Block top at 1.5 is below the unlocked path, which climbs to y = 5.
        let block = aabb_from_corners(Vec3::new(3.0, 0.0, -1.0), Vec3::new(5.0, 1.5, 1.0));
        let mut camera = camera_at(Vec3::zeros(), 0.0);
        camera.set_ground_lock(Some(1.0));

        let result = camera.move_by(Vec3::new(3.5, 4.0, 0.0), &[block]);
        assert!(result.last_hit.is_some());
        assert!((camera.position().y - 1.0).abs() < EPS);

        let agent_box = camera.settings().agent.aabb_at(&camera.position());
        assert!(!agent_box.intersects(&block));
    }

    #[test]
    fn view_maps_look_target_onto_negative_z() {
        let mut camera = camera_at(Vec3::new(3.0, 1.6, -2.0), 0.8);
        camera.rotate(40.0, 120.0);

        let target = Point3::from(camera.look_target());
        let in_view = camera.view().transform_point(&target);
        assert!((in_view - Point3::new(0.0, 0.0, -1.0)).norm() < EPS);

        let eye = Point3::from(camera.position());
        assert!(camera.view().transform_point(&eye).coords.norm() < EPS);
    }

    #[test]
    fn view_tracks_every_pose_change() {
        let mut camera = camera_at(Vec3::zeros(), 0.0);
        let initial = *camera.view();

        camera.pan_left(0.3);
        let panned = *camera.view();
        assert!((panned.to_homogeneous() - initial.to_homogeneous()).norm() > 1.0e-3);

        camera.move_forward(1.0, NO_OBSTACLES);
        let moved = *camera.view();
        assert!((moved.to_homogeneous() - panned.to_homogeneous()).norm() > 1.0e-3);
        assert_eq!(camera.view_matrix(), moved.to_homogeneous());
    }

    #[test]
    fn face_toward_turns_to_point() {
        let mut camera = camera_at(Vec3::new(1.0, 1.6, 1.0), 0.0);
        camera.face_toward(&Vec3::new(1.0, 0.0, -9.0));
        let forward = camera.orientation().planar_forward();
        assert!((forward - Vec3::new(0.0, 0.0, -1.0)).norm() < EPS);
    }
}
