//! Yaw/pitch look controller.
//!
//! # Conventions
//! - +Y is up. Yaw rotates about +Y, pitch tilts the look direction toward +Y.
//! - `yaw = 0` looks down +Z; increasing yaw turns toward +X (to the left of a viewer
//!   facing +Z in a right-handed frame).
//! - The look direction is `(sin(yaw)·cos(pitch), sin(pitch), cos(yaw)·cos(pitch))`.
//! - Movement uses the yaw-only planar basis so walking and strafing stay level no matter
//!   where the camera is looking.
//!
//! Pitch is clamped after every update; yaw is left unbounded and wraps through the
//! trigonometric functions.

use crate::{
    collision::Vec3,
    constants::{DEFAULT_YAW, MOUSE_SENSITIVITY, PITCH_MARGIN, ROTATION_SENSITIVITY},
    utils::yaw_facing,
};
use std::f32::consts::FRAC_PI_2;

/// Sensitivities and limits for an [`Orientation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationSettings {
    /// Radians per unit of pointer delta.
    pub mouse_sensitivity: f32,
    /// Multiplier on `pan_left`/`pan_right` angles.
    pub rotation_sensitivity: f32,
    /// Gap kept between the pitch limit and ±π/2.
    pub pitch_margin: f32,
}

impl OrientationSettings {
    #[inline]
    pub const fn with_defaults() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            rotation_sensitivity: ROTATION_SENSITIVITY,
            pitch_margin: PITCH_MARGIN,
        }
    }

    /// Largest allowed pitch magnitude. Always strictly below π/2.
    #[inline]
    pub fn max_pitch(&self) -> f32 {
        let margin = if self.pitch_margin.is_finite() {
            self.pitch_margin.clamp(f32::EPSILON, FRAC_PI_2)
        } else {
            PITCH_MARGIN
        };
        FRAC_PI_2 - margin
    }
}

impl Default for OrientationSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Orientation {
    yaw: f32,
    pitch: f32,
    settings: OrientationSettings,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32, settings: OrientationSettings) -> Self {
        let mut orientation = Self {
            yaw,
            pitch,
            settings,
        };
        orientation.clamp_pitch();
        orientation
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn settings(&self) -> &OrientationSettings {
        &self.settings
    }

    /// Apply a pointer delta: moving right turns right, moving down looks down.
    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw -= delta_x * self.settings.mouse_sensitivity;
        self.pitch -= delta_y * self.settings.mouse_sensitivity;
        self.clamp_pitch();
    }

    /// Turn left by `alpha` radians (scaled by the rotation sensitivity).
    pub fn pan_left(&mut self, alpha: f32) {
        self.yaw += alpha * self.settings.rotation_sensitivity;
    }

    pub fn pan_right(&mut self, alpha: f32) {
        self.pan_left(-alpha);
    }

    /// Overwrite yaw and pitch; pitch is clamped.
    pub fn set(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.clamp_pitch();
    }

    /// Turn to face a planar (XZ) direction, keeping pitch.
    ///
    /// Directions too short to define a heading are ignored.
    pub fn face_planar(&mut self, direction: &Vec3) {
        if let Some(yaw) = yaw_facing(direction) {
            self.yaw = yaw;
        }
    }

    /// Unit look direction including pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch)
    }

    /// Unit forward direction on the XZ plane (yaw only).
    pub fn planar_forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(sin_yaw, 0.0, cos_yaw)
    }

    /// Unit left direction on the XZ plane: forward turned a quarter turn toward +yaw.
    pub fn planar_left(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, -sin_yaw)
    }

    pub fn planar_right(&self) -> Vec3 {
        -self.planar_left()
    }

    fn clamp_pitch(&mut self) {
        let max = self.settings.max_pitch();
        if self.pitch.is_nan() {
            self.pitch = 0.0;
        }
        self.pitch = self.pitch.clamp(-max, max);
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(DEFAULT_YAW, 0.0, OrientationSettings::default())
    }
}
