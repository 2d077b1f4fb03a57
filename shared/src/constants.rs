use std::f32::consts::FRAC_PI_2;

/// Radians of yaw/pitch per pixel of pointer motion.
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Multiplier applied to discrete `pan_left`/`pan_right` angles.
pub const ROTATION_SENSITIVITY: f32 = 1.0;

/// Distance (radians) the pitch limit keeps from straight up or down.
///
/// Pitch is clamped to `[-(FRAC_PI_2 - PITCH_MARGIN), FRAC_PI_2 - PITCH_MARGIN]` so the
/// look direction never flips over the pole.
pub const PITCH_MARGIN: f32 = 0.1;

/// Largest pitch magnitude the orientation controller allows.
pub const MAX_PITCH: f32 = FRAC_PI_2 - PITCH_MARGIN;

/// Initial yaw of a new camera: looking down -X.
pub const DEFAULT_YAW: f32 = -FRAC_PI_2;

/// Initial camera position (eye height 1.6 above the origin plane, 5 units back on +Z).
pub const DEFAULT_SPAWN: [f32; 3] = [0.0, 1.6, 5.0];

/// Stamina pool size.
pub const MAX_STAMINA: f32 = 100.0;

/// Stamina drained per second of sprinting.
pub const SPRINT_DRAIN_PER_SEC: f32 = 40.0;

/// Base stamina regeneration per second.
///
/// Walking regenerates at half this rate, standing still at one and a half times it.
pub const STAMINA_RECOVERY_PER_SEC: f32 = 20.0;

/// Speed multiplier while sprinting.
pub const SPRINT_SPEED_MULTIPLIER: f32 = 2.0;

/// Seconds of no regeneration after stamina hits zero.
pub const STAMINA_DEPLETION_PAUSE_SECS: f32 = 2.0;

/// Minimum planar length a direction needs before a yaw is derived from it.
pub const YAW_EPS: f32 = 1.0e-6;
