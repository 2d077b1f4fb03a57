pub mod camera;
pub mod collision;
pub mod constants;
pub mod orientation;
pub mod stamina;
pub mod trigger;
pub mod utils;

pub use camera::{Camera, CameraSettings};
pub use collision::{
    Aabb, AgentVolume, Bounded, BoundsCache, CollisionOutcome, ContactNormal, MoveResult,
    MoveSettings, StaticBox, Transform, Vec3, check_collision, try_move,
};
pub use constants::{
    DEFAULT_SPAWN, DEFAULT_YAW, MAX_PITCH, MOUSE_SENSITIVITY, PITCH_MARGIN, ROTATION_SENSITIVITY,
};
pub use orientation::{Orientation, OrientationSettings};
pub use stamina::{Stamina, StaminaSettings};
pub use trigger::ProximityTrigger;
pub use utils::{to_planar, yaw_facing};
