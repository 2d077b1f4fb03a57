/*!
Movement integrator settings and tolerances.

These constants centralize the parameters used by the collision resolver and the
sub-stepped move-and-slide integrator. Keeping them together makes tuning easier and
keeps every caller on the same approximation.

Notes
- Distances are in world units (one block face is 6 units wide in the demo level).
- The integrator samples discretely: it never sweeps the agent volume continuously, so
  `DEFAULT_SUB_STEPS` bounds how far a single collision query may jump.
*/

/// Number of equal sub-steps a frame displacement is split into.
/// Higher values reduce tunneling through thin obstacles at high speed.
pub const DEFAULT_SUB_STEPS: u32 = 5;

/// Scale applied to the projected slide vector.
/// Projection onto the contact plane loses magnitude; this gives it back.
pub const DEFAULT_SLIDE_MULTIPLIER: f32 = 4.0;

/// Number of fine steps a slide vector is attempted in.
pub const DEFAULT_SLIDE_STEPS: u32 = 5;

/// Minimum squared displacement considered a real move.
/// Anything at or below this is treated as a no-op without querying obstacles.
pub const MIN_MOVE_SQ: f32 = 1.0e-12;

/// Agent collision box size (width, height, depth).
pub const AGENT_WIDTH: f32 = 0.4;
pub const AGENT_HEIGHT: f32 = 1.6;
pub const AGENT_DEPTH: f32 = 0.4;

/// Tuning for one [`try_move`](super::kinematic::try_move) call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveSettings {
    /// Sub-steps per frame displacement.
    pub sub_steps: u32,
    /// Scale applied to the slide vector after projection.
    pub slide_multiplier: f32,
    /// Fine steps the slide vector is attempted in.
    pub slide_steps: u32,
}

impl MoveSettings {
    #[inline]
    pub const fn with_defaults() -> Self {
        Self {
            sub_steps: DEFAULT_SUB_STEPS,
            slide_multiplier: DEFAULT_SLIDE_MULTIPLIER,
            slide_steps: DEFAULT_SLIDE_STEPS,
        }
    }

    /// Clamp misconfigured values into a usable range.
    ///
    /// - Step counts are at least 1.
    /// - A negative or non-finite multiplier disables sliding (0.0).
    #[inline]
    pub fn sanitized(self) -> Self {
        let slide_multiplier = if self.slide_multiplier.is_finite() {
            self.slide_multiplier.max(0.0)
        } else {
            0.0
        };

        Self {
            sub_steps: self.sub_steps.max(1),
            slide_multiplier,
            slide_steps: self.slide_steps.max(1),
        }
    }
}

impl Default for MoveSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
