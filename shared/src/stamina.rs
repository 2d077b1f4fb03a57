//! Sprint stamina.
//!
//! Sprinting doubles walking speed and drains the pool. Emptying it starts a short pause
//! before any regeneration; after that the pool refills faster while standing still than
//! while walking.

use crate::constants::{
    MAX_STAMINA, SPRINT_DRAIN_PER_SEC, SPRINT_SPEED_MULTIPLIER, STAMINA_DEPLETION_PAUSE_SECS,
    STAMINA_RECOVERY_PER_SEC,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaminaSettings {
    pub max: f32,
    pub drain_per_sec: f32,
    pub recovery_per_sec: f32,
    pub sprint_multiplier: f32,
    pub depletion_pause_secs: f32,
}

impl StaminaSettings {
    #[inline]
    pub const fn with_defaults() -> Self {
        Self {
            max: MAX_STAMINA,
            drain_per_sec: SPRINT_DRAIN_PER_SEC,
            recovery_per_sec: STAMINA_RECOVERY_PER_SEC,
            sprint_multiplier: SPRINT_SPEED_MULTIPLIER,
            depletion_pause_secs: STAMINA_DEPLETION_PAUSE_SECS,
        }
    }
}

impl Default for StaminaSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Stamina {
    current: f32,
    pause_remaining: f32,
    settings: StaminaSettings,
}

impl Stamina {
    /// Full pool.
    pub fn new(settings: StaminaSettings) -> Self {
        Self {
            current: settings.max.max(0.0),
            pause_remaining: 0.0,
            settings,
        }
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Fill level in `[0, 1]`.
    #[inline]
    pub fn ratio(&self) -> f32 {
        if self.settings.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.settings.max).clamp(0.0, 1.0)
    }

    /// Advance one frame and return the speed multiplier to apply this frame.
    ///
    /// - `sprint_held`: the sprint input is down. Sprinting needs stamina above zero.
    /// - `moving`: any movement input is down; only affects the regeneration rate.
    pub fn update(&mut self, sprint_held: bool, moving: bool, dt_seconds: f32) -> f32 {
        let dt = dt_seconds.max(0.0);
        let s = self.settings;

        if sprint_held && self.current > 0.0 {
            self.current -= s.drain_per_sec * dt;
            if self.current <= 0.0 {
                self.current = 0.0;
                self.pause_remaining = s.depletion_pause_secs.max(0.0);
                log::debug!("stamina exhausted, regeneration paused");
            }
            return s.sprint_multiplier;
        }

        if self.pause_remaining > 0.0 {
            self.pause_remaining = (self.pause_remaining - dt).max(0.0);
            return 1.0;
        }

        let rate = if moving {
            s.recovery_per_sec * 0.5
        } else {
            s.recovery_per_sec * 1.5
        };
        self.current = (self.current + rate * dt).min(s.max);

        1.0
    }
}

impl Default for Stamina {
    fn default() -> Self {
        Self::new(StaminaSettings::default())
    }
}
