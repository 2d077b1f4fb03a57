use crate::collision::Vec3;

/// One-shot proximity trigger around a world point (e.g. "the player reached the well").
///
/// Fires the first time the agent is within `radius` (inclusive, full 3D distance) and
/// stays spent until [`ProximityTrigger::reset`].
#[derive(Clone, Copy, Debug)]
pub struct ProximityTrigger {
    center: Vec3,
    radius: f32,
    fired: bool,
}

impl ProximityTrigger {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            fired: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    #[inline]
    pub fn contains(&self, position: &Vec3) -> bool {
        (position - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Returns `true` exactly once: on the first call made inside the radius.
    pub fn check(&mut self, position: &Vec3) -> bool {
        if self.fired || !self.contains(position) {
            return false;
        }
        self.fired = true;
        log::debug!("proximity trigger at {:?} fired", self.center);
        true
    }

    /// Re-arm the trigger.
    pub fn reset(&mut self) {
        self.fired = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well() -> ProximityTrigger {
        ProximityTrigger::new(Vec3::new(-40.0, -5.0, -5.0), 20.0)
    }

    #[test]
    fn fires_once_inside_radius() {
        let mut trigger = well();
        let far = Vec3::new(120.0, 1.6, 0.0);
        let near = Vec3::new(-30.0, 1.6, -5.0);

        assert!(!trigger.check(&far));
        assert!(trigger.check(&near));
        assert!(!trigger.check(&near));
        assert!(trigger.has_fired());
    }

    #[test]
    fn boundary_is_inclusive() {
        let mut trigger = ProximityTrigger::new(Vec3::zeros(), 5.0);
        assert!(trigger.check(&Vec3::new(3.0, 0.0, 4.0)));
    }

    #[test]
    fn reset_rearms() {
        let mut trigger = well();
        let near = trigger.center();
        assert!(trigger.check(&near));
        trigger.reset();
        assert!(!trigger.has_fired());
        assert!(trigger.check(&near));
    }

    #[test]
    fn negative_radius_only_matches_the_centre() {
        let trigger = ProximityTrigger::new(Vec3::new(1.0, 1.0, 1.0), -3.0);
        assert_eq!(trigger.radius(), 0.0);
        assert!(trigger.contains(&Vec3::new(1.0, 1.0, 1.0)));
        assert!(!trigger.contains(&Vec3::new(1.0, 1.0, 1.1)));
    }
}
