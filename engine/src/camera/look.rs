//! Mouselook Controller
//!
//! Accumulates look input into body yaw and camera-holder pitch. Yaw is
//! unbounded and wraps through the rotation it is applied as; pitch is
//! clamped to the configured vertical limit. Pitch belongs to the camera
//! holder only, so head tilt never changes body facing.

use glam::{Vec2, Vec3};

use crate::config::LookConfig;

/// Yaw/pitch state driven by look input.
#[derive(Debug, Clone)]
pub struct LookController {
    /// Horizontal angle (radians), unrestricted
    yaw: f32,
    /// Vertical angle (radians), clamped to +/- vertical_clamp
    pitch: f32,
    sensitivity: f32,
    vertical_clamp: f32,
}

impl LookController {
    /// Create a controller looking straight ahead.
    pub fn new(config: &LookConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: config.sensitivity,
            vertical_clamp: config.vertical_clamp,
        }
    }

    /// Create a controller with an initial facing.
    pub fn with_yaw(config: &LookConfig, yaw: f32) -> Self {
        Self {
            yaw,
            ..Self::new(config)
        }
    }

    /// Current yaw in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set yaw directly (radians).
    #[inline]
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Set pitch directly (radians, clamped to the vertical limit).
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-self.vertical_clamp, self.vertical_clamp);
    }

    /// Apply one frame of look input.
    ///
    /// An exactly-zero delta is a no-op and returns `false`, letting the
    /// caller skip redundant rotation writes to the host. Otherwise yaw
    /// turns with `look.x` and pitch tilts against `look.y` (mouse down
    /// looks down), clamped.
    pub fn apply(&mut self, look: Vec2) -> bool {
        if look == Vec2::ZERO {
            return false;
        }
        let delta = look * self.sensitivity;
        self.yaw += delta.x;
        self.pitch = (self.pitch - delta.y).clamp(-self.vertical_clamp, self.vertical_clamp);
        true
    }

    /// Horizontal facing derived from yaw. Yaw 0 faces -Z.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right axis, perpendicular to [`forward`](Self::forward).
    #[inline]
    pub fn right(&self) -> Vec3 {
        let forward = self.forward();
        Vec3::new(-forward.z, 0.0, forward.x)
    }

    /// Reset to looking straight ahead.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn controller() -> LookController {
        LookController::new(&LookConfig::default())
    }

    #[test]
    fn test_zero_input_is_a_no_op() {
        let mut look = controller();
        look.apply(Vec2::new(100.0, 50.0));
        let yaw = look.yaw();
        let pitch = look.pitch();

        assert!(!look.apply(Vec2::ZERO));
        assert_eq!(look.yaw(), yaw);
        assert_eq!(look.pitch(), pitch);
    }

    #[test]
    fn test_yaw_turns_with_horizontal_input() {
        let mut look = controller();
        assert!(look.apply(Vec2::new(100.0, 0.0)));
        // 100 counts at 0.002 rad/count
        assert!((look.yaw() - 0.2).abs() < EPSILON);
        assert_eq!(look.pitch(), 0.0);
    }

    #[test]
    fn test_mouse_down_looks_down() {
        let mut look = controller();
        look.apply(Vec2::new(0.0, 100.0));
        assert!((look.pitch() + 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_clamped_both_ways() {
        let clamp = LookConfig::default().vertical_clamp;
        let mut look = controller();

        look.apply(Vec2::new(0.0, -1_000_000.0));
        assert!((look.pitch() - clamp).abs() < EPSILON);

        look.apply(Vec2::new(0.0, 1_000_000.0));
        assert!((look.pitch() + clamp).abs() < EPSILON);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut look = controller();
        for _ in 0..100 {
            look.apply(Vec2::new(10_000.0, 0.0));
        }
        // Many full turns accumulate without wrapping here
        assert!(look.yaw() > std::f32::consts::TAU * 10.0);
    }

    #[test]
    fn test_forward_right_orthonormal() {
        let mut look = controller();
        look.apply(Vec2::new(123.0, 0.0));

        let forward = look.forward();
        let right = look.right();
        assert!((forward.length() - 1.0).abs() < EPSILON);
        assert!((right.length() - 1.0).abs() < EPSILON);
        assert!(forward.dot(right).abs() < EPSILON);
        assert_eq!(forward.y, 0.0);
    }

    #[test]
    fn test_set_pitch_clamped() {
        let mut look = controller();
        look.set_pitch(10.0);
        assert!(look.pitch() < std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_reset() {
        let mut look = controller();
        look.apply(Vec2::new(500.0, 200.0));
        look.reset();
        assert_eq!(look.yaw(), 0.0);
        assert_eq!(look.pitch(), 0.0);
    }
}
