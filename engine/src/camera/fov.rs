//! Field-of-View Feedback
//!
//! Widens the camera projection while sprinting as a speed-sensation cue and
//! eases it back when the sprint ends. The camera's authored field of view is
//! recorded the first time the blender runs, so the controller never needs to
//! know it up front.

use crate::config::FeedbackConfig;

/// Exponential blend of the camera field of view toward a sprint or normal
/// target.
#[derive(Debug, Clone)]
pub struct FovBlender {
    /// Field of view recorded from the camera on the first update (degrees)
    normal_fov: Option<f32>,
    sprint_fov: f32,
    change_speed: f32,
}

impl FovBlender {
    /// Create a blender from feedback tunables.
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            normal_fov: None,
            sprint_fov: config.sprint_fov,
            change_speed: config.fov_change_speed,
        }
    }

    /// The camera's recorded normal field of view, once seen.
    #[inline]
    pub fn normal_fov(&self) -> Option<f32> {
        self.normal_fov
    }

    /// Blend the camera's current field of view one frame toward the target
    /// and return the value to write back.
    ///
    /// `current_fov` is read from the camera each frame, so external writes
    /// to the projection are picked up rather than fought.
    pub fn update(&mut self, dt: f32, sprint_active: bool, current_fov: f32) -> f32 {
        let normal = *self.normal_fov.get_or_insert(current_fov);
        let target = if sprint_active { self.sprint_fov } else { normal };
        lerp(current_fov, target, self.change_speed * dt)
    }

    /// Forget the recorded normal field of view (camera swap).
    pub fn reset(&mut self) {
        self.normal_fov = None;
    }
}

/// Linear interpolation between two values.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_normal_fov_on_first_update() {
        let mut blender = FovBlender::new(&FeedbackConfig::default());
        assert_eq!(blender.normal_fov(), None);

        blender.update(0.016, false, 60.0);
        assert_eq!(blender.normal_fov(), Some(60.0));
    }

    #[test]
    fn test_widens_toward_sprint_fov() {
        let config = FeedbackConfig::default();
        let mut blender = FovBlender::new(&config);

        let mut fov = 60.0;
        fov = blender.update(0.016, true, fov);
        assert!(fov > 60.0);
        assert!(fov < config.sprint_fov);

        for _ in 0..500 {
            fov = blender.update(0.016, true, fov);
        }
        assert!((fov - config.sprint_fov).abs() < 0.05);
    }

    #[test]
    fn test_eases_back_to_normal() {
        let config = FeedbackConfig::default();
        let mut blender = FovBlender::new(&config);

        let mut fov = 60.0;
        for _ in 0..500 {
            fov = blender.update(0.016, true, fov);
        }
        for _ in 0..500 {
            fov = blender.update(0.016, false, fov);
        }
        assert!((fov - 60.0).abs() < 0.05);
    }

    #[test]
    fn test_reset_rerecords_normal() {
        let mut blender = FovBlender::new(&FeedbackConfig::default());
        blender.update(0.016, false, 60.0);
        blender.reset();
        blender.update(0.016, false, 90.0);
        assert_eq!(blender.normal_fov(), Some(90.0));
    }
}
