//! First-Person Player Controller
//!
//! The minimal controller variant: capsule movement, mouselook, and jump,
//! with sprint honored unconditionally while the key is held. For the full
//! variant with a stamina-gated sprint and feedback, see
//! [`SprintPlayerController`](crate::player::SprintPlayerController).
//!
//! # Usage
//!
//! ```rust,ignore
//! use strider_engine::config::ControllerConfig;
//! use strider_engine::player::PlayerController;
//!
//! let mut player = PlayerController::new(&ControllerConfig::default());
//!
//! // Each frame:
//! let input = collector.sample();
//! player.update(delta_time, &input, &mut body, &mut camera);
//! ```

use crate::camera::LookController;
use crate::config::ControllerConfig;
use crate::input::FrameInput;
use crate::player::locomotion::{Locomotion, MAX_FRAME_DT};
use crate::rig::{CameraRig, CapsuleBody};

/// Minimal first-person controller: walk/sprint, mouselook, jump, gravity.
#[derive(Debug, Clone)]
pub struct PlayerController {
    look: LookController,
    locomotion: Locomotion,
    walk_speed: f32,
    sprint_speed: f32,
    sprinting: bool,
}

impl PlayerController {
    /// Create a controller from a configuration.
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            look: LookController::new(&config.look),
            locomotion: Locomotion::new(&config.movement),
            walk_speed: config.movement.walk_speed,
            sprint_speed: config.movement.sprint_speed,
            sprinting: false,
        }
    }

    /// Current body yaw in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.look.yaw()
    }

    /// Current camera pitch in radians.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.look.pitch()
    }

    /// Whether sprint is held this frame.
    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Current vertical velocity in m/s.
    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.locomotion.vertical_velocity()
    }

    /// Advance the controller by one frame.
    ///
    /// Applies look rotations to the body and camera, then issues the
    /// horizontal and vertical capsule sweeps.
    pub fn update<B, C>(&mut self, dt: f32, input: &FrameInput, body: &mut B, camera: &mut C)
    where
        B: CapsuleBody,
        C: CameraRig,
    {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        if self.look.apply(input.look) {
            body.set_yaw(self.look.yaw());
            camera.set_pitch(self.look.pitch());
        }

        self.sprinting = input.sprint_held;

        let grounded = body.is_grounded();
        if input.jump_pressed {
            self.locomotion.try_jump(grounded);
        }

        let speed = if self.sprinting {
            self.sprint_speed
        } else {
            self.walk_speed
        };
        body.translate(Locomotion::horizontal_displacement(
            self.look.yaw(),
            input.movement,
            speed,
            dt,
        ));
        body.translate(self.locomotion.vertical_step(dt, grounded));
    }

    /// Reset orientation and vertical velocity (teleport or respawn).
    pub fn reset(&mut self) {
        self.look.reset();
        self.locomotion.reset();
        self.sprinting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    /// Flat-ground body for tests: grounded while at or below y = 0.
    struct TestBody {
        position: Vec3,
        yaw: f32,
        yaw_writes: usize,
    }

    impl TestBody {
        fn new() -> Self {
            Self {
                position: Vec3::ZERO,
                yaw: 0.0,
                yaw_writes: 0,
            }
        }
    }

    impl CapsuleBody for TestBody {
        fn translate(&mut self, delta: Vec3) {
            self.position += delta;
            if self.position.y < 0.0 {
                self.position.y = 0.0;
            }
        }
        fn is_grounded(&self) -> bool {
            self.position.y <= 0.0
        }
        fn set_yaw(&mut self, yaw: f32) {
            self.yaw = yaw;
            self.yaw_writes += 1;
        }
    }

    struct TestCamera {
        pitch: f32,
        fov: f32,
        pitch_writes: usize,
    }

    impl TestCamera {
        fn new() -> Self {
            Self {
                pitch: 0.0,
                fov: 60.0,
                pitch_writes: 0,
            }
        }
    }

    impl CameraRig for TestCamera {
        fn set_pitch(&mut self, pitch: f32) {
            self.pitch = pitch;
            self.pitch_writes += 1;
        }
        fn fov(&self) -> f32 {
            self.fov
        }
        fn set_fov(&mut self, fov: f32) {
            self.fov = fov;
        }
    }

    fn walk_forward() -> FrameInput {
        FrameInput {
            movement: Vec2::new(0.0, 1.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_walks_forward_at_walk_speed() {
        let config = ControllerConfig::default();
        let mut player = PlayerController::new(&config);
        let mut body = TestBody::new();
        let mut camera = TestCamera::new();

        for _ in 0..100 {
            player.update(0.016, &walk_forward(), &mut body, &mut camera);
        }
        // Yaw 0 faces -Z; 1.6 s at 4 m/s
        let expected = -config.movement.walk_speed * 1.6;
        assert!((body.position.z - expected).abs() < 0.01);
        assert_eq!(body.position.x, 0.0);
    }

    #[test]
    fn test_sprint_held_moves_faster() {
        let config = ControllerConfig::default();
        let mut player = PlayerController::new(&config);
        let mut body = TestBody::new();
        let mut camera = TestCamera::new();

        let input = FrameInput {
            sprint_held: true,
            ..walk_forward()
        };
        player.update(0.5, &input, &mut body, &mut camera);
        assert!(player.is_sprinting());
        // Sprint speed applies immediately in this variant
        assert!((body.position.z + config.movement.sprint_speed * 0.1).abs() < 0.01);
    }

    #[test]
    fn test_zero_look_skips_rotation_writes() {
        let mut player = PlayerController::new(&ControllerConfig::default());
        let mut body = TestBody::new();
        let mut camera = TestCamera::new();

        player.update(0.016, &walk_forward(), &mut body, &mut camera);
        assert_eq!(body.yaw_writes, 0);
        assert_eq!(camera.pitch_writes, 0);

        let input = FrameInput {
            look: Vec2::new(5.0, 0.0),
            ..Default::default()
        };
        player.update(0.016, &input, &mut body, &mut camera);
        assert_eq!(body.yaw_writes, 1);
        assert_eq!(camera.pitch_writes, 1);
        assert_eq!(body.yaw, player.yaw());
    }

    #[test]
    fn test_grounded_jump_launches() {
        let config = ControllerConfig::default();
        let mut player = PlayerController::new(&config);
        let mut body = TestBody::new();
        let mut camera = TestCamera::new();

        let input = FrameInput {
            jump_pressed: true,
            ..Default::default()
        };
        player.update(0.016, &input, &mut body, &mut camera);
        assert!(body.position.y > 0.0);
        assert!(player.vertical_velocity() > 0.0);

        // Airborne jump press does nothing
        let rising = player.vertical_velocity();
        player.update(0.016, &input, &mut body, &mut camera);
        assert!(player.vertical_velocity() < rising);
    }

    #[test]
    fn test_jump_lands_back_on_ground() {
        let mut player = PlayerController::new(&ControllerConfig::default());
        let mut body = TestBody::new();
        let mut camera = TestCamera::new();

        let jump = FrameInput {
            jump_pressed: true,
            ..Default::default()
        };
        player.update(0.016, &jump, &mut body, &mut camera);

        let idle = FrameInput::default();
        for _ in 0..200 {
            player.update(0.016, &idle, &mut body, &mut camera);
        }
        assert_eq!(body.position.y, 0.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_oversized_dt_is_clamped() {
        let mut player = PlayerController::new(&ControllerConfig::default());
        let mut body = TestBody::new();
        let mut camera = TestCamera::new();

        // A 2 s hitch integrates as a single 0.1 s step
        player.update(2.0, &walk_forward(), &mut body, &mut camera);
        assert!(body.position.length() <= 4.0 * 0.1 + 0.001);
    }
}
