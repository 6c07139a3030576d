//! Headless Walkthrough
//!
//! Drives the sprint controller through a scripted minute of play against
//! in-memory body/camera implementations and logs the interesting state once
//! per second. Useful for eyeballing tuning changes without a renderer:
//!
//! ```text
//! RUST_LOG=info cargo run --bin walk_sim
//! ```

use glam::{Vec2, Vec3};
use log::info;

use strider_engine::config::ControllerConfig;
use strider_engine::input::FrameInput;
use strider_engine::player::SprintPlayerController;
use strider_engine::rig::{CameraRig, CapsuleBody};

/// Capsule on an infinite ground plane at y = 0.
struct FlatGround {
    position: Vec3,
    yaw: f32,
}

impl CapsuleBody for FlatGround {
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
    }
}

/// Camera holder with a 60 degree projection.
struct SimCamera {
    pitch: f32,
    fov: f32,
}

impl CameraRig for SimCamera {
    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    fn fov(&self) -> f32 {
        self.fov
    }

    fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }
}

/// Scripted input for a given second of the walkthrough.
fn script(t: f32, sprint_was_held: bool) -> FrameInput {
    // 0-2 s: walk forward
    // 2-10 s: sprint forward (drains dry at 7 s, forced back to walking)
    // 10-14 s: stand still and recover
    // 14 s: jump while walking off
    let sprint_held = (2.0..10.0).contains(&t);
    let movement = if (10.0..14.0).contains(&t) {
        Vec2::ZERO
    } else {
        Vec2::new(0.0, 1.0)
    };
    FrameInput {
        movement,
        look: Vec2::ZERO,
        jump_pressed: (14.0..14.02).contains(&t),
        sprint_pressed: sprint_held && !sprint_was_held,
        sprint_released: !sprint_held && sprint_was_held,
        sprint_held,
    }
}

fn main() {
    env_logger::init();

    let config = ControllerConfig::default();
    let mut player = SprintPlayerController::new(&config);
    let mut body = FlatGround {
        position: Vec3::ZERO,
        yaw: 0.0,
    };
    let mut camera = SimCamera {
        pitch: 0.0,
        fov: 60.0,
    };

    let dt = 1.0 / 60.0;
    let mut sprint_was_held = false;
    let mut next_report = 0.0_f32;

    let mut t = 0.0_f32;
    while t < 16.0 {
        let input = script(t, sprint_was_held);
        sprint_was_held = input.sprint_held;

        let feedback = player.update(dt, &input, &mut body, &mut camera);

        if t >= next_report {
            info!(
                "t={:4.1}s pos=({:6.1}, {:4.1}, {:6.1}) speed={:4.1} m/s \
                 stamina={:5.1} fov={:4.1} bar[{:?} fill={:.2} alpha={:.2}]",
                t,
                body.position.x,
                body.position.y,
                body.position.z,
                player.current_speed(),
                player.stamina().stamina(),
                camera.fov,
                feedback.bar.color,
                feedback.bar.fill,
                feedback.bar.alpha,
            );
            next_report += 1.0;
        }
        t += dt;
    }

    info!(
        "walkthrough done: traveled {:.1} m, stamina {:.1}/{:.1}",
        body.position.length(),
        player.stamina().stamina(),
        player.stamina().max_stamina()
    );
}
