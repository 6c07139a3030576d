//! Capsule Locomotion
//!
//! Converts move input, gravity, and ground contact into displacement
//! commands for a capsule body. Horizontal and vertical motion are issued as
//! two separate sweeps per frame, matching how capsule controllers resolve
//! ground contact between moves.
//!
//! # Physics Model
//!
//! - Horizontal displacement = (right * move.x + forward * move.y) * speed * dt.
//!   The input vector is deliberately not normalized.
//! - When grounded and falling, vertical velocity snaps to a small negative
//!   value so the capsule stays pinned to the ground each frame instead of
//!   free-falling between contacts.
//! - Jump uses the closed-form initial velocity sqrt(h * -2g) for reaching
//!   apex height h under constant gravity g.

use glam::{Vec2, Vec3};
use log::trace;

use crate::config::MovementConfig;

/// Vertical velocity applied while grounded, m/s. Keeps the capsule pressed
/// into ground contact so the grounded flag stays stable frame to frame.
pub const GROUND_STICK_VELOCITY: f32 = -2.0;

/// Upper bound on a single frame's delta time in seconds. Hitches longer
/// than this integrate as one clamped step instead of exploding the physics.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Gravity, jump, and vertical velocity state for one capsule.
#[derive(Debug, Clone)]
pub struct Locomotion {
    vertical_velocity: f32,
    jump_height: f32,
    gravity: f32,
}

impl Locomotion {
    /// Create locomotion state from movement tunables.
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            vertical_velocity: 0.0,
            jump_height: config.jump_height,
            gravity: config.gravity,
        }
    }

    /// Current vertical velocity in m/s, positive = upward.
    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Horizontal displacement for one frame, in world space.
    ///
    /// Forward and right axes are derived from the body yaw; `movement` is
    /// the latched move input (x = strafe, y = forward).
    pub fn horizontal_displacement(yaw: f32, movement: Vec2, speed: f32, dt: f32) -> Vec3 {
        let forward = Vec3::new(yaw.sin(), 0.0, -yaw.cos());
        let right = Vec3::new(-forward.z, 0.0, forward.x);
        (right * movement.x + forward * movement.y) * speed * dt
    }

    /// Start a jump if the body is grounded.
    ///
    /// Returns `true` when the jump was taken.
    pub fn try_jump(&mut self, grounded: bool) -> bool {
        if !grounded {
            return false;
        }
        self.vertical_velocity = (self.jump_height * -2.0 * self.gravity).sqrt();
        trace!(
            "jump: initial vertical velocity {:.2} m/s",
            self.vertical_velocity
        );
        true
    }

    /// Integrate gravity for one frame and return the vertical displacement
    /// to sweep the body by.
    pub fn vertical_step(&mut self, dt: f32, grounded: bool) -> Vec3 {
        if grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = GROUND_STICK_VELOCITY;
        }
        self.vertical_velocity += self.gravity * dt;
        Vec3::new(0.0, self.vertical_velocity * dt, 0.0)
    }

    /// Clear vertical velocity (teleport or respawn).
    pub fn reset(&mut self) {
        self.vertical_velocity = 0.0;
    }
}

/// Exponential blend of the current speed toward a walk or sprint target.
///
/// Interpolates with factor `acceleration * dt` each frame, an under-damped
/// approach that never quite reaches the target in one step.
#[derive(Debug, Clone)]
pub struct SpeedBlend {
    current: f32,
    walk_speed: f32,
    sprint_speed: f32,
    acceleration: f32,
}

impl SpeedBlend {
    /// Create a blend starting at walk speed.
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            current: config.walk_speed,
            walk_speed: config.walk_speed,
            sprint_speed: config.sprint_speed,
            acceleration: config.acceleration,
        }
    }

    /// Current blended speed in m/s.
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Blend toward the target for this frame and return the new speed.
    pub fn update(&mut self, dt: f32, sprint_active: bool) -> f32 {
        let target = if sprint_active {
            self.sprint_speed
        } else {
            self.walk_speed
        };
        self.current = lerp(self.current, target, self.acceleration * dt);
        self.current
    }

    /// Snap back to walk speed.
    pub fn reset(&mut self) {
        self.current = self.walk_speed;
    }
}

/// Linear interpolation between two values.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
