//! Host Capability Interfaces
//!
//! The controllers in this crate are pure control logic; the primitives they
//! act on (capsule collision sweeps, camera projection, HUD elements, audio)
//! are owned by the host. Each collaborator is a small trait the host
//! implements once and hands to the per-frame update.
//!
//! [`CapsuleBody`] and [`CameraRig`] are required. The stamina indicator and
//! sprint audio are optional: a host without them simply skips the dependent
//! feedback (see [`crate::player::SprintFeedback::apply`]).

use glam::Vec3;

/// A physics-moved capsule the controller steers.
///
/// The host resolves collisions inside [`translate`](CapsuleBody::translate)
/// (typically a capsule sweep) and reports ground contact from the result of
/// the most recent move.
pub trait CapsuleBody {
    /// Sweep-move the capsule by a world-space displacement.
    fn translate(&mut self, delta: Vec3);

    /// Whether the capsule had ground contact after the last move.
    fn is_grounded(&self) -> bool;

    /// Set the body's rotation about the vertical axis, in radians.
    fn set_yaw(&mut self, yaw: f32);
}

/// The camera holder attached to the body.
///
/// Pitch is a local rotation of the holder only, so head tilt stays
/// decoupled from body facing.
pub trait CameraRig {
    /// Set the holder's local pitch, in radians.
    fn set_pitch(&mut self, pitch: f32);

    /// Current projection field of view, in degrees.
    fn fov(&self) -> f32;

    /// Set the projection field of view, in degrees.
    fn set_fov(&mut self, fov: f32);
}

/// An on-screen stamina bar. Optional.
pub trait StaminaIndicator {
    /// Set the filled fraction of the bar, 0.0 to 1.0.
    fn set_fill(&mut self, fill: f32);

    /// Set the bar color as linear RGB.
    fn set_color(&mut self, rgb: [f32; 3]);

    /// Set the bar opacity, 0.0 (hidden) to 1.0 (opaque).
    fn set_alpha(&mut self, alpha: f32);
}

/// Looping sprint sound effect. Optional.
pub trait SprintAudio {
    /// Start the sprint loop.
    fn play_sprint_loop(&mut self);

    /// Stop the sprint loop.
    fn stop_sprint_loop(&mut self);
}
