//! Player Module
//!
//! First-person player controllers and the state they are built from.
//!
//! # Components
//!
//! - [`PlayerController`] - minimal variant: movement, mouselook, jump,
//!   sprint honored while held
//! - [`SprintPlayerController`] - full variant: adds the stamina resource
//!   gating sprint, field-of-view feedback, and the fading stamina bar
//! - [`Locomotion`] / [`SpeedBlend`] - capsule displacement and speed
//!   blending shared by both variants
//! - [`StaminaMeter`] - depletion/regeneration state machine

pub mod controller;
pub mod locomotion;
pub mod sprint;
pub mod stamina;

pub use controller::PlayerController;
pub use locomotion::{Locomotion, SpeedBlend, GROUND_STICK_VELOCITY, MAX_FRAME_DT};
pub use sprint::{AudioCue, SprintFeedback, SprintPlayerController, SPRINT_MOVE_THRESHOLD};
pub use stamina::{StaminaMeter, RECOVERY_FRACTION};
