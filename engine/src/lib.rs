//! Strider Engine Library
//!
//! An engine-agnostic first-person character controller: capsule locomotion,
//! mouselook, a stamina-gated sprint, and sprint feedback (camera
//! field-of-view widening and a fading stamina bar).
//!
//! All logic runs inside a per-frame update driven by the host. The host
//! owns the primitives (capsule sweeps, camera projection, HUD, audio) and
//! exposes them through the small traits in [`rig`]; the controllers compute
//! what to do with them each frame.
//!
//! # Modules
//!
//! - [`player`] - the two controller variants and their movement/stamina state
//! - [`camera`] - mouselook and field-of-view blending
//! - [`input`] - per-frame input latching and key bindings
//! - [`ui`] - stamina bar draw data
//! - [`rig`] - capability traits the host implements
//! - [`config`] - authoring-time tunables
//!
//! # Example
//!
//! ```ignore
//! use strider_engine::config::ControllerConfig;
//! use strider_engine::input::InputCollector;
//! use strider_engine::player::SprintPlayerController;
//!
//! let config = ControllerConfig::default();
//! let mut collector = InputCollector::new();
//! let mut player = SprintPlayerController::new(&config);
//!
//! // Event loop: feed keys and mouse motion
//! // collector.handle_key(key_code, pressed);
//! // collector.accumulate_look(dx, dy);
//!
//! // Frame loop:
//! let input = collector.sample();
//! let feedback = player.update(dt, &input, &mut body, &mut camera);
//! feedback.apply(Some(&mut stamina_bar_ui), None);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod player;
pub mod rig;
pub mod ui;

// Re-export the common entry points at crate level for convenience
pub use config::ControllerConfig;
pub use input::{FrameInput, InputCollector};
pub use player::{PlayerController, SprintPlayerController};
pub use rig::{CameraRig, CapsuleBody, SprintAudio, StaminaIndicator};
