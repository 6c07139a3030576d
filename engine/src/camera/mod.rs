//! Camera Module
//!
//! Camera-holder state driven by the player controllers: mouselook yaw/pitch
//! and the sprint field-of-view blend. Window-system agnostic; the host
//! applies the results through [`crate::rig::CameraRig`].

pub mod fov;
pub mod look;

pub use fov::FovBlender;
pub use look::LookController;
