//! UI Module
//!
//! HUD state for the sprint controller. Produces lightweight per-frame draw
//! data ([`BarVisual`]) that a renderer UI module can consume; nothing here
//! draws.

pub mod stamina_bar;

pub use stamina_bar::{BarColor, BarVisual, StaminaBar};
