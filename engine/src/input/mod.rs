//! Input Module
//!
//! Latches the host's input signals into one [`FrameInput`] sample per frame.
//! The winit coupling lives entirely in [`collector`] and [`bindings`]; the
//! controllers only ever see a `FrameInput`.
//!
//! # Example
//!
//! ```rust,ignore
//! use strider_engine::input::InputCollector;
//! use winit::keyboard::KeyCode;
//!
//! let mut collector = InputCollector::new();
//!
//! // In the event loop:
//! collector.handle_key(KeyCode::KeyW, true);
//! collector.accumulate_look(12.0, -3.0);
//!
//! // Once per frame:
//! let input = collector.sample();
//! assert_eq!(input.movement.y, 1.0);
//! ```

pub mod bindings;
pub mod collector;

pub use bindings::{KeyBindings, PlayerAction};
pub use collector::InputCollector;

use glam::Vec2;

/// One frame's worth of latched input signals.
///
/// `movement` components are -1, 0, or 1 per axis when produced by the
/// [`InputCollector`]; analog hosts may report intermediate values in
/// approximately [-1, 1]. `look` is the total look delta accumulated since
/// the previous sample and is exactly zero when no device motion was
/// reported.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Move vector: x = strafe (+right), y = forward (+forward)
    pub movement: Vec2,
    /// Look delta in device counts: x = turn, y = tilt
    pub look: Vec2,
    /// Jump key went down this frame
    pub jump_pressed: bool,
    /// Sprint key went down this frame
    pub sprint_pressed: bool,
    /// Sprint key went up this frame
    pub sprint_released: bool,
    /// Sprint key is currently held
    pub sprint_held: bool,
}
