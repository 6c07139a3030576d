//! Frame Input Collector
//!
//! Turns host key events and raw mouse motion into one [`FrameInput`] sample
//! per frame. Look deltas accumulate between samples and are consumed
//! atomically; key edges (jump pressed, sprint pressed/released) are latched
//! until the next sample so short taps are never lost between frames.

use glam::Vec2;
use winit::keyboard::KeyCode;

use super::bindings::{KeyBindings, PlayerAction};
use super::FrameInput;

/// Collects input events and produces per-frame [`FrameInput`] samples.
#[derive(Debug, Clone)]
pub struct InputCollector {
    bindings: KeyBindings,
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    jump_held: bool,
    sprint_held: bool,
    // Edges latched until the next sample()
    jump_pressed: bool,
    sprint_pressed: bool,
    sprint_released: bool,
    // Look delta accumulated since the last sample()
    look_dx: f32,
    look_dy: f32,
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::with_bindings(KeyBindings::new())
    }
}

impl InputCollector {
    /// Create a collector with the default key bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector with custom key bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            forward: false,
            backward: false,
            left: false,
            right: false,
            jump_held: false,
            sprint_held: false,
            jump_pressed: false,
            sprint_pressed: false,
            sprint_released: false,
            look_dx: 0.0,
            look_dy: 0.0,
        }
    }

    /// The active key bindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Mutable access to the key bindings for rebinding.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Feed a key press or release from the host event loop.
    ///
    /// Repeated `pressed = true` events for a held key (OS key repeat) do not
    /// re-latch edges. Returns `true` if the key was bound to an action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(action) = self.bindings.action_for(key) else {
            return false;
        };

        match action {
            PlayerAction::MoveForward => self.forward = pressed,
            PlayerAction::MoveBackward => self.backward = pressed,
            PlayerAction::MoveLeft => self.left = pressed,
            PlayerAction::MoveRight => self.right = pressed,
            PlayerAction::Jump => {
                if pressed && !self.jump_held {
                    self.jump_pressed = true;
                }
                self.jump_held = pressed;
            }
            PlayerAction::Sprint => {
                if pressed && !self.sprint_held {
                    self.sprint_pressed = true;
                }
                if !pressed && self.sprint_held {
                    self.sprint_released = true;
                }
                self.sprint_held = pressed;
            }
        }
        true
    }

    /// Accumulate raw mouse motion from the host event loop.
    ///
    /// Deltas add up until the next [`sample`](Self::sample).
    #[inline]
    pub fn accumulate_look(&mut self, dx: f32, dy: f32) {
        self.look_dx += dx;
        self.look_dy += dy;
    }

    /// Take the sample for this frame, consuming accumulated look deltas and
    /// latched edges. Held keys carry over to the next frame.
    pub fn sample(&mut self) -> FrameInput {
        let input = FrameInput {
            movement: Vec2::new(
                axis(self.right, self.left),
                axis(self.forward, self.backward),
            ),
            look: Vec2::new(self.look_dx, self.look_dy),
            jump_pressed: self.jump_pressed,
            sprint_pressed: self.sprint_pressed,
            sprint_released: self.sprint_released,
            sprint_held: self.sprint_held,
        };

        self.look_dx = 0.0;
        self.look_dy = 0.0;
        self.jump_pressed = false;
        self.sprint_pressed = false;
        self.sprint_released = false;

        input
    }

    /// Release every key and drop pending deltas and edges.
    ///
    /// Call when the window loses focus so keys do not stay stuck down.
    pub fn reset(&mut self) {
        let bindings = self.bindings.clone();
        *self = Self::with_bindings(bindings);
    }
}

/// Map an opposing key pair to a -1/0/1 axis value.
fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
