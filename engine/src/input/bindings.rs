//! Key Bindings
//!
//! Maps physical keys to logical player actions so game code never matches on
//! key codes directly, and keys stay remappable.

use std::collections::HashMap;

use winit::keyboard::KeyCode;

/// Logical player actions the controllers consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBackward,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Sprint modifier (default: Left Shift)
    Sprint,
}

/// Two-way map between physical keys and logical actions.
///
/// Binding a key that is already in use removes the old binding in both
/// directions, so every key maps to at most one action and every action to at
/// most one key.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, PlayerAction>,
    action_to_key: HashMap<PlayerAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default WASD + Space + Left Shift layout.
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::KeyW, PlayerAction::MoveForward);
        bindings.bind(KeyCode::KeyS, PlayerAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, PlayerAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, PlayerAction::MoveRight);
        bindings.bind(KeyCode::Space, PlayerAction::Jump);
        bindings.bind(KeyCode::ShiftLeft, PlayerAction::Sprint);

        bindings
    }

    /// Bind a physical key to a logical action, replacing any previous
    /// binding of either.
    pub fn bind(&mut self, key: KeyCode, action: PlayerAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }
        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for an action, leaving it unbound.
    pub fn unbind(&mut self, action: PlayerAction) {
        if let Some(key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&key);
        }
    }

    /// Look up the action a key is bound to.
    pub fn action_for(&self, key: KeyCode) -> Option<PlayerAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Look up the key an action is bound to (for display or rebinding UIs).
    pub fn key_for(&self, action: PlayerAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let bindings = KeyBindings::new();
        assert_eq!(
            bindings.action_for(KeyCode::KeyW),
            Some(PlayerAction::MoveForward)
        );
        assert_eq!(bindings.action_for(KeyCode::Space), Some(PlayerAction::Jump));
        assert_eq!(
            bindings.action_for(KeyCode::ShiftLeft),
            Some(PlayerAction::Sprint)
        );
        assert_eq!(bindings.action_for(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_rebind_replaces_both_directions() {
        let mut bindings = KeyBindings::new();
        bindings.bind(KeyCode::KeyE, PlayerAction::Jump);

        assert_eq!(bindings.action_for(KeyCode::KeyE), Some(PlayerAction::Jump));
        // Space no longer maps to anything
        assert_eq!(bindings.action_for(KeyCode::Space), None);
        assert_eq!(bindings.key_for(PlayerAction::Jump), Some(KeyCode::KeyE));
    }

    #[test]
    fn test_stealing_a_key_unbinds_old_action() {
        let mut bindings = KeyBindings::new();
        // Give W to Sprint; MoveForward loses its key
        bindings.bind(KeyCode::KeyW, PlayerAction::Sprint);

        assert_eq!(bindings.action_for(KeyCode::KeyW), Some(PlayerAction::Sprint));
        assert_eq!(bindings.key_for(PlayerAction::MoveForward), None);
        assert_eq!(bindings.action_for(KeyCode::ShiftLeft), None);
    }

    #[test]
    fn test_unbind() {
        let mut bindings = KeyBindings::new();
        bindings.unbind(PlayerAction::Sprint);
        assert_eq!(bindings.action_for(KeyCode::ShiftLeft), None);
        assert_eq!(bindings.key_for(PlayerAction::Sprint), None);
    }
}
