//! Direction Input Handler
//!
//! Centralized pressed-key tracking for grid movement.
//! Owns the binding table and the set of currently pressed keys, and
//! resolves them into a single move intent with the primary bank taking
//! priority over the numpad bank.

use std::collections::HashSet;

use super::bindings::{DirectionBindings, KeyBank};
use super::direction::GridDirection;
use super::keyboard::KeyCode;

/// Tracks held direction keys and resolves the active move intent.
///
/// Pressed state is kept per physical key and directions are derived
/// through the binding table, so holding two keys bound to the same
/// direction and releasing one keeps that direction active.
#[derive(Debug, Clone, Default)]
pub struct DirectionInput {
    /// Currently pressed bound keys
    pressed: HashSet<KeyCode>,
    /// Key-to-direction table
    bindings: DirectionBindings,
}

impl DirectionInput {
    /// Create a tracker with the standard key layout and no keys pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with a custom binding table.
    pub fn with_bindings(bindings: DirectionBindings) -> Self {
        Self {
            pressed: HashSet::new(),
            bindings,
        }
    }

    /// Update key state from a press/release event.
    ///
    /// Returns `true` if the key is bound to a direction, `false` otherwise.
    /// Unbound presses are not tracked; releases always clear the key so a
    /// binding removed mid-press cannot leave it stuck.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let bound = self.bindings.is_bound(key);
        if pressed {
            if bound {
                self.pressed.insert(key);
            }
        } else {
            self.pressed.remove(&key);
        }
        bound
    }

    /// Resolve the current move intent.
    ///
    /// The primary bank (WASD and arrows) is read first; the numpad bank is
    /// consulted only when the primary bank yields zero.
    pub fn direction(&self) -> GridDirection {
        let primary = self.bindings.direction_for(KeyBank::Primary, &self.pressed);
        if !primary.is_zero() {
            return primary;
        }
        self.bindings.direction_for(KeyBank::Numpad, &self.pressed)
    }

    /// Check if any bound direction key is currently held.
    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }

    /// Check if a specific key is currently held.
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Release all keys.
    pub fn reset(&mut self) {
        self.pressed.clear();
    }

    /// The active binding table.
    pub fn bindings(&self) -> &DirectionBindings {
        &self.bindings
    }

    /// Mutable access for remapping keys at runtime.
    pub fn bindings_mut(&mut self) -> &mut DirectionBindings {
        &mut self.bindings
    }
}
