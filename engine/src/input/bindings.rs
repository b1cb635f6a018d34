//! Input Bindings Module
//!
//! Maps physical keys to grid move directions, allowing for key remapping.
//! Keys are grouped into two banks: the primary bank (WASD and arrows) and
//! the numpad bank. Bank priority is the reader's concern (see
//! [`DirectionInput`](super::DirectionInput)); this module only stores the
//! table and sums pressed keys per bank.

use std::collections::{HashMap, HashSet};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::direction::GridDirection;
use super::keyboard::KeyCode;

/// Which key group a binding reads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyBank {
    /// WASD and arrow keys, read first each tick.
    Primary,
    /// Numpad 8-way movement, consulted only when the primary bank is idle.
    Numpad,
}

/// A single key assignment: the bank it reads in and the direction it pulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionBinding {
    pub bank: KeyBank,
    pub direction: GridDirection,
}

impl DirectionBinding {
    /// Convenience constructor.
    pub fn new(bank: KeyBank, direction: GridDirection) -> Self {
        Self { bank, direction }
    }
}

/// Maps physical keys to move directions, supporting customizable bindings.
///
/// Several keys may pull the same direction (W and ArrowUp both point
/// north), so the table is many-to-one with no reverse map.
#[derive(Debug, Clone)]
pub struct DirectionBindings {
    map: HashMap<KeyCode, DirectionBinding>,
}

impl Default for DirectionBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionBindings {
    /// Create the standard layout.
    ///
    /// Primary bank:
    /// - W / ArrowUp = north
    /// - S / ArrowDown = south
    /// - A / ArrowLeft = west
    /// - D / ArrowRight = east
    ///
    /// Numpad bank (8-way):
    /// - Numpad8 = north, Numpad2 = south, Numpad4 = west, Numpad6 = east
    /// - Numpad7 = north-west, Numpad9 = north-east
    /// - Numpad1 = south-west, Numpad3 = south-east
    pub fn new() -> Self {
        let mut bindings = Self {
            map: HashMap::new(),
        };

        // Primary bank
        bindings.bind(KeyCode::W, KeyBank::Primary, GridDirection::NORTH);
        bindings.bind(KeyCode::ArrowUp, KeyBank::Primary, GridDirection::NORTH);
        bindings.bind(KeyCode::S, KeyBank::Primary, GridDirection::SOUTH);
        bindings.bind(KeyCode::ArrowDown, KeyBank::Primary, GridDirection::SOUTH);
        bindings.bind(KeyCode::A, KeyBank::Primary, GridDirection::WEST);
        bindings.bind(KeyCode::ArrowLeft, KeyBank::Primary, GridDirection::WEST);
        bindings.bind(KeyCode::D, KeyBank::Primary, GridDirection::EAST);
        bindings.bind(KeyCode::ArrowRight, KeyBank::Primary, GridDirection::EAST);

        // Numpad bank
        bindings.bind(KeyCode::Numpad8, KeyBank::Numpad, GridDirection::NORTH);
        bindings.bind(KeyCode::Numpad2, KeyBank::Numpad, GridDirection::SOUTH);
        bindings.bind(KeyCode::Numpad4, KeyBank::Numpad, GridDirection::WEST);
        bindings.bind(KeyCode::Numpad6, KeyBank::Numpad, GridDirection::EAST);
        bindings.bind(KeyCode::Numpad7, KeyBank::Numpad, GridDirection::NORTH_WEST);
        bindings.bind(KeyCode::Numpad9, KeyBank::Numpad, GridDirection::NORTH_EAST);
        bindings.bind(KeyCode::Numpad1, KeyBank::Numpad, GridDirection::SOUTH_WEST);
        bindings.bind(KeyCode::Numpad3, KeyBank::Numpad, GridDirection::SOUTH_EAST);

        bindings
    }

    /// Create an empty table with no keys bound.
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a physical key to a direction in the given bank.
    ///
    /// If the key was previously bound, the old binding is replaced.
    pub fn bind(&mut self, key: KeyCode, bank: KeyBank, direction: GridDirection) {
        self.map.insert(key, DirectionBinding::new(bank, direction));
    }

    /// Remove the binding for a specific key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.map.remove(&key);
    }

    /// Get the binding for a physical key, if any.
    pub fn resolve(&self, key: KeyCode) -> Option<DirectionBinding> {
        self.map.get(&key).copied()
    }

    /// Check whether a key is bound at all.
    pub fn is_bound(&self, key: KeyCode) -> bool {
        self.map.contains_key(&key)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resolve the net direction a bank is pulling, given the pressed keys.
    ///
    /// Sums the deltas of every pressed key bound in the bank and clamps
    /// each axis, so opposing keys cancel and same-direction keys do not
    /// double the step.
    pub fn direction_for(&self, bank: KeyBank, pressed_keys: &HashSet<KeyCode>) -> GridDirection {
        let mut sum = IVec2::ZERO;
        for (key, binding) in &self.map {
            if binding.bank == bank && pressed_keys.contains(key) {
                sum += binding.direction.delta();
            }
        }
        GridDirection::from_axes(sum.x, sum.y)
    }

    /// Get all current bindings as key-binding pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, DirectionBinding)> + '_ {
        self.map.iter().map(|(&k, &b)| (k, b))
    }
}
