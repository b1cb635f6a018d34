//! Dungeon World Interface
//!
//! The contract the movement controller drives. The world decides whether a
//! step is possible and applies it; the controller never sees positions or
//! the map itself.

use std::cell::RefCell;
use std::rc::Rc;

use crate::input::GridDirection;

/// World-mutation service consumed by the movement controller.
pub trait DungeonWorld {
    /// Attempt to move the player actor one step in `direction`.
    ///
    /// Returns `true` if the actor moved, `false` if it was blocked.
    fn attempt_move(&mut self, direction: GridDirection) -> bool;
}

/// Forwarding impl for shared handles, letting a host keep access to the
/// world it hands the controller.
impl<W: DungeonWorld> DungeonWorld for Rc<RefCell<W>> {
    fn attempt_move(&mut self, direction: GridDirection) -> bool {
        self.borrow_mut().attempt_move(direction)
    }
}
