//! Input Module
//!
//! Provides platform-agnostic keyboard input handling for grid movement.
//! This module is decoupled from any specific windowing system (like winit)
//! to allow for flexible integration; hosts convert window key events
//! through `KeyCode::from` and feed them into a [`DirectionInput`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gloomdelve_engine::input::{DirectionInput, GridDirection, KeyCode};
//!
//! let mut input = DirectionInput::new();
//!
//! // Host forwards key events
//! input.handle_key(KeyCode::W, true); // W pressed
//!
//! // Game reads the resolved move intent each tick
//! if input.direction() == GridDirection::NORTH {
//!     // Step north
//! }
//! ```

pub mod bindings;
pub mod direction;
pub mod handler;
pub mod keyboard;

// Re-export commonly used types at module level
pub use bindings::{DirectionBinding, DirectionBindings, KeyBank};
pub use direction::GridDirection;
pub use handler::DirectionInput;
pub use keyboard::KeyCode;
