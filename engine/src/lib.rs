//! Gloomdelve Engine Library
//!
//! A small engine for grid-based dungeon crawlers. This library provides
//! keyboard-to-direction input handling, deterministic tick timing, and the
//! game-side systems that turn held keys into discrete grid moves.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic direction input with rebindable keys
//! - [`timing`] - Tick-driven timers for deferred actions
//! - [`game`] - Game systems: move control, phases, config, audio hooks
//!
//! # Example
//!
//! ```ignore
//! use gloomdelve_engine::game::{MoveController, PhaseManager};
//! use gloomdelve_engine::input::{DirectionInput, KeyCode};
//!
//! let mut phases = PhaseManager::new();
//! let mut input = DirectionInput::new();
//! let mut controller = MoveController::new();
//!
//! controller.set_world(Box::new(world));
//! controller.set_audio(Box::new(speaker));
//! controller.start(&mut phases);
//!
//! // Each simulation frame: feed key events, then tick
//! input.handle_key(KeyCode::W, true);
//! controller.step(delta_seconds, &input);
//! ```

pub mod input;
pub mod timing;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{DirectionBindings, DirectionInput, GridDirection, KeyBank, KeyCode};
// Re-export timing helpers
pub use timing::DelayedTrigger;
// Re-export the core game-side types at crate level for convenience
pub use game::{GamePhase, InputConfig, MoveController, PhaseManager};
