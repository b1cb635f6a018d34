//! Player Module
//!
//! Contains player-related systems, currently grid movement control.

pub mod controller;

pub use controller::MoveController;
