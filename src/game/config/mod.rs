//! Config Module
//!
//! Centralized configuration for movement input and feedback.

pub mod input_config;

pub use input_config::{ConfigError, InputConfig, MIN_MOVE_DELAY_S};
