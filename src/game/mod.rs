//! Game Module
//!
//! Contains game-specific systems that build on top of the engine.

pub mod audio;
pub mod config;
pub mod player;
pub mod state;
pub mod world;

pub use audio::{AudioSink, SoundQueue, SOUND_BUMP, SOUND_WALK};
pub use config::{ConfigError, InputConfig, MIN_MOVE_DELAY_S};
pub use player::MoveController;
pub use state::{GamePhase, PhaseListener, PhaseManager};
pub use world::DungeonWorld;
