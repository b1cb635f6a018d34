//! Input Configuration
//!
//! Movement timing and feedback settings as a data structure, loadable from
//! JSON so repeat behavior can be tuned without a rebuild. Missing fields
//! fall back to their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::game::audio::{SOUND_BUMP, SOUND_WALK};

/// Floor for `move_delay_s`; zero or negative delays are never accepted.
pub const MIN_MOVE_DELAY_S: f32 = 0.01;

const_assert!(MIN_MOVE_DELAY_S > 0.0);

/// Movement input tuning and sound feedback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum seconds between forwarded move attempts, regardless of source.
    pub move_delay_s: f32,
    /// Seconds a direction must be held before auto-repeat begins.
    pub repeat_delay_s: f32,
    /// Steady-state seconds between attempts once auto-repeat is active.
    pub repeat_rate_s: f32,
    /// Allow diagonal steps; when false, vertical wins mixed input.
    pub allow_diagonal: bool,
    /// Play the walk sound on successful moves.
    pub walk_sound_enabled: bool,
    /// Play the bump sound on blocked moves.
    pub bump_sound_enabled: bool,
    /// Sound id for successful moves.
    pub walk_sound: String,
    /// Sound id for blocked moves.
    pub bump_sound: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_delay_s: 0.2,
            repeat_delay_s: 0.5,
            repeat_rate_s: 0.1,
            allow_diagonal: true,
            walk_sound_enabled: true,
            bump_sound_enabled: true,
            walk_sound: SOUND_WALK.to_string(),
            bump_sound: SOUND_BUMP.to_string(),
        }
    }
}

impl InputConfig {
    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Write the config to a JSON file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Clamp timing fields into their accepted ranges.
    ///
    /// `move_delay_s` is floored at [`MIN_MOVE_DELAY_S`]; the repeat timings
    /// are floored at zero.
    pub fn sanitized(mut self) -> Self {
        self.move_delay_s = self.move_delay_s.max(MIN_MOVE_DELAY_S);
        self.repeat_delay_s = self.repeat_delay_s.max(0.0);
        self.repeat_rate_s = self.repeat_rate_s.max(0.0);
        self
    }
}

/// Errors from reading or writing a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
