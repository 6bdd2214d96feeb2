//! Animation timing configuration
//!
//! Defaults applied to every animation a builder creates. The same record can
//! be loaded from TOML:
//!
//! ```toml
//! duration_ms = 450
//! start_delay_ms = 50
//! easing = "linear"
//! repeat_mode = "reverse"
//! repeat_count = 2
//! ```

use std::fs;
use std::path::Path as FilePath;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::AnimationError;

/// Repeat count that never stops repeating
pub const INFINITE: i32 = -1;

/// Default animation duration in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Default start delay in milliseconds
pub const DEFAULT_START_DELAY_MS: u32 = 0;

/// What an animation does when it reaches the end of an iteration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Jump back to the first keyframe
    #[default]
    Restart,
    /// Play the next iteration backwards
    Reverse,
}

/// Timing shared by every animation of a builder
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of one iteration in milliseconds
    pub duration_ms: u32,
    /// Delay before the first iteration in milliseconds
    pub start_delay_ms: u32,
    /// Easing curve; `None` uses [`Easing::default`]
    pub easing: Option<Easing>,
    /// Behavior between iterations
    pub repeat_mode: RepeatMode,
    /// Extra iterations after the first; negative values repeat forever
    pub repeat_count: i32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            start_delay_ms: DEFAULT_START_DELAY_MS,
            easing: None,
            repeat_mode: RepeatMode::Restart,
            repeat_count: 0,
        }
    }
}

impl AnimationConfig {
    /// Parse a configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, AnimationError> {
        toml::from_str(text).map_err(|e| AnimationError::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<FilePath>) -> Result<Self, AnimationError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serialize the configuration to TOML text
    pub fn to_toml_string(&self) -> Result<String, AnimationError> {
        toml::to_string(self).map_err(|e| AnimationError::Config(e.to_string()))
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_start_delay(mut self, start_delay_ms: u32) -> Self {
        self.start_delay_ms = start_delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn with_repeat_mode(mut self, repeat_mode: RepeatMode) -> Self {
        self.repeat_mode = repeat_mode;
        self
    }

    pub fn with_repeat_count(mut self, repeat_count: i32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// The easing curve animations actually use
    pub fn resolved_easing(&self) -> Easing {
        self.easing.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnimationConfig::default();
        assert_eq!(config.duration_ms, 300);
        assert_eq!(config.start_delay_ms, 0);
        assert_eq!(config.easing, None);
        assert_eq!(config.repeat_mode, RepeatMode::Restart);
        assert_eq!(config.repeat_count, 0);
        assert_eq!(config.resolved_easing(), Easing::AccelerateDecelerate);
    }

    #[test]
    fn test_from_toml() {
        let config = AnimationConfig::from_toml_str(
            r#"
            duration_ms = 450
            easing = "linear"
            repeat_mode = "reverse"
            repeat_count = -1
            "#,
        )
        .unwrap();

        assert_eq!(config.duration_ms, 450);
        assert_eq!(config.start_delay_ms, 0);
        assert_eq!(config.easing, Some(Easing::Linear));
        assert_eq!(config.repeat_mode, RepeatMode::Reverse);
        assert_eq!(config.repeat_count, INFINITE);
    }

    #[test]
    fn test_from_toml_parameterized_easing() {
        let config = AnimationConfig::from_toml_str("easing = { overshoot = 1.5 }").unwrap();
        assert_eq!(config.easing, Some(Easing::Overshoot(1.5)));
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        let err = AnimationConfig::from_toml_str("duration_ms = \"slow\"").unwrap_err();
        assert!(matches!(err, AnimationError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let config = AnimationConfig::default()
            .with_duration(120)
            .with_start_delay(30)
            .with_easing(Easing::Bounce)
            .with_repeat_count(3);
        let text = config.to_toml_string().unwrap();
        assert_eq!(AnimationConfig::from_toml_str(&text).unwrap(), config);
    }
}
