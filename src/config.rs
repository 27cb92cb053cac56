//! Configuration file support.
//!
//! The picker reads an optional JSON file with its starting color, wheel size, scroll steps and log
//! level. Every field can be left out and falls back to its default, so `{}` is a valid config.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::model::PickerColor;
use crate::wheel::WheelGeometry;

/// How chatty the picker is. Each level includes everything above it; written in lowercase in the
/// config file, e.g. `"log_level": "debug"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Failures only, such as a terminal that can't be written to.
    Error,
    /// Things that went wrong but didn't stop the picker.
    Warn,
    /// Config loading and session summaries. The default.
    #[default]
    Info,
    /// Every color change, with the surface it came from.
    Debug,
    /// Also every suppressed echo and every wheel movement.
    Trace,
}

impl LogLevel {
    /// The matching filter for the `log` facade.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON, or a field has the wrong type.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The file parsed but describes something the picker cannot show.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything the picker can be configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// The color shown at startup.
    pub initial_color: PickerColor,
    /// Size of the wheel widget.
    pub wheel: WheelGeometry,
    /// Degrees per scroll notch.
    pub scroll_step: u16,
    /// Degrees per scroll notch with the modifier key held.
    pub fast_scroll_step: u16,
    /// How much to log.
    pub log_level: LogLevel,
}

impl Default for PickerConfig {
    fn default() -> PickerConfig {
        PickerConfig {
            initial_color: PickerColor::default(),
            wheel: WheelGeometry::default(),
            scroll_step: 1,
            fast_scroll_step: 10,
            log_level: LogLevel::default(),
        }
    }
}

impl PickerConfig {
    /// Parses and validates a config from JSON text.
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed JSON, [`ConfigError::Invalid`] when
    /// [`validate`](PickerConfig::validate) rejects the result.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinct::config::{LogLevel, PickerConfig};
    /// let config = PickerConfig::from_json_str(r#"{"log_level": "debug"}"#).unwrap();
    /// assert_eq!(config.log_level, LogLevel::Debug);
    /// assert_eq!(config.scroll_step, 1);
    /// ```
    pub fn from_json_str(text: &str) -> Result<PickerConfig, ConfigError> {
        let config: PickerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_json_str`](PickerConfig::from_json_str).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<PickerConfig, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = PickerConfig::from_json_str(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks that the config describes a picker that can be drawn.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_color.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "initial color {:?} is out of range",
                self.initial_color
            )));
        }
        if self.wheel.radius() <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "wheel {}px wide has no room for a {}px ring with a {}px margin",
                self.wheel.width, self.wheel.arc_width, self.wheel.margin
            )));
        }
        if self.scroll_step == 0 || self.fast_scroll_step == 0 {
            return Err(ConfigError::Invalid("scroll steps must be at least 1".to_string()));
        }
        Ok(())
    }
}
