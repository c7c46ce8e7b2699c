//! Configuration for the Bloch CLI.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with BLOCH_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::Path;

use bloch_core::{BlochVector, SessionOptions, parse_state};

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Session defaults
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,
}

/// Session defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Starting state: a named state (`0`, `+i`, ...) or `x,y,z`
    #[serde(default = "default_initial_state")]
    pub initial_state: String,

    /// Clamp rotation deltas to `[-clamp, clamp]` degrees; `null` disables
    #[serde(default = "default_clamp_degrees")]
    pub clamp_degrees: Option<f64>,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Unset means the level follows `-v`.
    #[serde(default)]
    pub level: Option<String>,
}

/// Output rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "table" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// Decimal places in table output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_initial_state() -> String {
    "0".to_string()
}

fn default_clamp_degrees() -> Option<f64> {
    Some(180.0)
}

fn default_format() -> String {
    "table".to_string()
}

fn default_precision() -> usize {
    4
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            initial_state: default_initial_state(),
            clamp_degrees: default_clamp_degrees(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: default_format(),
            precision: default_precision(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_file {
            Self::from_file(path)?
        } else {
            Config::default()
        };

        let config = config.merge_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Merge environment overrides into this configuration.
    ///
    /// `lookup` resolves a variable name; only variables it returns override
    /// the current values. Unparseable numbers are ignored.
    pub fn merge_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("BLOCH_INITIAL_STATE") {
            self.session.initial_state = v;
        }
        if let Some(v) = lookup("BLOCH_CLAMP_DEGREES") {
            if v.eq_ignore_ascii_case("none") || v.eq_ignore_ascii_case("off") {
                self.session.clamp_degrees = None;
            } else if let Ok(val) = v.parse() {
                self.session.clamp_degrees = Some(val);
            }
        }
        if let Some(v) = lookup("BLOCH_LOG_LEVEL") {
            self.logging.level = Some(v);
        }
        if let Some(v) = lookup("BLOCH_OUTPUT_FORMAT") {
            self.output.format = v;
        }
        if let Some(v) = lookup("BLOCH_PRECISION") {
            if let Ok(val) = v.parse() {
                self.output.precision = val;
            }
        }
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_state(&self.session.initial_state).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid initial state: {e}"))
        })?;

        if let Some(limit) = self.session.clamp_degrees {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "clamp_degrees must be a positive number, got {limit}"
                )));
            }
        }

        if let Some(level) = &self.logging.level {
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {}
                other => {
                    return Err(ConfigError::ValidationError(format!(
                        "Invalid log level: {other}"
                    )));
                }
            }
        }

        match self.output.format.as_str() {
            "table" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid output format: {other}"
                )));
            }
        }

        if self.output.precision > 15 {
            return Err(ConfigError::ValidationError(format!(
                "precision must be at most 15, got {}",
                self.output.precision
            )));
        }

        Ok(())
    }

    /// Starting state for new sessions.
    pub fn initial_state(&self) -> Result<BlochVector, ConfigError> {
        parse_state(&self.session.initial_state)
            .map_err(|e| ConfigError::ValidationError(format!("Invalid initial state: {e}")))
    }

    /// Session options derived from this configuration.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            clamp_degrees: self.session.clamp_degrees,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.session.initial_state, "0");
        assert_eq!(config.session.clamp_degrees, Some(180.0));
        assert_eq!(config.output.format, "table");
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_state() {
        let mut config = Config::default();
        config.session.initial_state = "north".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_clamp() {
        let mut config = Config::default();
        config.session.clamp_degrees = Some(-5.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_format() {
        let mut config = Config::default();
        config.output.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_partial_sections() {
        let yaml = "session:\n  initial_state: \"+\"\n  clamp_degrees: null\noutput:\n  format: json\n";
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.session.initial_state, "+");
        assert_eq!(config.session.clamp_degrees, None);
        assert_eq!(config.output.format, "json");
        assert_eq!(config.output.precision, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().merge_env(env(&[
            ("BLOCH_INITIAL_STATE", "0,1,0"),
            ("BLOCH_CLAMP_DEGREES", "off"),
            ("BLOCH_LOG_LEVEL", "debug"),
            ("BLOCH_PRECISION", "not-a-number"),
        ]));
        assert_eq!(config.session.initial_state, "0,1,0");
        assert_eq!(config.session.clamp_degrees, None);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.output.precision, 4);
    }

    #[test]
    fn test_initial_state_vector() {
        let mut config = Config::default();
        config.session.initial_state = "1".to_string();
        assert_eq!(config.initial_state().unwrap(), BlochVector::ONE);
    }
}
