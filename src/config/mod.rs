// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Engine configuration.
//!
//! Strategy weights, the key-detection window and service timing. Every
//! field has a default, so a config file only needs the values it changes.
//! Files ending in `.toml` are read as TOML, anything else as YAML.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Tunable engine parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Chance of quoting a genre example fragment before the normal suggesters
    pub classic_example_probability: f64,
    /// Chance the chord suggester follows a progression rather than voice leading
    pub progression_probability: f64,
    /// Chance the note suggester walks a melodic pattern
    pub melodic_pattern_probability: f64,
    /// Chance the note suggester leaps to a scale degree
    /// (stepwise motion takes what is left)
    pub scale_degree_probability: f64,
    /// Chance a scale-degree leap is restricted to root, third and fifth
    pub strong_degree_probability: f64,
    /// Number of most recent pitches considered by key detection
    pub key_window: usize,
    /// Quiet interval before the service computes a suggestion (ms)
    pub debounce_ms: u64,
    /// Extra delay before a suggestion is published (ms)
    pub latency_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            classic_example_probability: 0.1,
            progression_probability: 0.5,
            melodic_pattern_probability: 0.4,
            scale_degree_probability: 0.3,
            strong_degree_probability: 0.7,
            key_window: 8,
            debounce_ms: 500,
            latency_ms: 50,
        }
    }
}

impl EngineConfig {
    /// Load a configuration file, choosing the format by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            _ => Self::from_yaml(&contents)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Check that every probability is usable
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("classic_example_probability", self.classic_example_probability),
            ("progression_probability", self.progression_probability),
            ("melodic_pattern_probability", self.melodic_pattern_probability),
            ("scale_degree_probability", self.scale_degree_probability),
            ("strong_degree_probability", self.strong_degree_probability),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                bail!("{} must be between 0 and 1, got {}", name, value);
            }
        }
        if self.melodic_pattern_probability + self.scale_degree_probability > 1.0 {
            bail!(
                "melodic_pattern_probability + scale_degree_probability must not exceed 1, got {}",
                self.melodic_pattern_probability + self.scale_degree_probability
            );
        }
        if self.key_window == 0 {
            bail!("key_window must be at least 1");
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classic_example_probability, 0.1);
        assert_eq!(config.key_window, 8);
        assert_eq!(config.latency(), Duration::from_millis(50));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EngineConfig::from_yaml("classic_example_probability: 0.0\nkey_window: 4\n").unwrap();
        assert_eq!(config.classic_example_probability, 0.0);
        assert_eq!(config.key_window, 4);
        assert_eq!(config.progression_probability, 0.5);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = EngineConfig {
            debounce_ms: 250,
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(EngineConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_toml_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "progression_probability = 1.0\nlatency_ms = 0").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.progression_probability, 1.0);
        assert_eq!(config.latency_ms, 0);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "strong_degree_probability: 0.25").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.strong_degree_probability, 0.25);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let out_of_range = EngineConfig {
            classic_example_probability: 1.5,
            ..Default::default()
        };
        assert!(out_of_range.validate().is_err());

        let oversubscribed = EngineConfig {
            melodic_pattern_probability: 0.8,
            scale_degree_probability: 0.5,
            ..Default::default()
        };
        assert!(oversubscribed.validate().is_err());

        let no_window = EngineConfig {
            key_window: 0,
            ..Default::default()
        };
        assert!(no_window.validate().is_err());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "progression_probability: -0.1").unwrap();
        assert!(EngineConfig::load(file.path()).is_err());
        assert!(EngineConfig::load("/nonexistent/tunesmith.yaml").is_err());
    }
}
