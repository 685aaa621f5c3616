// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Configuration utils.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use xdg::BaseDirectories;

/// Encountered when the configuration cannot be loaded.
#[derive(Error, Debug)]
#[error("Configuration Error: {0}")]
pub struct ConfigError(#[from] toml::de::Error);

/// Default configuration TOML string.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Name of the configuration file in the XDG config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Highest possible similarity score.
const MAX_SCORE: u8 = 100;

/// Represents a piece of configuration that can be merged with another one.
trait MergeableConfig {
    /// Merge this configuration object with another one, taking values not set in this object from
    /// the other one (if present).
    fn merge(&self, other: &Self) -> Self;
}

/// Configuration for ranking candidates against a query.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize)]
pub struct RankingConfig {
    /// Candidates with a lower score are not listed.
    pub min_score: Option<u8>,
    /// Do not list more than this number of candidates.
    ///
    /// Use `0` to disable this limit.
    pub limit: Option<usize>,
}

impl MergeableConfig for RankingConfig {
    fn merge(&self, other: &Self) -> Self {
        RankingConfig {
            min_score: self.min_score.or(other.min_score),
            limit: self.limit.or(other.limit).filter(|&x| x != 0),
        }
    }
}

/// Configuration for conflict notifications.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Candidates with at least this score are considered potential conflicts.
    pub threshold: Option<u8>,
}

impl MergeableConfig for NotificationConfig {
    fn merge(&self, other: &Self) -> Self {
        NotificationConfig {
            threshold: self.threshold.or(other.threshold),
        }
    }
}

/// Output format of the command line interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for the command line output.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output format.
    pub format: Option<OutputFormat>,
    /// Use colors in text output.
    pub color: Option<bool>,
}

impl MergeableConfig for OutputConfig {
    fn merge(&self, other: &Self) -> Self {
        OutputConfig {
            format: self.format.or(other.format),
            color: self.color.or(other.color),
        }
    }
}

/// The main configuration struct.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Config {
    /// Configuration for ranking candidates.
    #[serde(default)]
    pub ranking: RankingConfig,
    /// Configuration for conflict notifications.
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Configuration for the command line output.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::load_default().expect("Failed to load default config")
    }
}

impl MergeableConfig for Config {
    /// Merge this configuration object with another one, taking values not set in this object from
    /// the other one (if present).
    fn merge(&self, other: &Self) -> Self {
        Config {
            ranking: self.ranking.merge(&other.ranking),
            notification: self.notification.merge(&other.notification),
            output: self.output.merge(&other.output),
        }
    }
}

impl Config {
    /// Load the configuration from a string slice.
    fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(text)?;
        Ok(config)
    }

    /// Load the default configuration.
    fn load_default() -> Result<Self, ConfigError> {
        Self::load_from_str(DEFAULT_CONFIG)
    }

    /// Load the configuration from a file located at the given path.
    ///
    /// # Errors
    ///
    /// This method can fail if the file cannot be accessed or if it contains malformed
    /// configuration markup.
    pub fn load_from_path<T: AsRef<Path>>(path: T) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::load_from_str(&text)?;
        Ok(config)
    }

    /// Path of the configuration file in the XDG config directory, if it exists.
    #[must_use]
    pub fn find_user_config() -> Option<PathBuf> {
        BaseDirectories::with_prefix(env!("CARGO_PKG_NAME")).find_config_file(CONFIG_FILE_NAME)
    }

    /// Merge this configuration struct with the default values.
    #[must_use]
    pub fn with_defaults(&self) -> Self {
        let default = Self::default();
        self.merge(&default)
    }

    /// Check that all configured values are within their valid range.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification threshold exceeds the maximum score.
    pub fn validate(self) -> crate::Result<Self> {
        match self.notification.threshold {
            Some(threshold) if threshold > MAX_SCORE => {
                Err(crate::Error::InvalidThreshold(threshold))
            }
            _ => Ok(self),
        }
    }

    /// Minimum score of listed candidates.
    #[must_use]
    pub fn min_score(&self) -> u8 {
        self.ranking.min_score.unwrap_or(0)
    }

    /// Maximum number of listed candidates, or `None` if unlimited.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.ranking.limit.filter(|&x| x != 0)
    }

    /// Score at which a candidate is considered a potential conflict.
    #[must_use]
    pub fn notification_threshold(&self) -> u8 {
        self.notification.threshold.unwrap_or(MAX_SCORE)
    }

    /// Output format of the command line interface.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or(OutputFormat::Text)
    }

    /// Returns `true` if text output should be colored.
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.output.color.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.min_score(), 0);
        assert_eq!(config.limit(), Some(25));
        assert_eq!(config.notification_threshold(), 65);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.use_color());
    }

    #[test]
    fn test_partial_config_with_defaults() {
        let config = Config::load_from_str("[notification]\nthreshold = 80\n")
            .unwrap()
            .with_defaults();
        assert_eq!(config.notification_threshold(), 80);
        assert_eq!(config.limit(), Some(25));
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_zero_limit_disables_limit() {
        let config = Config::load_from_str("[ranking]\nlimit = 0\n")
            .unwrap()
            .with_defaults();
        assert_eq!(config.limit(), None);
    }

    #[test]
    fn test_output_format() {
        let config = Config::load_from_str("[output]\nformat = \"json\"\ncolor = false\n")
            .unwrap()
            .with_defaults();
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!config.use_color());
    }

    #[test]
    fn test_malformed_config() {
        assert!(Config::load_from_str("[output]\nformat = \"yaml\"\n").is_err());
        assert!(Config::load_from_str("[ranking\n").is_err());
    }

    #[test]
    fn test_validate_threshold() {
        let config = Config::load_from_str("[notification]\nthreshold = 101\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(crate::Error::InvalidThreshold(101))
        ));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ranking]\nmin_score = 40").unwrap();
        let config = Config::load_from_path(file.path()).unwrap().with_defaults();
        assert_eq!(config.min_score(), 40);
        assert_eq!(config.notification_threshold(), 65);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_path(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("threshold = 65"));
    }
}
