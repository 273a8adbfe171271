//! # Importer Configuration Module
//!
//! This module defines the tunable parameters of the raw-text importer and
//! the environment variables that override them.

use crate::importer_errors::ImportError;
use std::env;

// Constants for importer configuration
pub const DEFAULT_TITLE_SCAN_LINES: usize = 5;
pub const DEFAULT_TITLE_MIN_LEN: usize = 3;
pub const DEFAULT_TITLE_MAX_LEN: usize = 50;

pub const ENV_TITLE_SCAN_LINES: &str = "RECIPE_IMPORTER_TITLE_SCAN_LINES";
pub const ENV_TITLE_MIN_LEN: &str = "RECIPE_IMPORTER_TITLE_MIN_LEN";
pub const ENV_TITLE_MAX_LEN: &str = "RECIPE_IMPORTER_TITLE_MAX_LEN";
pub const ENV_LOG_JSON: &str = "RECIPE_IMPORTER_LOG_JSON";

/// Bounds for title detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRules {
    /// Number of leading lines searched for a title, blank lines included
    pub scan_lines: usize,
    /// Minimum title length in characters (inclusive)
    pub min_len: usize,
    /// Maximum title length in characters (inclusive)
    pub max_len: usize,
}

impl Default for TitleRules {
    fn default() -> Self {
        Self {
            scan_lines: DEFAULT_TITLE_SCAN_LINES,
            min_len: DEFAULT_TITLE_MIN_LEN,
            max_len: DEFAULT_TITLE_MAX_LEN,
        }
    }
}

impl TitleRules {
    /// Check whether a candidate title falls within the length bounds
    pub fn accepts(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        len >= self.min_len && len <= self.max_len
    }
}

/// Configuration structure for the importer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImporterConfig {
    /// Title detection bounds
    pub title: TitleRules,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl ImporterConfig {
    /// Build a configuration from defaults overridden by environment variables
    ///
    /// Unset variables keep their defaults; set but unparsable values are an error.
    pub fn from_env() -> Result<Self, ImportError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ImporterConfig::from_env`] with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ImportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TitleRules::default();
        let config = Self {
            title: TitleRules {
                scan_lines: parse_var(&lookup, ENV_TITLE_SCAN_LINES, defaults.scan_lines)?,
                min_len: parse_var(&lookup, ENV_TITLE_MIN_LEN, defaults.min_len)?,
                max_len: parse_var(&lookup, ENV_TITLE_MAX_LEN, defaults.max_len)?,
            },
            log_json: parse_var(&lookup, ENV_LOG_JSON, false)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that can never detect a title
    pub fn validate(&self) -> Result<(), ImportError> {
        if self.title.scan_lines == 0 {
            return Err(ImportError::Config(format!(
                "{ENV_TITLE_SCAN_LINES} must be at least 1"
            )));
        }
        if self.title.min_len > self.title.max_len {
            return Err(ImportError::Config(format!(
                "title length bounds are inverted: min {} > max {}",
                self.title.min_len, self.title.max_len
            )));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ImportError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ImportError::Config(format!("invalid value for {key}: '{raw}'"))),
    }
}
