//! Search configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which of several equally good root moves the search returns.
///
/// Both policies return an optimal move; they only differ when more than
/// one move reaches the best value.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TieBreak {
    /// A later move that ties the best score replaces it (`>=` / `<=`).
    #[default]
    Last,
    /// The first move reaching the best score is kept (`>` / `<`).
    First,
}

/// Configuration for the adversarial search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tie-break policy among equally good root moves.
    #[serde(default)]
    tie_break: TieBreak,
}

impl SearchConfig {
    /// Creates a configuration with the given tie-break policy.
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Returns a copy with the tie-break policy replaced.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(tie_break = %config.tie_break, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_last() {
        assert_eq!(*SearchConfig::default().tie_break(), TieBreak::Last);
    }

    #[test]
    fn test_tie_break_parses_case_insensitive() {
        assert_eq!("first".parse::<TieBreak>().unwrap(), TieBreak::First);
        assert_eq!("LAST".parse::<TieBreak>().unwrap(), TieBreak::Last);
        assert!("middle".parse::<TieBreak>().is_err());
        assert_eq!(TieBreak::First.to_string(), "first");
    }

    #[test]
    fn test_parse_toml() {
        let config: SearchConfig = toml::from_str(r#"tie_break = "first""#).unwrap();
        assert_eq!(*config.tie_break(), TieBreak::First);

        let config: SearchConfig = toml::from_str("").unwrap();
        assert_eq!(*config.tie_break(), TieBreak::Last);
    }
}
