// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub limits: LimitsConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Bot appearance served by the GET / endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// Board validation bounds
///
/// Boards larger than this are rejected at grid construction. The cap
/// also keeps path costs comfortably inside the i8 domain the search
/// uses.
#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    pub max_board_width: i32,
    pub max_board_height: i32,
}

/// Diagnostics configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DiagnosticsConfig {
    /// Log every per-food ranking row at info level. Useful when
    /// replaying games; noisy in production.
    pub log_rankings: bool,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            appearance: AppearanceConfig {
                author: "pathrank".to_string(),
                color: "#00DEAD".to_string(),
                head: "default".to_string(),
                tail: "default".to_string(),
            },
            limits: LimitsConfig {
                max_board_width: 25,
                max_board_height: 25,
            },
            diagnostics: DiagnosticsConfig {
                log_rankings: true,
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Snake.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_can_be_created() {
        let config = Config::default_hardcoded();
        assert_eq!(config.limits.max_board_width, 25);
        assert_eq!(config.limits.max_board_height, 25);
        assert_eq!(config.appearance.head, "default");
    }

    #[test]
    fn test_snake_toml_can_be_parsed() {
        // This test ensures Snake.toml is valid and can be parsed
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(
            file_config.appearance.author,
            hardcoded_config.appearance.author
        );
        assert_eq!(
            file_config.appearance.color,
            hardcoded_config.appearance.color
        );
        assert_eq!(
            file_config.limits.max_board_width,
            hardcoded_config.limits.max_board_width
        );
        assert_eq!(
            file_config.limits.max_board_height,
            hardcoded_config.limits.max_board_height
        );
        assert_eq!(
            file_config.diagnostics.log_rankings,
            hardcoded_config.diagnostics.log_rankings
        );
    }

    #[test]
    fn test_load_or_default_works() {
        let config = Config::load_or_default();
        assert!(config.limits.max_board_width > 0);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        // Test with a non-existent file
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}
