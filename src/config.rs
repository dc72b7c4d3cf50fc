//! Configuration management for offboard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{DEFAULT_REQUEST_DELAY_MS, MAX_REQUEST_DELAY_MS};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub account: AccountConfig,
    pub ui: UiConfig,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

/// Account under deletion; supplied by the hosting environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Company logo URL, rendered as-is in the form header
    pub logo_url: String,
    /// Canonical account email used for the confirmation check
    pub user_email: String,
    /// Preformatted date the deletion takes effect; display only
    pub deletion_date: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme: "emoji", "unicode", or "ascii"
    pub icon_theme: IconTheme,
}

/// Deletion service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Settle delay of the simulated deletion request in milliseconds
    pub request_delay_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Log file path; defaults to the platform data directory when unset
    pub file: Option<PathBuf>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            logo_url: "https://example.com/logo.svg".to_string(),
            user_email: "user@example.com".to_string(),
            deletion_date: "September 30, 2026".to_string(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("offboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("offboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.account.user_email.trim().is_empty() {
            anyhow::bail!("account.user_email cannot be empty");
        }
        if !self.account.user_email.contains('@') {
            anyhow::bail!(
                "account.user_email '{}' is not a valid email address",
                self.account.user_email
            );
        }

        if self.account.deletion_date.trim().is_empty() {
            anyhow::bail!("account.deletion_date cannot be empty");
        }

        if self.service.request_delay_ms > MAX_REQUEST_DELAY_MS {
            anyhow::bail!(
                "service.request_delay_ms cannot exceed {} ({} given)",
                MAX_REQUEST_DELAY_MS,
                self.service.request_delay_ms
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Offboard Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("Generated default configuration file: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("offboard"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.request_delay_ms, DEFAULT_REQUEST_DELAY_MS);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [account]
            user_email = "jane@corp.example"
            deletion_date = "January 2, 2027"
            "#,
        )
        .unwrap();

        assert_eq!(config.account.user_email, "jane@corp.example");
        assert_eq!(config.account.deletion_date, "January 2, 2027");
        assert_eq!(config.service.request_delay_ms, DEFAULT_REQUEST_DELAY_MS);
        assert!(!config.logging.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let mut config = Config::default();
        config.account.user_email = "not-an-email".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_deletion_date() {
        let mut config = Config::default();
        config.account.deletion_date = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_excessive_request_delay() {
        let mut config = Config::default();
        config.service.request_delay_ms = MAX_REQUEST_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn icon_theme_parses_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            icon_theme = "unicode"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    }
}
