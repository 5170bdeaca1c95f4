//! Configuration handling for the TUI

use crate::state::EmailPattern;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_TITLE: &str = "Onboarding";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid email_pattern {pattern:?}: {source}")]
    InvalidEmailPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("no home directory available to place {0}")]
    NoProjectDirs(&'static str),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OnboardConfig {
    /// Where the onboarded profile is written
    pub profile_path: Option<PathBuf>,
    /// Regular expression overriding the default email shape
    pub email_pattern: Option<String>,
    /// Header text
    pub app_title: Option<String>,
    /// Directory holding `onboard-tui.log`
    pub log_dir: Option<PathBuf>,
}

impl OnboardConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "onboard", "onboard-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: OnboardConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded config");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn email_pattern(&self) -> Result<EmailPattern, ConfigError> {
        match &self.email_pattern {
            Some(pattern) => {
                EmailPattern::new(pattern).map_err(|source| ConfigError::InvalidEmailPattern {
                    pattern: pattern.clone(),
                    source,
                })
            }
            None => Ok(EmailPattern::default()),
        }
    }

    /// Configured profile path, or `profile.json` in the data directory
    pub fn profile_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.profile_path {
            return Ok(path.clone());
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("profile.json"))
            .ok_or(ConfigError::NoProjectDirs("profile.json"))
    }

    /// Configured log directory, or the data directory
    pub fn log_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.log_dir {
            return Ok(dir.clone());
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(ConfigError::NoProjectDirs("onboard-tui.log"))
    }

    pub fn title(&self) -> &str {
        self.app_title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = OnboardConfig::default();
        assert!(config.profile_path.is_none());
        assert!(config.email_pattern.is_none());
        assert!(config.app_title.is_none());
        assert_eq!(config.title(), "Onboarding");
    }

    #[test]
    fn test_serialization() {
        let config = OnboardConfig {
            profile_path: Some(PathBuf::from("/tmp/profile.json")),
            email_pattern: Some(r"^.+@.+$".to_string()),
            app_title: Some("Little Lemon".to_string()),
            log_dir: Some(PathBuf::from("/tmp/onboard-logs")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: OnboardConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.profile_path, Some(PathBuf::from("/tmp/profile.json")));
        assert_eq!(parsed.email_pattern, Some(r"^.+@.+$".to_string()));
        assert_eq!(parsed.title(), "Little Lemon");
        assert_eq!(parsed.log_dir, Some(PathBuf::from("/tmp/onboard-logs")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: OnboardConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.profile_path.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"app_title": "Welcome", "unknown_field": "value"}"#;
        let parsed: OnboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.title(), "Welcome");
    }

    #[test]
    fn test_default_email_pattern() {
        let pattern = OnboardConfig::default().email_pattern().unwrap();
        assert!(pattern.matches("a@b.com"));
        assert!(!pattern.matches("bad-email"));
    }

    #[test]
    fn test_custom_email_pattern() {
        let config = OnboardConfig {
            email_pattern: Some(r"^[a-z]+@corp\.example$".to_string()),
            ..Default::default()
        };
        let pattern = config.email_pattern().unwrap();
        assert!(pattern.matches("ana@corp.example"));
        assert!(!pattern.matches("a@b.com"));
    }

    #[test]
    fn test_invalid_email_pattern_is_error() {
        let config = OnboardConfig {
            email_pattern: Some("([unclosed".to_string()),
            ..Default::default()
        };
        let err = config.email_pattern().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEmailPattern { .. }));
        assert!(err.to_string().contains("([unclosed"));
    }

    #[test]
    fn test_profile_path_override() {
        let config = OnboardConfig {
            profile_path: Some(PathBuf::from("/srv/onboard/me.json")),
            ..Default::default()
        };
        assert_eq!(
            config.profile_path().unwrap(),
            PathBuf::from("/srv/onboard/me.json")
        );
    }

    #[test]
    fn test_log_dir_override() {
        let config = OnboardConfig {
            log_dir: Some(PathBuf::from("/var/log/onboard")),
            ..Default::default()
        };
        assert_eq!(config.log_dir().unwrap(), PathBuf::from("/var/log/onboard"));
    }

    #[test]
    fn test_load_returns_ok_when_no_file() {
        // Load falls back to defaults when the config file doesn't exist
        let result = OnboardConfig::load();
        assert!(result.is_ok());
    }
}
