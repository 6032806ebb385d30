//! Configuration types.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::profile::model::settings_keys;

/// App configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the local settings database.
    pub db_path: PathBuf,
    /// Settings owner (single-user system).
    pub user_id: String,
    /// Whether the questionnaire is requested on first render even when a
    /// profile exists. Without a profile it is shown regardless.
    pub show_questionnaire_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./data/investor-profile.db"),
            user_id: settings_keys::DEFAULT_USER.to_string(),
            show_questionnaire_on_start: false,
        }
    }
}

impl AppConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let db_path = lookup("INVESTOR_PROFILE_DB_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let user_id = lookup("INVESTOR_PROFILE_USER")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.user_id);

        let show_questionnaire_on_start = match lookup("INVESTOR_PROFILE_SHOW_ON_START") {
            Some(raw) => parse_bool("INVESTOR_PROFILE_SHOW_ON_START", &raw)?,
            None => defaults.show_questionnaire_on_start,
        };

        Ok(Self {
            db_path,
            user_id,
            show_questionnaire_on_start,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected true/false, got {other:?}"),
        }),
    }
}
