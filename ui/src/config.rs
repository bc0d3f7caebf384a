//! Client configuration shared by the launchers.
use thiserror::Error;

/// Environment variable holding the local API base URL.
pub const API_URL_VAR: &str = "NODEVIEW_API_URL";
/// Environment variable forcing the read-only view.
pub const READONLY_VAR: &str = "NODEVIEW_READONLY";

const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A boolean flag held something other than true/false
    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL the API endpoints are joined onto
    pub api_base: String,
    /// Hides the disconnect action and the update notice
    pub readonly: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            readonly: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base) = lookup(API_URL_VAR) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(value) = lookup(READONLY_VAR) {
            config.readonly = parse_flag(READONLY_VAR, &value)?;
        }
        Ok(config)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<_, _> = vars.iter().copied().collect();
        move |var| map.get(var).map(|v| v.to_string())
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base, "/api");
        assert!(!config.readonly);
    }

    #[test]
    fn reads_base_and_flag() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_VAR, "http://localhost:8088/api/"),
            (READONLY_VAR, "YES"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "http://localhost:8088/api");
        assert!(config.readonly);
    }

    #[test]
    fn rejects_unknown_flag_values() {
        let err = ClientConfig::from_lookup(lookup(&[(READONLY_VAR, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                var: READONLY_VAR,
                value: "maybe".into()
            }
        );
    }
}
