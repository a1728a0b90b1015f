//! Runtime configuration from environment variables.
//!
//! # Responsibility
//! - Resolve id policy, add-screen back policy and logging settings.
//! - Reject unknown values instead of silently falling back.
//!
//! # Invariants
//! - Empty or whitespace-only values are treated as unset.
//! - Logging stays disabled unless `NOTES_LOG_DIR` is set.

use crate::app::AddBackPolicy;
use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::store::note_store::IdPolicy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_ID_POLICY: &str = "NOTES_ID_POLICY";
pub const ENV_ADD_BACK: &str = "NOTES_ADD_BACK";
pub const ENV_LOG_LEVEL: &str = "NOTES_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "NOTES_LOG_DIR";

/// Resolved app configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub id_policy: IdPolicy,
    pub add_back: AddBackPolicy,
    /// `None` keeps logging off.
    pub log: Option<LogSettings>,
}

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// One of `trace|debug|info|warn|error`.
    pub level: &'static str,
    /// Absolute log directory.
    pub dir: PathBuf,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "invalid {key} value `{value}`; expected {expected}"),
        }
    }
}

impl Error for ConfigError {}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let id_policy = match read(ENV_ID_POLICY) {
            Some(value) => parse_id_policy(&value)?,
            None => IdPolicy::default(),
        };
        let add_back = match read(ENV_ADD_BACK) {
            Some(value) => parse_add_back_policy(&value)?,
            None => AddBackPolicy::default(),
        };
        let log = match read(ENV_LOG_DIR) {
            Some(dir) => {
                let level = match read(ENV_LOG_LEVEL) {
                    Some(value) => {
                        normalize_level(&value).map_err(|_| ConfigError::InvalidValue {
                            key: ENV_LOG_LEVEL,
                            value: value.clone(),
                            expected: "trace|debug|info|warn|error",
                        })?
                    }
                    None => default_log_level(),
                };
                let dir = normalize_log_dir(&dir).map_err(|_| ConfigError::InvalidValue {
                    key: ENV_LOG_DIR,
                    value: dir.clone(),
                    expected: "an absolute directory path",
                })?;
                Some(LogSettings { level, dir })
            }
            None => None,
        };

        Ok(Self {
            id_policy,
            add_back,
            log,
        })
    }
}

/// Parses `monotonic | collection_size`.
pub fn parse_id_policy(value: &str) -> Result<IdPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "monotonic" => Ok(IdPolicy::Monotonic),
        "collection_size" => Ok(IdPolicy::CollectionSize),
        _ => Err(ConfigError::InvalidValue {
            key: ENV_ID_POLICY,
            value: value.to_string(),
            expected: "monotonic|collection_size",
        }),
    }
}

/// Parses `lenient | strict | discard`.
pub fn parse_add_back_policy(value: &str) -> Result<AddBackPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "lenient" => Ok(AddBackPolicy::Lenient),
        "strict" => Ok(AddBackPolicy::Strict),
        "discard" => Ok(AddBackPolicy::Discard),
        _ => Err(ConfigError::InvalidValue {
            key: ENV_ADD_BACK,
            value: value.to_string(),
            expected: "lenient|strict|discard",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_add_back_policy, parse_id_policy, AppConfig, ConfigError, ENV_ADD_BACK,
        ENV_ID_POLICY, ENV_LOG_DIR, ENV_LOG_LEVEL,
    };
    use crate::app::AddBackPolicy;
    use crate::store::note_store::IdPolicy;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.id_policy, IdPolicy::Monotonic);
        assert_eq!(config.add_back, AddBackPolicy::Lenient);
        assert!(config.log.is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[(ENV_ID_POLICY, "  "), (ENV_LOG_DIR, "")]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_all_known_keys() {
        let dir = std::env::temp_dir();
        let dir_text = dir.to_str().unwrap().to_string();
        let config = config_from(&[
            (ENV_ID_POLICY, "collection_size"),
            (ENV_ADD_BACK, "Discard"),
            (ENV_LOG_LEVEL, "WARNING"),
            (ENV_LOG_DIR, dir_text.as_str()),
        ])
        .unwrap();
        assert_eq!(config.id_policy, IdPolicy::CollectionSize);
        assert_eq!(config.add_back, AddBackPolicy::Discard);
        let log = config.log.unwrap();
        assert_eq!(log.level, "warn");
        assert_eq!(log.dir, dir);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = config_from(&[(ENV_ID_POLICY, "random")]).unwrap_err();
        assert!(err.to_string().contains("NOTES_ID_POLICY"));

        let err = config_from(&[(ENV_LOG_DIR, "relative/logs")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: ENV_LOG_DIR,
                ..
            }
        ));
    }

    #[test]
    fn parsers_accept_documented_values() {
        assert_eq!(parse_id_policy("monotonic").unwrap(), IdPolicy::Monotonic);
        assert_eq!(
            parse_add_back_policy("strict").unwrap(),
            AddBackPolicy::Strict
        );
        assert!(parse_add_back_policy("save").is_err());
    }
}
