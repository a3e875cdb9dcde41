//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `irrigo.toml` in the working directory unless a path is given.
//! Every field has a sensible default so the file is optional. Environment
//! variables take precedence over file values; command-line flags are
//! applied by the caller on top.

use std::path::Path;
use std::time::Duration;

use irrigo_adapter_http_reqwest::ControllerConfig;
use irrigo_app::services::poller::DEFAULT_POLL_INTERVAL;
use serde::Deserialize;

/// File read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "irrigo.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the controller lives.
    pub controller: ControllerConfig,
    /// Run-state polling settings.
    pub polling: PollingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Ignored override values; logged by the caller once tracing is up.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Run-state polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Gap between two run-state fetches, in milliseconds.
    pub interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `irrigo.toml` when `None`) then
    /// apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicitly given
    /// file cannot be read, or if the result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_required_file(path)?,
            None => Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn from_required_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("IRRIGO_URL") {
            self.controller.base_url = val;
        }
        if let Some(val) = lookup("IRRIGO_POLL_MS") {
            match val.parse() {
                Ok(ms) => self.polling.interval_ms = ms,
                Err(_) => self
                    .warnings
                    .push(format!("ignoring unparsable IRRIGO_POLL_MS {val:?}")),
            }
        }
        if let Some(val) = lookup("IRRIGO_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Check the values that would otherwise fail much later.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.controller.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "controller base_url must not be empty".to_string(),
            ));
        }
        if self.controller.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "controller timeout_secs must be non-zero".to_string(),
            ));
        }
        if self.polling.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "polling interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.polling.interval_ms)
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: u64::try_from(DEFAULT_POLL_INTERVAL.as_millis()).unwrap_or(3_000),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "irrigoctl=info,irrigo_app=info,irrigo_adapter_http_reqwest=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.controller.base_url, "http://192.168.4.1");
        assert_eq!(config.controller.timeout_secs, 10);
        assert_eq!(config.polling.interval_ms, 3_000);
        assert_eq!(config.poll_interval(), Duration::from_secs(3));
        assert!(config.logging.filter.contains("irrigoctl=info"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.polling.interval_ms, 3_000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [controller]
            base_url = 'http://irrigation.local'
            timeout_secs = 4

            [polling]
            interval_ms = 1500

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.controller.base_url, "http://irrigation.local");
        assert_eq!(config.controller.timeout_secs, 4);
        assert_eq!(config.polling.interval_ms, 1500);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [polling]
            interval_ms = 500
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.polling.interval_ms, 500);
        assert_eq!(config.controller.base_url, "http://192.168.4.1");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent-irrigo.toml")).unwrap();
        assert_eq!(config.polling.interval_ms, 3_000);
    }

    #[test]
    fn should_fail_when_explicit_file_not_found() {
        let err = Config::from_required_file(Path::new("nonexistent-irrigo.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("IRRIGO_URL", "http://10.0.0.7"),
            ("IRRIGO_POLL_MS", "750"),
            ("IRRIGO_LOG", "warn"),
        ]));
        assert_eq!(config.controller.base_url, "http://10.0.0.7");
        assert_eq!(config.polling.interval_ms, 750);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_rust_log_over_irrigo_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("IRRIGO_LOG", "warn"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_poll_interval() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("IRRIGO_POLL_MS", "soon")]));
        assert_eq!(config.polling.interval_ms, 3_000);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("\"soon\""));
    }

    #[test]
    fn should_not_warn_for_valid_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("IRRIGO_POLL_MS", "500")]));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.polling.interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let mut config = Config::default();
        config.controller.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_blank_base_url() {
        let mut config = Config::default();
        config.controller.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
