//! Controller connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where the controller lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Root URL of the controller (e.g. `http://192.168.4.1`).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ControllerConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Address the controller takes in access-point mode.
            base_url: "http://192.168.4.1".to_string(),
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.base_url, "http://192.168.4.1");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            base_url = "http://irrigation.local"
            timeout_secs = 3
        "#;
        let config: ControllerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "http://irrigation.local");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: ControllerConfig = toml::from_str(r#"base_url = "http://10.0.0.5""#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5");
        assert_eq!(config.timeout_secs, 10);
    }
}
