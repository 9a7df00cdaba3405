//! # Client configuration — `rewards.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//! timeout_secs = 30
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`RewardsConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Where the REST API lives and how long a request may take. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardsConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Ignored in the browser, where `fetch` has none.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RewardsConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn filename() -> &'static str {
        "rewards.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = RewardsConfig::from_toml("").unwrap();
        assert_eq!(config, RewardsConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_partial_api_section() {
        let config = RewardsConfig::from_toml("[api]\nbase_url = \"https://rewards.example.com\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://rewards.example.com");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = RewardsConfig::default().with_base_url("http://10.0.0.2:3000");
        let text = config.to_toml().unwrap();
        assert!(text.contains("[api]"));
        assert_eq!(RewardsConfig::from_toml(&text).unwrap(), config);
    }
}
