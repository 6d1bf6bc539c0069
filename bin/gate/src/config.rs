//! Centralized tool configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables (`SKILLCERT_` prefix, `__` separator). The route
//! table defaults to the platform's canonical layout; see
//! [`RouteMap`](skillcert_access::RouteMap).

use serde::Deserialize;
use skillcert_access::RouteMap;

/// Configuration for the gate inspection tool.
#[derive(Debug, Deserialize)]
pub struct GateConfig {
    /// Path to the persisted credential file.
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,

    /// Route table; defaults to the platform's canonical routes.
    #[serde(default)]
    pub routes: RouteMap,
}

fn default_credentials_path() -> String {
    "credentials.json".to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
            routes: RouteMap::default(),
        }
    }
}

impl GateConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value cannot be deserialized.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("SKILLCERT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
