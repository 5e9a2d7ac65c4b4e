//! Application configuration.

use serde::Deserialize;
use std::path::Path;

use crate::sshkey::SshKeygenAlgorithm;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// SSH key generation configuration.
    #[serde(default)]
    pub ssh_keygen: SshKeygenConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public URL of this deployment.
    pub url: String,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// SSH key generation configuration.
///
/// The algorithm is read once at startup and handed to the key service at
/// construction time, so it stays fixed for the process lifetime.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SshKeygenConfig {
    /// Algorithm used when (re)generating a user's git SSH keypair.
    #[serde(default)]
    pub algorithm: SshKeygenAlgorithm,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_connections() -> u32 {
    100
}

const fn default_min_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `WORKBRIDGE_ENV`)
    /// 3. Environment variables with `WORKBRIDGE_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = std::env::var("WORKBRIDGE_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("WORKBRIDGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("WORKBRIDGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ssh_keygen_config_default() {
        let config = SshKeygenConfig::default();
        assert_eq!(config.algorithm, SshKeygenAlgorithm::Ed25519);
    }

    #[test]
    fn test_ssh_keygen_config_parse() {
        let config: SshKeygenConfig = serde_json::from_str(r#"{"algorithm": "rsa4096"}"#).unwrap();
        assert_eq!(config.algorithm, SshKeygenAlgorithm::Rsa4096);
    }
}
