// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, key policy, rate limits, and analyzer switches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Environment-based configuration management

use anyhow::{anyhow, Context, Result};
use bakebase_chemistry::AnalyzerOptions;
use bakebase_core::constants::{api_keys, network, rate_limits, service};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path of the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL or a bare file path
    ///
    /// # Errors
    ///
    /// Returns an error for non-`SQLite` URLs
    pub fn parse_url(s: &str) -> Result<Self> {
        if let Some(path) = s.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            if path == ":memory:" || path.is_empty() {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path),
                })
            }
        } else if s.contains("://") {
            Err(anyhow!("Unsupported DATABASE_URL scheme: {s}"))
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(network::DEFAULT_DATABASE_URL).unwrap_or(Self::Memory)
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Seed the ingredient table on startup when it is empty
    pub auto_seed: bool,
}

/// API key policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyConfig {
    /// Lifetime of provisioned keys in days
    pub expiry_days: i64,
}

/// Key provisioning rate limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per window per client IP
    pub max_requests: u32,
    /// Window length in seconds
    pub window_secs: u64,
}

/// Combination analyzer switches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Flag leavener-to-flour ratios above 6% (chemical) or 4% (yeast)
    pub detect_excess_leavening: bool,
}

impl AnalyzerConfig {
    /// Options passed to the combination analyzer
    #[must_use]
    pub const fn options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            detect_excess_leavening: self.detect_excess_leavening,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// API key policy
    pub api_keys: ApiKeyConfig,
    /// Key provisioning rate limit
    pub key_provisioning: RateLimitConfig,
    /// Analyzer switches
    pub analyzer: AnalyzerConfig,
    /// Base URL used in discovery documents
    pub public_base_url: String,
    /// Server name
    pub server_name: String,
    /// Server version (from Cargo.toml)
    pub server_version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: network::DEFAULT_HTTP_PORT,
            host: network::DEFAULT_HOST.to_owned(),
            environment: Environment::Development,
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
                auto_seed: true,
            },
            api_keys: ApiKeyConfig {
                expiry_days: api_keys::DEFAULT_EXPIRY_DAYS,
            },
            key_provisioning: RateLimitConfig {
                max_requests: rate_limits::KEY_PROVISIONING_MAX_REQUESTS,
                window_secs: rate_limits::KEY_PROVISIONING_WINDOW_SECS,
            },
            analyzer: AnalyzerConfig::default(),
            public_base_url: format!("http://localhost:{}", network::DEFAULT_HTTP_PORT),
            server_name: service::NAME.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = match env::var("HTTP_PORT").or_else(|_| env::var("PORT")) {
            Ok(port) => port
                .parse()
                .with_context(|| format!("Invalid HTTP_PORT value: {port}"))?,
            Err(_) => network::DEFAULT_HTTP_PORT,
        };

        let config = Self {
            http_port,
            host: env_var_or("HOST", network::DEFAULT_HOST),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    "DATABASE_URL",
                    network::DEFAULT_DATABASE_URL,
                ))?,
                auto_seed: parse_env("BAKEBASE_AUTO_SEED", true)?,
            },
            api_keys: ApiKeyConfig {
                expiry_days: parse_env("API_KEY_EXPIRY_DAYS", api_keys::DEFAULT_EXPIRY_DAYS)?,
            },
            key_provisioning: RateLimitConfig {
                max_requests: parse_env(
                    "KEY_PROVISIONING_LIMIT",
                    rate_limits::KEY_PROVISIONING_MAX_REQUESTS,
                )?,
                window_secs: parse_env(
                    "KEY_PROVISIONING_WINDOW_SECS",
                    rate_limits::KEY_PROVISIONING_WINDOW_SECS,
                )?,
            },
            analyzer: AnalyzerConfig {
                detect_excess_leavening: parse_env("BAKEBASE_DETECT_EXCESS_LEAVENING", false)?,
            },
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{http_port}")),
            server_name: service::NAME.to_owned(),
            server_version: env!("CARGO_PKG_VERSION").to_owned(),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error when a limit is zero or negative
    pub fn validate(&self) -> Result<()> {
        if self.api_keys.expiry_days <= 0 {
            return Err(anyhow!("API_KEY_EXPIRY_DAYS must be positive"));
        }
        if self.key_provisioning.max_requests == 0 {
            return Err(anyhow!("KEY_PROVISIONING_LIMIT must be at least 1"));
        }
        if self.key_provisioning.window_secs == 0 {
            return Err(anyhow!("KEY_PROVISIONING_WINDOW_SECS must be at least 1"));
        }
        Ok(())
    }

    /// Override the HTTP port, keeping a derived public URL in sync
    pub fn set_http_port(&mut self, port: u16) {
        let derived = format!("http://localhost:{}", self.http_port);
        if self.public_base_url == derived {
            self.public_base_url = format!("http://localhost:{port}");
        }
        self.http_port = port;
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} Configuration:\n\
             - Address: {}:{}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Auto Seed: {}\n\
             - API Key Expiry: {} days\n\
             - Key Provisioning Limit: {} per {}s\n\
             - Excess Leavening Detection: {}\n\
             - Public URL: {}",
            self.server_name,
            self.host,
            self.http_port,
            self.environment,
            self.database.url,
            self.database.auto_seed,
            self.api_keys.expiry_days,
            self.key_provisioning.max_requests,
            self.key_provisioning.window_secs,
            if self.analyzer.detect_excess_leavening {
                "Enabled"
            } else {
                "Disabled"
            },
            self.public_base_url,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {value}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("invalid"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        assert!(DatabaseUrl::parse_url("sqlite::memory:").unwrap().is_memory());
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/bakebase.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/bakebase.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("bakebase.db")
                .unwrap()
                .to_connection_string(),
            "sqlite:bakebase.db"
        );
        assert!(DatabaseUrl::parse_url("postgres://localhost/bakebase").is_err());
    }

    #[test]
    fn test_set_http_port_updates_derived_public_url() {
        let mut config = ServerConfig::default();
        config.set_http_port(8080);
        assert_eq!(config.public_base_url, "http://localhost:8080");

        config.public_base_url = "https://bakebase.example".to_owned();
        config.set_http_port(9090);
        assert_eq!(config.public_base_url, "https://bakebase.example");
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());
        config.key_provisioning.max_requests = 0;
        assert!(config.validate().is_err());
    }
}
