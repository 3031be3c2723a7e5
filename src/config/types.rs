// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path value that selects a private in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

const VALID_LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Top-level configuration for the jokes server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JokesServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// HTTP listener and process settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Deployment environment name. Anything other than `production`
    /// recreates the schema on every boot.
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            environment: default_environment(),
        }
    }
}

/// SQLite storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// Database file path, or `:memory:` for a throwaway database.
    #[serde(default = "default_database_path")]
    pub path: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Log every SQL statement at debug level.
    #[serde(default = "default_log_statements")]
    pub log_statements: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            log_statements: default_log_statements(),
        }
    }
}

impl DatabaseSettings {
    /// Settings for an isolated in-memory database.
    pub fn in_memory() -> Self {
        Self {
            path: IN_MEMORY_DATABASE.to_string(),
            max_connections: 1,
            log_statements: false,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_DATABASE
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_database_path() -> String {
    "database.sqlite".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_statements() -> bool {
    true
}

/// Deployment environment derived from [`ServerSettings::environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    NonProduction,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::NonProduction
        }
    }

    /// Whether startup drops and recreates the schema.
    pub fn recreates_schema(&self) -> bool {
        matches!(self, Environment::NonProduction)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::NonProduction => write!(f, "non-production"),
        }
    }
}

impl JokesServerConfig {
    pub fn environment(&self) -> Environment {
        Environment::parse(&self.server.environment)
    }

    /// Check the semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(anyhow!("server.host must not be empty"));
        }
        if self.server.port == 0 {
            return Err(anyhow!("server.port must be between 1 and 65535"));
        }
        let level = self.server.log_level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(anyhow!(
                "server.log_level '{}' is invalid. Valid levels: {VALID_LOG_LEVELS:?}",
                self.server.log_level
            ));
        }
        if self.database.path.trim().is_empty() {
            return Err(anyhow!("database.path must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(anyhow!("database.max_connections must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JokesServerConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, "database.sqlite");
        assert_eq!(config.environment(), Environment::NonProduction);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse(" PRODUCTION "), Environment::Production);
        assert_eq!(Environment::parse("development"), Environment::NonProduction);
        assert_eq!(Environment::parse(""), Environment::NonProduction);
        assert!(!Environment::Production.recreates_schema());
        assert!(Environment::NonProduction.recreates_schema());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = JokesServerConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = JokesServerConfig::default();
        config.server.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_validate_rejects_zero_connections() {
        let mut config = JokesServerConfig::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_in_memory_settings() {
        let settings = DatabaseSettings::in_memory();
        assert!(settings.is_in_memory());
        assert_eq!(settings.max_connections, 1);
    }
}
