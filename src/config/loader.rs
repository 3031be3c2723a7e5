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

//! Configuration loading with environment variable interpolation.
//!
//! Every loading path interpolates `${...}` references before parsing, so a
//! config file and the built-in defaults resolve `PORT`, `NODE_ENV` and friends
//! the same way.

use super::env_interpolation;
use super::types::JokesServerConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Configuration used when no file is supplied.
pub const DEFAULT_CONFIG_YAML: &str = r#"
server:
  host: "${HOST:-0.0.0.0}"
  port: ${PORT:-3000}
  log_level: "${LOG_LEVEL:-info}"
  environment: "${NODE_ENV:-development}"
database:
  path: "${DATABASE_PATH:-database.sqlite}"
  max_connections: 5
  log_statements: true
"#;

/// Unified error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] env_interpolation::InterpolationError),

    #[error("Failed to parse config file '{path}': YAML error: {yaml_err}, JSON error: {json_err}")]
    ParseError {
        path: String,
        yaml_err: String,
        json_err: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(#[from] anyhow::Error),
}

/// Deserialize YAML after interpolating environment variables.
pub fn from_yaml_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_yaml::from_str(&interpolated)?)
}

/// Deserialize JSON after interpolating environment variables.
pub fn from_json_str<T: DeserializeOwned>(s: &str) -> Result<T, ConfigError> {
    let interpolated = env_interpolation::interpolate(s)?;
    Ok(serde_json::from_str(&interpolated)?)
}

/// Build the default configuration from the process environment.
///
/// ```
/// use jokes_server::config::default_config;
///
/// std::env::remove_var("PORT");
/// let config = default_config().unwrap();
/// assert_eq!(config.server.port, 3000);
/// ```
pub fn default_config() -> Result<JokesServerConfig, ConfigError> {
    let config: JokesServerConfig = from_yaml_str(DEFAULT_CONFIG_YAML)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a configuration file.
///
/// The content is interpolated, parsed as YAML and, failing that, as JSON.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<JokesServerConfig, ConfigError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;
    let interpolated = env_interpolation::interpolate(&content)?;

    let config = match serde_yaml::from_str::<JokesServerConfig>(&interpolated) {
        Ok(config) => config,
        Err(yaml_err) => match serde_json::from_str::<JokesServerConfig>(&interpolated) {
            Ok(config) => config,
            Err(json_err) => {
                return Err(ConfigError::ParseError {
                    path: path_ref.display().to_string(),
                    yaml_err: yaml_err.to_string(),
                    json_err: json_err.to_string(),
                });
            }
        },
    };

    config.validate()?;
    Ok(config)
}

/// Load `path` when given, otherwise fall back to [`default_config`].
pub fn load_or_default<P: AsRef<Path>>(
    path: Option<P>,
) -> Result<JokesServerConfig, ConfigError> {
    match path {
        Some(path) => load_config_file(path),
        None => default_config(),
    }
}
