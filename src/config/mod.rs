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

//! Configuration management for the jokes server.
//!
//! Configuration comes from an optional YAML or JSON file. Without a file the
//! built-in defaults are used. Both paths interpolate environment variables:
//! - `${VAR_NAME}` - Required variable
//! - `${VAR_NAME:-default}` - Variable with default value
//!
//! ## Configuration File Example
//!
//! ```yaml
//! server:
//!   host: "0.0.0.0"
//!   port: ${PORT:-3000}
//!   log_level: info
//!   environment: "${NODE_ENV:-development}"
//!
//! database:
//!   path: "./database.sqlite"
//!   max_connections: 5
//!   log_statements: false
//! ```

pub mod env_interpolation;
pub mod loader;
pub mod types;

pub use loader::{
    default_config, from_json_str, from_yaml_str, load_config_file, load_or_default, ConfigError,
    DEFAULT_CONFIG_YAML,
};
pub use types::{
    DatabaseSettings, Environment, JokesServerConfig, ServerSettings, IN_MEMORY_DATABASE,
};
