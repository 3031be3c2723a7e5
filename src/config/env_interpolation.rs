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

//! Environment variable interpolation for configuration text.
//!
//! Two forms are recognised:
//! - `${NAME}` is replaced by the value of `NAME` and fails when it is unset
//! - `${NAME:-fallback}` uses `fallback` when `NAME` is unset or empty
//!
//! ```
//! use jokes_server::config::env_interpolation::interpolate;
//!
//! std::env::remove_var("DOC_JOKES_PORT");
//! let yaml = interpolate("port: ${DOC_JOKES_PORT:-3000}").unwrap();
//! assert_eq!(yaml, "port: 3000");
//! ```

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::env;

/// Upper bound on the size of an interpolated document.
const MAX_INTERPOLATED_LENGTH: usize = 1_000_000;

lazy_static! {
    /// Matches `${NAME}` and `${NAME:-default}` with POSIX variable names.
    static ref ENV_VAR_PATTERN: Regex = Regex::new(
        r"\$\{([A-Za-z_][A-Za-z0-9_]*)(:-([^}]*))?\}"
    ).unwrap_or_else(|e| panic!("invalid interpolation pattern: {e}"));
}

/// Errors that can occur during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Environment variable '{name}' does not contain valid Unicode")]
    NotUnicode { name: String },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

/// Replace every `${...}` reference in `input` with its environment value.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;
    let mut used = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();
        let fallback = caps.get(3).map(|m| m.as_str());

        result.push_str(&input[last_end..whole.start()]);
        result.push_str(&resolve(name, fallback)?);
        last_end = whole.end();
        used.push(name);

        if result.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }
    result.push_str(&input[last_end..]);

    if !used.is_empty() {
        // names only, values may be secrets
        debug!("Interpolated environment variables: {}", used.join(", "));
    }

    Ok(result)
}

fn resolve(name: &str, fallback: Option<&str>) -> Result<String, InterpolationError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => {
            fallback
                .map(str::to_string)
                .ok_or_else(|| InterpolationError::MissingVariable {
                    name: name.to_string(),
                })
        }
        Err(env::VarError::NotUnicode(_)) => Err(InterpolationError::NotUnicode {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_value_replaces_reference() {
        env::set_var("JOKES_TEST_HOST", "127.0.0.1");
        let result = interpolate("host: ${JOKES_TEST_HOST}").unwrap();
        assert_eq!(result, "host: 127.0.0.1");
        env::remove_var("JOKES_TEST_HOST");
    }

    #[test]
    #[serial]
    fn test_default_used_when_unset_or_empty() {
        env::remove_var("JOKES_TEST_UNSET");
        env::set_var("JOKES_TEST_EMPTY", "");

        let result = interpolate("a: ${JOKES_TEST_UNSET:-x}\nb: ${JOKES_TEST_EMPTY:-y}").unwrap();
        assert_eq!(result, "a: x\nb: y");

        env::remove_var("JOKES_TEST_EMPTY");
    }

    #[test]
    #[serial]
    fn test_value_wins_over_default() {
        env::set_var("JOKES_TEST_PORT", "8081");
        let result = interpolate("port: ${JOKES_TEST_PORT:-3000}").unwrap();
        assert_eq!(result, "port: 8081");
        env::remove_var("JOKES_TEST_PORT");
    }

    #[test]
    #[serial]
    fn test_missing_variable_is_an_error() {
        env::remove_var("JOKES_TEST_MISSING");
        let result = interpolate("path: ${JOKES_TEST_MISSING}");
        assert!(matches!(
            result,
            Err(InterpolationError::MissingVariable { ref name }) if name == "JOKES_TEST_MISSING"
        ));
    }

    #[test]
    fn test_text_without_references_is_unchanged() {
        let input = "server:\n  port: 3000\n  dash: ${NOT-A-NAME}";
        assert_eq!(interpolate(input).unwrap(), input);
    }

    #[test]
    #[serial]
    fn test_oversized_result_is_rejected() {
        env::set_var("JOKES_TEST_HUGE", "x".repeat(MAX_INTERPOLATED_LENGTH + 1));
        let result = interpolate("${JOKES_TEST_HUGE}");
        assert!(matches!(result, Err(InterpolationError::ResultTooLarge)));
        env::remove_var("JOKES_TEST_HUGE");
    }
}
