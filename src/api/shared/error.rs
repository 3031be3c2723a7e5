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

//! Error types and error handling utilities shared across API versions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::JokeStoreError;

/// Error codes for API responses
pub mod error_codes {
    pub const JOKE_NOT_FOUND: &str = "JOKE_NOT_FOUND";
    pub const NO_JOKES_AVAILABLE: &str = "NO_JOKES_AVAILABLE";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Client-facing messages.
pub mod messages {
    pub const JOKE_NOT_FOUND: &str = "Joke not found";
    pub const NO_JOKES_AVAILABLE: &str = "No jokes available";
    pub const TEXT_REQUIRED: &str = "Joke text is required";
    pub const INTERNAL_ERROR: &str = "Internal server error";
}

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    #[schema(example = "JOKE_NOT_FOUND")]
    pub code: String,
    /// Human-readable error message
    #[schema(example = "Joke not found")]
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn joke_not_found() -> Self {
        Self::new(error_codes::JOKE_NOT_FOUND, messages::JOKE_NOT_FOUND)
    }

    pub fn no_jokes_available() -> Self {
        Self::new(error_codes::NO_JOKES_AVAILABLE, messages::NO_JOKES_AVAILABLE)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_REQUEST, message)
    }

    /// Generic 500 body. Details stay in the server log.
    pub fn internal() -> Self {
        Self::new(error_codes::INTERNAL_ERROR, messages::INTERNAL_ERROR)
    }

    pub fn status(&self) -> StatusCode {
        status_from_code(&self.code)
    }

    /// Convert to a specific status code
    pub fn with_status(self) -> (StatusCode, Json<Self>) {
        (self.status(), Json(self))
    }
}

/// Convert an error code to an HTTP status code
fn status_from_code(code: &str) -> StatusCode {
    match code {
        error_codes::JOKE_NOT_FOUND | error_codes::NO_JOKES_AVAILABLE => StatusCode::NOT_FOUND,
        error_codes::INVALID_REQUEST => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        self.with_status().into_response()
    }
}

/// Validation failures become 400s; storage failures are logged and hidden
/// behind a generic 500.
impl From<JokeStoreError> for ErrorResponse {
    fn from(err: JokeStoreError) -> Self {
        match err {
            JokeStoreError::Validation(message) => ErrorResponse::invalid_request(message),
            JokeStoreError::Database(err) => {
                error!("Storage error while handling request: {err}");
                ErrorResponse::internal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let response = ErrorResponse::new("TEST_CODE", "Test message");
        assert_eq!(response.code, "TEST_CODE");
        assert_eq!(response.message, "Test message");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorResponse::joke_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorResponse::no_jokes_available().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorResponse::invalid_request("bad").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorResponse::internal().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorResponse::new("SOMETHING_ELSE", "x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let response: ErrorResponse = JokeStoreError::Validation("empty".to_string()).into();
        assert_eq!(response.code, error_codes::INVALID_REQUEST);
        assert_eq!(response.message, "empty");
    }

    #[test]
    fn test_database_error_is_hidden() {
        let response: ErrorResponse = JokeStoreError::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.message, messages::INTERNAL_ERROR);
        assert!(!response.message.contains("pool"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ErrorResponse::joke_not_found()).unwrap();
        assert_eq!(json["message"], "Joke not found");
        assert_eq!(json["code"], "JOKE_NOT_FOUND");
    }
}
