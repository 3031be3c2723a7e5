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

//! Common request and response types shared across API versions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status of the server ("ok" or "degraded")
    pub status: String,
    /// Database reachability ("ok" or "unavailable")
    pub database: String,
    /// Current server timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Response listing available API versions
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiVersionsResponse {
    /// List of available API versions
    pub versions: Vec<String>,
    /// The current/latest API version
    pub current: String,
}

/// Body of a create-joke request.
///
/// `text` is optional at the type level so a missing field can be reported
/// with the same message as an empty one.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateJokeRequest {
    /// Joke content
    #[schema(example = "Que dit un oignon quand il se cogne ?<br/>Aïe !")]
    pub text: Option<String>,
}
