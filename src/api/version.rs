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

//! API version definitions and the version-prefix middleware.
//!
//! The middleware records, for every request reaching a versioned router,
//! the router's base path with `/{version}` prepended (e.g. a router mounted
//! at `/api/v1/jokes` under version `v1` yields `/v1/api/v1/jokes`). It never
//! rejects or short-circuits a request.

use axum::{
    extract::{NestedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::fmt;

/// The current/latest API version.
pub const API_CURRENT_VERSION: ApiVersion = ApiVersion::V1;

/// Available API versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API Version 1
    V1,
}

impl ApiVersion {
    /// Get the URL path prefix for this version.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "/api/v1",
        }
    }

    /// Get the version string (e.g., "v1").
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
        }
    }

    /// Path of the generated OpenAPI document for this version.
    pub fn openapi_path(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "/v1/swagger.json",
        }
    }

    /// Get all available API versions.
    pub fn all() -> &'static [ApiVersion] {
        &[ApiVersion::V1]
    }

    /// Get all version strings.
    pub fn all_strings() -> Vec<String> {
        Self::all().iter().map(|v| v.as_str().to_string()).collect()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" | "1" => Ok(ApiVersion::V1),
            _ => Err(format!("Unknown API version: {s}")),
        }
    }
}

/// Version-qualified base path of the router handling a request.
///
/// Inserted as a request extension by [`version_prefix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(pub String);

impl BasePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Prepend `/{version}` to the effective base path, then continue.
///
/// The starting base path is an existing [`BasePath`] if an outer layer
/// already set one, else the mount point of the nested router.
pub async fn version_prefix(
    State(version): State<ApiVersion>,
    mut request: Request,
    next: Next,
) -> Response {
    let extensions = request.extensions();
    let base = extensions
        .get::<BasePath>()
        .map(|path| path.0.clone())
        .or_else(|| {
            extensions
                .get::<NestedPath>()
                .map(|path| path.as_str().to_string())
        })
        .unwrap_or_default();

    let base = BasePath(format!("/{version}{base}"));
    request.extensions_mut().insert(base);
    next.run(request).await
}
