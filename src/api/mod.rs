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

//! REST API implementation for the jokes server.
//!
//! The API uses URL-based versioning with joke endpoints prefixed with `/api/v1/`.
//!
//! ## API Structure
//!
//! ```text
//! /                     - Redirects to the Swagger UI
//! /docs/                - Swagger UI
//! /v1/swagger.json      - OpenAPI document for v1
//! /health               - Health check (unversioned)
//! /api/versions         - List available API versions
//! /api/v1/jokes         - Joke resource
//! ```
//!
//! ## Module Organization
//!
//! - `shared` - Errors, extractors, response types and handler logic
//! - `v1` - API version 1 handlers, routes and OpenAPI document
//! - `version` - Version constants and the version-prefix middleware

pub mod shared;
pub mod v1;
pub mod version;

pub use shared::error::*;
pub use shared::responses::*;

pub use v1::openapi::ApiDocV1;
pub use v1::routes::build_v1_router;

pub use version::{ApiVersion, BasePath, API_CURRENT_VERSION};
