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

//! API v1 route definitions.
//!
//! All routes are designed to be nested under `/api/v1/`.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::api::version::{version_prefix, ApiVersion};

/// Build the complete v1 API router.
///
/// Handlers read the [`crate::models::JokeStore`] from a request extension
/// installed by the caller.
pub fn build_v1_router() -> Router {
    Router::new()
        .nest("/jokes", build_jokes_router())
        .merge(build_jokes_slash_router())
}

/// Joke routes, relative to their mount point.
///
/// `/random` is a static segment and takes precedence over `/:id`.
fn build_jokes_router() -> Router {
    Router::new()
        .route("/", get(handlers::list_jokes))
        .route("/", post(handlers::create_joke))
        .route("/random", get(handlers::get_random_joke))
        .route("/:id", get(handlers::get_joke))
        .layer(middleware::from_fn_with_state(
            ApiVersion::V1,
            version_prefix,
        ))
}

/// `/jokes/` answers like `/jokes`, which the nest alone does not match.
fn build_jokes_slash_router() -> Router {
    Router::new()
        .route(
            "/jokes/",
            get(handlers::list_jokes).post(handlers::create_joke),
        )
        .layer(middleware::from_fn_with_state(
            ApiVersion::V1,
            version_prefix,
        ))
}
