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

//! API v1 handler functions with OpenAPI documentation.
//!
//! These handlers wrap the shared handler implementations with v1-specific
//! path annotations for OpenAPI documentation. Paths are relative to the
//! `/api/v1` server declared in [`super::openapi::ApiDocV1`].

use axum::{extract::Extension, http::StatusCode, response::Json};

use crate::api::shared::{CreateJokeRequest, ErrorResponse, JokeIdPath, JsonOrForm};
use crate::api::version::BasePath;
use crate::models::{Joke, JokeStore};

use crate::api::shared::handlers as shared;

/// Retrieve all jokes
#[utoipa::path(
    get,
    path = "/jokes",
    responses(
        (status = 200, description = "List of jokes", body = [Joke]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Jokes"
)]
pub async fn list_jokes(
    Extension(store): Extension<JokeStore>,
    base: Option<Extension<BasePath>>,
) -> Result<Json<Vec<Joke>>, ErrorResponse> {
    shared::list_jokes(Extension(store), base).await
}

/// Retrieve a random joke
#[utoipa::path(
    get,
    path = "/jokes/random",
    responses(
        (status = 200, description = "Random joke", body = Joke),
        (status = 404, description = "No jokes available", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Jokes"
)]
pub async fn get_random_joke(
    Extension(store): Extension<JokeStore>,
    base: Option<Extension<BasePath>>,
) -> Result<Json<Joke>, ErrorResponse> {
    shared::get_random_joke(Extension(store), base).await
}

/// Retrieve a joke by its id
#[utoipa::path(
    get,
    path = "/jokes/{id}",
    params(
        ("id" = i64, Path, description = "Joke id")
    ),
    responses(
        (status = 200, description = "Joke found", body = Joke),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Joke not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Jokes"
)]
pub async fn get_joke(
    Extension(store): Extension<JokeStore>,
    base: Option<Extension<BasePath>>,
    JokeIdPath(id): JokeIdPath,
) -> Result<Json<Joke>, ErrorResponse> {
    shared::get_joke(Extension(store), base, id).await
}

/// Create a new joke
///
/// Accepts `application/json` or `application/x-www-form-urlencoded`.
#[utoipa::path(
    post,
    path = "/jokes",
    request_body = CreateJokeRequest,
    responses(
        (status = 201, description = "Joke created", body = Joke),
        (status = 400, description = "Missing or empty text, or malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "Jokes"
)]
pub async fn create_joke(
    Extension(store): Extension<JokeStore>,
    base: Option<Extension<BasePath>>,
    JsonOrForm(request): JsonOrForm<CreateJokeRequest>,
) -> Result<(StatusCode, Json<Joke>), ErrorResponse> {
    shared::create_joke(Extension(store), base, request).await
}
