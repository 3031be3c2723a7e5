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

//! Shared handler implementations used across API versions.
//!
//! These functions hold the request logic. Version modules wrap them with
//! route-specific OpenAPI annotations. Storage failures never escape: they
//! are converted to [`ErrorResponse`] values by `?`.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{debug, warn};

use super::error::ErrorResponse;
use super::responses::{ApiVersionsResponse, CreateJokeRequest, HealthResponse};
use crate::api::version::{ApiVersion, BasePath, API_CURRENT_VERSION};
use crate::models::{Joke, JokeId, JokeStore, NewJoke};

/// List available API versions
pub async fn list_api_versions() -> Json<ApiVersionsResponse> {
    Json(ApiVersionsResponse {
        versions: ApiVersion::all_strings(),
        current: API_CURRENT_VERSION.to_string(),
    })
}

/// Check server and database health
pub async fn health_check(Extension(store): Extension<JokeStore>) -> impl IntoResponse {
    let (status, body) = match store.database().ping().await {
        Ok(()) => (
            StatusCode::OK,
            HealthResponse {
                status: "ok".to_string(),
                database: "ok".to_string(),
                timestamp: chrono::Utc::now(),
            },
        ),
        Err(e) => {
            warn!("Health check could not reach the database: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthResponse {
                    status: "degraded".to_string(),
                    database: "unavailable".to_string(),
                    timestamp: chrono::Utc::now(),
                },
            )
        }
    };
    (status, Json(body))
}

/// Every stored joke, possibly none.
pub async fn list_jokes(
    Extension(store): Extension<JokeStore>,
    base: Option<Extension<BasePath>>,
) -> Result<Json<Vec<Joke>>, ErrorResponse> {
    trace_base("list", base.as_ref());
    let jokes = store.find_all().await?;
    Ok(Json(jokes))
}

/// One joke by primary key, 404 when absent.
pub async fn get_joke(
    Extension(store): Extension<JokeStore>,
    base: Option<Extension<BasePath>>,
    id: JokeId,
) -> Result<Json<Joke>, ErrorResponse> {
    trace_base("get", base.as_ref());
    match store.find_by_pk(id).await? {
        Some(joke) => Ok(Json(joke)),
        None => Err(ErrorResponse::joke_not_found()),
    }
}

/// One joke picked at random by the database, 404 when the table is empty.
pub async fn get_random_joke(
    Extension(store): Extension<JokeStore>,
    base: Option<Extension<BasePath>>,
) -> Result<Json<Joke>, ErrorResponse> {
    trace_base("random", base.as_ref());
    match store.find_one_random().await? {
        Some(joke) => Ok(Json(joke)),
        None => Err(ErrorResponse::no_jokes_available()),
    }
}

/// Validate the request and store a new joke, answering 201 with the record.
pub async fn create_joke(
    Extension(store): Extension<JokeStore>,
    base: Option<Extension<BasePath>>,
    request: CreateJokeRequest,
) -> Result<(StatusCode, Json<Joke>), ErrorResponse> {
    trace_base("create", base.as_ref());
    let new_joke = validate_create_request(request)?;
    let joke = store.create(new_joke).await?;
    Ok((StatusCode::CREATED, Json(joke)))
}

/// Reject a missing or blank `text` before any storage access.
pub fn validate_create_request(request: CreateJokeRequest) -> Result<NewJoke, ErrorResponse> {
    match request.text {
        Some(text) if !text.trim().is_empty() => Ok(NewJoke::new(text)),
        _ => Err(ErrorResponse::invalid_request(
            super::error::messages::TEXT_REQUIRED,
        )),
    }
}

fn trace_base(operation: &str, base: Option<&Extension<BasePath>>) {
    if let Some(Extension(base)) = base {
        debug!("{operation} jokes under {}", base.as_str());
    }
}
