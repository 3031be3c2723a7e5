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

//! Request extractors with API-shaped rejections.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::error::ErrorResponse;
use crate::models::JokeId;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body accepted as JSON or as a url-encoded form.
///
/// Rejections are [`ErrorResponse`]s with a 400 status.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ErrorResponse;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ErrorResponse::invalid_request(rejection.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ErrorResponse::invalid_request(rejection.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// `:id` path segment parsed as a joke primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JokeIdPath(pub JokeId);

#[async_trait]
impl<S> FromRequestParts<S> for JokeIdPath
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ErrorResponse::invalid_request(rejection.body_text()))?;

        raw.parse::<JokeId>()
            .map(Self)
            .map_err(|_| ErrorResponse::invalid_request(format!("Invalid joke id '{raw}'")))
    }
}
