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

//! OpenAPI Integration Tests
//!
//! Verifies that the generated document describes the joke endpoints and
//! that the documentation routes are served.

#![allow(clippy::unwrap_used)]

mod test_support;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use jokes_server::api::v1::openapi::ApiDocV1;
use test_support::{get, test_app};
use tower::ServiceExt;
use utoipa::OpenApi;

fn document() -> serde_json::Value {
    serde_json::to_value(ApiDocV1::openapi()).unwrap()
}

#[test]
fn test_openapi_version_and_info() {
    let json = document();
    assert!(json["openapi"].as_str().unwrap().starts_with("3.0"));
    assert_eq!(json["info"]["title"], "Jokes API");
    assert_eq!(json["info"]["version"], "1.0.0");
    assert_eq!(json["servers"][0]["url"], "/api/v1");
}

#[test]
fn test_openapi_documents_all_joke_operations() {
    let json = document();
    let paths = &json["paths"];

    assert!(paths["/jokes"]["get"].is_object());
    assert!(paths["/jokes"]["post"].is_object());
    assert!(paths["/jokes/random"]["get"].is_object());
    assert!(paths["/jokes/{id}"]["get"].is_object());

    assert!(paths["/jokes/{id}"]["put"].is_null());
    assert!(paths["/jokes/{id}"]["delete"].is_null());
}

#[test]
fn test_openapi_status_codes() {
    let json = document();
    let paths = &json["paths"];

    assert!(paths["/jokes"]["post"]["responses"]["201"].is_object());
    assert!(paths["/jokes"]["post"]["responses"]["400"].is_object());
    assert!(paths["/jokes/random"]["get"]["responses"]["404"].is_object());
    assert!(paths["/jokes/{id}"]["get"]["responses"]["404"].is_object());
}

#[test]
fn test_joke_schema_matches_stored_entity() {
    let json = document();
    let joke = &json["components"]["schemas"]["Joke"];
    let properties = joke["properties"].as_object().unwrap();

    for field in ["id", "text", "createdAt", "updatedAt"] {
        assert!(properties.contains_key(field), "missing {field}");
    }
    // Only the stored columns are documented.
    assert!(!properties.contains_key("category"));
    assert!(!properties.contains_key("author"));
}

#[test]
fn test_create_request_schema() {
    let json = document();
    let request = &json["paths"]["/jokes"]["post"]["requestBody"]["content"]["application/json"]
        ["schema"];
    let schema_ref = request["$ref"].as_str().unwrap();
    assert!(schema_ref.ends_with("CreateJokeRequest"));

    let schema = &json["components"]["schemas"]["CreateJokeRequest"];
    assert!(schema["properties"]["text"].is_object());
}

#[tokio::test]
async fn test_swagger_json_is_served() {
    let (app, _store) = test_app().await;

    let (status, body) = get(&app, "/v1/swagger.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, document());
}

#[tokio::test]
async fn test_root_redirects_to_docs() {
    let (app, _store) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/docs/");
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let (app, _store) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/docs/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
