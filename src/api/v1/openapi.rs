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

//! OpenAPI documentation for API v1.
//!
//! The document is generated from the handler annotations. It is served at
//! `/v1/swagger.json` and the Swagger UI at `/docs/` (with `/` redirecting there).

use utoipa::OpenApi;

use crate::api::shared::{CreateJokeRequest, ErrorResponse};
use crate::models::Joke;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_jokes,
        super::handlers::get_random_joke,
        super::handlers::get_joke,
        super::handlers::create_joke,
    ),
    components(
        schemas(
            Joke,
            CreateJokeRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Jokes", description = "Joke retrieval and creation"),
    ),
    servers(
        (url = "/api/v1", description = "API v1"),
    ),
    info(
        title = "Jokes API",
        version = "1.0.0",
        description = "REST API serving short text jokes.\n\n## API Versioning\n\nThis API uses URL-based versioning. All joke endpoints are prefixed with `/api/v1/`.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    )
)]
pub struct ApiDocV1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_joke_paths() {
        let json = serde_json::to_value(ApiDocV1::openapi()).unwrap();
        assert!(json["paths"]["/jokes"]["get"].is_object());
        assert!(json["paths"]["/jokes"]["post"].is_object());
        assert!(json["paths"]["/jokes/random"]["get"].is_object());
        assert!(json["paths"]["/jokes/{id}"]["get"].is_object());
        assert_eq!(json["servers"][0]["url"], "/api/v1");
    }
}
