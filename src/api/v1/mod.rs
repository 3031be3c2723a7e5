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

//! API Version 1 (v1) implementation.
//!
//! All v1 endpoints are accessible under the `/api/v1/` prefix.
//!
//! ## Endpoint Structure
//!
//! - `GET /api/v1/jokes` - List all jokes
//! - `GET /api/v1/jokes/random` - Get a random joke
//! - `GET /api/v1/jokes/{id}` - Get a joke by id
//! - `POST /api/v1/jokes` - Create a joke

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::*;
pub use openapi::ApiDocV1;
pub use routes::build_v1_router;
