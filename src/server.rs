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

use anyhow::{Context, Result};
use axum::{extract::Extension, response::Redirect, routing::get, Router};
use log::{error, info};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{self, ApiVersion};
use crate::config::JokesServerConfig;
use crate::database::Database;
use crate::models::JokeStore;
use crate::seed::{seed_jokes, SeedOutcome};

/// Path the Swagger UI is served under.
pub const DOCS_PATH: &str = "/docs";

pub struct JokesServer {
    config: JokesServerConfig,
    store: JokeStore,
}

impl JokesServer {
    /// Connect to the configured database. Fails if it cannot be reached.
    pub async fn new(config: JokesServerConfig) -> Result<Self> {
        let db = Database::connect(&config.database).await?;
        Ok(Self::from_store(config, JokeStore::new(db)))
    }

    /// Wrap an already connected store.
    pub fn from_store(config: JokesServerConfig, store: JokeStore) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &JokeStore {
        &self.store
    }

    /// Synchronize the schema and load the default jokes.
    pub async fn prepare(&self) -> Result<SeedOutcome> {
        let environment = self.config.environment();
        info!("Preparing database for the {environment} environment");
        let outcome = seed_jokes(&self.store, environment)
            .await
            .context("Failed to seed default jokes")?;
        Ok(outcome)
    }

    /// Seed, bind the listener and serve until Ctrl-C or SIGTERM.
    ///
    /// Nothing is bound if seeding fails.
    pub async fn run(self) -> Result<()> {
        info!("Starting jokes server");
        self.prepare().await?;

        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        let port = self.config.server.port;
        info!("Server started on port {port}");
        info!("API v1 available at http://localhost:{port}/api/v1/jokes");
        info!("API documentation: http://localhost:{port}/");

        let result = self.serve(listener, shutdown_signal()).await;
        if let Err(e) = &result {
            error!("Web API server error: {e}");
        }
        self.store.database().close().await;
        info!("Jokes server stopped");
        result
    }

    /// Serve the application on `listener` until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = build_app(self.store.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

/// Assemble the whole HTTP application around `store`.
pub fn build_app(store: JokeStore) -> Router {
    let openapi_v1 = api::ApiDocV1::openapi();
    let v1_router = api::build_v1_router();

    Router::new()
        // Health check at root level (operational endpoint, not versioned)
        .route("/health", get(api::shared::handlers::health_check))
        .route(
            "/api/versions",
            get(api::shared::handlers::list_api_versions),
        )
        .nest(ApiVersion::V1.path_prefix(), v1_router)
        .merge(SwaggerUi::new(DOCS_PATH).url(ApiVersion::V1.openapi_path(), openapi_v1))
        .route("/", get(|| async { Redirect::temporary("/docs/") }))
        .layer(Extension(store))
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
