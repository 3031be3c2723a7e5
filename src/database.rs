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

//! SQLite connection handling and schema synchronization.
//!
//! The [`Database`] handle is cheap to clone and is passed explicitly to the
//! mapper and the seed loader. There is no process-global connection.

use log::{info, LevelFilter};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;

use crate::config::{DatabaseSettings, Environment};

const CREATE_JOKES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS jokes (
    id INTEGER PRIMARY KEY AUTOINCREMENT CHECK (id >= 0),
    text TEXT NOT NULL CHECK (length(text) > 0),
    "createdAt" TEXT NOT NULL,
    "updatedAt" TEXT
)
"#;

const DROP_JOKES_TABLE: &str = "DROP TABLE IF EXISTS jokes";

/// Errors raised while opening or preparing the database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Unable to connect to the database at '{path}': {source}")]
    Connect {
        path: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to synchronize the database schema: {0}")]
    Sync(#[source] sqlx::Error),
}

/// Shared handle to the SQLite connection pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool for the configured database and verify it answers.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DatabaseError> {
        let connect_error = |source| DatabaseError::Connect {
            path: settings.path.clone(),
            source,
        };

        let options = if settings.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(connect_error)?
        } else {
            SqliteConnectOptions::new()
                .filename(&settings.path)
                .create_if_missing(true)
        };
        let options = if settings.log_statements {
            options.log_statements(LevelFilter::Debug)
        } else {
            options.disable_statement_logging()
        };

        // Each in-memory connection is its own database, so pin the pool to a
        // single connection that never expires.
        let pool_options = if settings.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(settings.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(connect_error)?;
        let database = Self { pool };
        database.ping().await.map_err(connect_error)?;

        info!("Database connection established ({})", settings.path);
        Ok(database)
    }

    /// Isolated in-memory database, mostly useful for tests.
    pub async fn in_memory() -> Result<Self, DatabaseError> {
        Self::connect(&DatabaseSettings::in_memory()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Bring the schema in line with the entity definitions.
    ///
    /// Non-production environments drop the `jokes` table first, discarding
    /// any rows from a previous run.
    pub async fn sync(&self, environment: Environment) -> Result<(), DatabaseError> {
        let recreate = environment.recreates_schema();
        if recreate {
            sqlx::query(DROP_JOKES_TABLE)
                .execute(&self.pool)
                .await
                .map_err(DatabaseError::Sync)?;
        }
        sqlx::query(CREATE_JOKES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Sync)?;

        if recreate {
            info!("Database synchronized ({environment}: tables recreated)");
        } else {
            info!("Database synchronized ({environment}: existing data kept)");
        }
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
