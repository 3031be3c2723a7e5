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

//! The `Joke` entity and its mapper over the `jokes` table.
//!
//! [`JokeStore`] is the only code that issues SQL against `jokes`. It
//! validates every write before it reaches SQLite and deliberately offers no
//! update or delete operations.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::database::Database;

/// Primary key type of the `jokes` table.
pub type JokeId = i64;

const SELECT_COLUMNS: &str = r#"SELECT id, text, "createdAt", "updatedAt" FROM jokes"#;

/// A stored joke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Joke {
    /// Unique joke identifier, assigned by the server
    #[schema(example = 1)]
    pub id: JokeId,
    /// Joke content
    #[schema(
        example = "Pourquoi les plongeurs plongent-ils toujours en arrière ?<br/>Parce que sinon, ils tombent dans le bateau !"
    )]
    pub text: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

/// Attributes accepted when creating a joke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJoke {
    pub text: String,
}

impl NewJoke {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Enforce the field constraints of the entity.
    ///
    /// Text made only of whitespace counts as empty.
    pub fn validate(&self) -> Result<(), JokeStoreError> {
        if self.text.trim().is_empty() {
            return Err(JokeStoreError::Validation(
                "Joke text must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Errors surfaced by [`JokeStore`].
#[derive(Debug, thiserror::Error)]
pub enum JokeStoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Entity mapper for `Joke` records.
#[derive(Clone, Debug)]
pub struct JokeStore {
    db: Database,
}

impl JokeStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// All jokes in insertion order.
    pub async fn find_all(&self) -> Result<Vec<Joke>, JokeStoreError> {
        let jokes = sqlx::query_as::<_, Joke>(&format!("{SELECT_COLUMNS} ORDER BY id ASC"))
            .fetch_all(self.db.pool())
            .await?;
        Ok(jokes)
    }

    pub async fn find_by_pk(&self, id: JokeId) -> Result<Option<Joke>, JokeStoreError> {
        let joke = sqlx::query_as::<_, Joke>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(joke)
    }

    /// One joke picked by SQLite's `RANDOM()` ordering, so the pick always
    /// reflects the table at query time.
    pub async fn find_one_random(&self) -> Result<Option<Joke>, JokeStoreError> {
        let joke = sqlx::query_as::<_, Joke>(&format!("{SELECT_COLUMNS} ORDER BY RANDOM() LIMIT 1"))
            .fetch_optional(self.db.pool())
            .await?;
        Ok(joke)
    }

    pub async fn count(&self) -> Result<i64, JokeStoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jokes")
            .fetch_one(self.db.pool())
            .await?;
        Ok(count)
    }

    /// Validate and insert a single joke, returning the stored record.
    pub async fn create(&self, new_joke: NewJoke) -> Result<Joke, JokeStoreError> {
        new_joke.validate()?;

        let mut conn = self.db.pool().acquire().await?;
        let joke = insert(&mut conn, &new_joke, Utc::now()).await?;
        debug!("Created joke {}", joke.id);
        Ok(joke)
    }

    /// Validate every joke, then insert them all in one transaction.
    ///
    /// Nothing is written if any entry is invalid or any insert fails.
    pub async fn bulk_create(&self, new_jokes: Vec<NewJoke>) -> Result<Vec<Joke>, JokeStoreError> {
        for new_joke in &new_jokes {
            new_joke.validate()?;
        }

        let now = Utc::now();
        let mut tx = self.db.pool().begin().await?;
        let mut created = Vec::with_capacity(new_jokes.len());
        for new_joke in &new_jokes {
            created.push(insert(&mut tx, new_joke, now).await?);
        }
        tx.commit().await?;

        debug!("Bulk created {} jokes", created.len());
        Ok(created)
    }
}

async fn insert(
    conn: &mut sqlx::SqliteConnection,
    new_joke: &NewJoke,
    now: DateTime<Utc>,
) -> Result<Joke, sqlx::Error> {
    sqlx::query_as::<_, Joke>(
        r#"INSERT INTO jokes (text, "createdAt", "updatedAt") VALUES (?, ?, ?)
           RETURNING id, text, "createdAt", "updatedAt""#,
    )
    .bind(&new_joke.text)
    .bind(now)
    .bind(now)
    .fetch_one(conn)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use std::collections::HashSet;

    async fn store() -> JokeStore {
        let db = Database::in_memory().await.unwrap();
        db.sync(Environment::NonProduction).await.unwrap();
        JokeStore::new(db)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let store = store().await;
        let joke = store
            .create(NewJoke::new("Why did the chicken cross the road?"))
            .await
            .unwrap();

        assert_eq!(joke.id, 1);
        assert_eq!(joke.text, "Why did the chicken cross the road?");
        assert_eq!(joke.updated_at, Some(joke.created_at));
    }

    #[tokio::test]
    async fn test_create_then_find_by_pk() {
        let store = store().await;
        let created = store.create(NewJoke::new("Aïe !")).await.unwrap();

        let found = store.find_by_pk(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(store.find_by_pk(created.id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_text_without_writing() {
        let store = store().await;
        let result = store.create(NewJoke::new("")).await;

        assert!(matches!(result, Err(JokeStoreError::Validation(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_text_without_writing() {
        let store = store().await;
        store.create(NewJoke::new("kept")).await.unwrap();

        for text in ["   ", " \n\t\r "] {
            let result = store.create(NewJoke::new(text)).await;
            assert!(matches!(result, Err(JokeStoreError::Validation(_))));
        }
        assert_eq!(store.count().await.unwrap(), 1);

        let result = store
            .bulk_create(vec![NewJoke::new("fine"), NewJoke::new("\t")])
            .await;
        assert!(matches!(result, Err(JokeStoreError::Validation(_))));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let store = store().await;
        for text in ["one", "two", "three"] {
            store.create(NewJoke::new(text)).await.unwrap();
        }

        let texts: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.text)
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_find_one_random() {
        let store = store().await;
        assert!(store.find_one_random().await.unwrap().is_none());

        let ids: HashSet<JokeId> = store
            .bulk_create(vec![NewJoke::new("a"), NewJoke::new("b"), NewJoke::new("c")])
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();

        for _ in 0..20 {
            let joke = store.find_one_random().await.unwrap().unwrap();
            assert!(ids.contains(&joke.id));
        }
    }

    #[tokio::test]
    async fn test_bulk_create_is_all_or_nothing() {
        let store = store().await;
        let result = store
            .bulk_create(vec![NewJoke::new("fine"), NewJoke::new("")])
            .await;

        assert!(matches!(result, Err(JokeStoreError::Validation(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_joke_serializes_camel_case() {
        let store = store().await;
        let joke = store.create(NewJoke::new("json")).await.unwrap();
        let value = serde_json::to_value(&joke).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["text"], "json");
        assert!(value["createdAt"].is_string());
        assert!(value["updatedAt"].is_string());
        assert!(value.get("created_at").is_none());
    }
}
