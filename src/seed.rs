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

//! Default data loaded on first start.

use log::info;

use crate::config::Environment;
use crate::database::DatabaseError;
use crate::models::{JokeStore, JokeStoreError, NewJoke};

/// The jokes inserted into an empty table.
pub const DEFAULT_JOKES: [&str; 14] = [
    "Pourquoi les plongeurs plongent-ils toujours en arrière ?<br/>Parce que sinon, ils tombent dans le bateau !",
    "Quel est le comble pour un électricien ?<br/>Ne pas être au courant !",
    "Pourquoi les fantômes sont-ils de si mauvais menteurs ?<br/>Parce qu'on peut lire à travers eux !",
    "Pourquoi les oiseaux ne prennent-ils pas de douches ?<br/>Parce qu'ils préfèrent les bains de soleil !",
    "Quelle est la femelle du hamster ?<br/>L’Amsterdam !",
    "Que dit un oignon quand il se cogne ?<br/>Aïe !",
    "Quel est l'animal le plus heureux ?<br/>Le hibou, parce que sa femme est chouette !",
    "Pourquoi le football c'est rigolo ?<br/>Parce que Thierry en rit !",
    "Quel est le sport le plus fruité ?<br/>La boxe, parce que tu te prends des pêches dans la poire et tu tombes dans les pommes !",
    "Que se fait un Schtroumpf quand il tombe ?<br/>Un Bleu !",
    "Quel est le comble pour un marin ?<br/>Avoir le nez qui coule !",
    "Qu'est ce que les enfants usent le plus à l'école ?<br/>Le professeur !",
    "Quel est le sport le plus silencieux ?<br/>Le para-chuuuut !",
    "Quel est le comble pour un joueur de bowling ?<br/>C’est de perdre la boule !",
];

/// Errors raised while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Failed to seed default jokes: {0}")]
    Store(#[from] JokeStoreError),
}

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted(usize),
    AlreadyPopulated(i64),
}

/// Populate an empty `jokes` table with [`DEFAULT_JOKES`].
///
/// The table is only filled when it holds no rows at all; a partially
/// emptied table is left alone.
pub async fn seed_default_jokes(store: &JokeStore) -> Result<SeedOutcome, JokeStoreError> {
    let count = store.count().await?;
    if count != 0 {
        info!("Database already contains {count} jokes, skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated(count));
    }

    let jokes = DEFAULT_JOKES.iter().map(|text| NewJoke::new(*text)).collect();
    let created = store.bulk_create(jokes).await?;
    info!("Inserted {} default jokes", created.len());
    Ok(SeedOutcome::Inserted(created.len()))
}

/// Synchronize the schema for `environment`, then seed.
pub async fn seed_jokes(
    store: &JokeStore,
    environment: Environment,
) -> Result<SeedOutcome, SeedError> {
    store.database().sync(environment).await?;
    Ok(seed_default_jokes(store).await?)
}
