use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, from_document, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};
use tracing::{info, warn};

use crate::error::StoreError;
use crate::models::player::Player;

const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    UsernameTaken,
}

/// Persistence seam for player documents.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Player>, StoreError>;

    /// Inserts `player` unless a document with the same username exists. The
    /// existence check and the write are a single atomic operation.
    async fn insert_if_absent(&self, player: Player) -> Result<InsertOutcome, StoreError>;

    /// Overwrites `clicks` and returns the document as it is after the update.
    async fn set_clicks(&self, username: &str, clicks: i64)
        -> Result<Option<Player>, StoreError>;

    /// Players ordered by clicks, highest first.
    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<Player>, StoreError>;
}

#[derive(Clone, Debug)]
pub struct MongoPlayerStore {
    collection: Collection<Player>,
}

impl MongoPlayerStore {
    pub fn new(client: &Client, db_name: &str, collection_name: &str) -> Self {
        MongoPlayerStore {
            collection: client.database(db_name).collection(collection_name),
        }
    }

    /// Creates the unique index on `username`. Failure is logged, not fatal:
    /// a collection that already holds duplicates cannot take the index, and
    /// registration still goes through the upsert path.
    pub async fn ensure_indexes(&self) {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match self.collection.create_index(index).await {
            Ok(result) => info!(index = %result.index_name, "username index ready"),
            Err(err) => warn!(error = %err, "could not create unique username index"),
        }
    }
}

#[async_trait]
impl PlayerStore for MongoPlayerStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Player>, StoreError> {
        let filter = doc! { "username": username };
        Ok(self.collection.find_one(filter).await?)
    }

    async fn insert_if_absent(&self, player: Player) -> Result<InsertOutcome, StoreError> {
        let filter = doc! { "username": &player.username };
        let update = doc! {
            "$setOnInsert": {
                "username": &player.username,
                "password": &player.password,
                "clicks": player.clicks,
            }
        };

        match self.collection.update_one(filter, update).upsert(true).await {
            Ok(result) if result.upserted_id.is_some() => Ok(InsertOutcome::Inserted),
            Ok(_) => Ok(InsertOutcome::UsernameTaken),
            Err(err) if is_duplicate_key(&err) => Ok(InsertOutcome::UsernameTaken),
            Err(err) => Err(err.into()),
        }
    }

    async fn set_clicks(
        &self,
        username: &str,
        clicks: i64,
    ) -> Result<Option<Player>, StoreError> {
        let filter = doc! { "username": username };
        let update = doc! { "$set": { "clicks": clicks } };

        Ok(self
            .collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<Player>, StoreError> {
        let mut cursor = self
            .collection
            .aggregate(create_leaderboard_pipeline(limit))
            .await?;
        let mut players = Vec::new();

        while let Some(document) = cursor.try_next().await? {
            players.push(from_document::<Player>(document)?);
        }

        Ok(players)
    }
}

/// Sorts on clicks coerced to a long, so legacy string or double values rank
/// by their number instead of by BSON type order. Unconvertible values rank as 0.
pub fn create_leaderboard_pipeline(limit: i64) -> Vec<Document> {
    vec![
        doc! { "$addFields": {
            "sort_clicks": {
                "$convert": { "input": "$clicks", "to": "long", "onError": 0_i64, "onNull": 0_i64 }
            }
        }},
        doc! { "$sort": { "sort_clicks": -1 } },
        doc! { "$limit": limit },
        doc! { "$project": { "sort_clicks": 0 } },
    ]
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}
