// MongoDB user repository.
//
// Purpose
// - Persist user records in a document store collection instead of in process memory.
//
// Responsibilities
// - One document per user: a store generated `_id`, the caller supplied `id`, and `name`.
// - Writes replace the document matching `id` (upsert), reads filter on `id`.
// - Bound every call with the configured timeout.

use crate::modules::users::core::ports::{UserRepository, UserRepositoryError};
use crate::modules::users::core::user::User;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};
use std::future::IntoFuture;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub id: String,
    pub name: String,
}

impl From<User> for UserDocument {
    fn from(user: User) -> Self {
        Self {
            object_id: None,
            id: user.id,
            name: user.name,
        }
    }
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            id: document.id,
            name: document.name,
        }
    }
}

pub struct MongoUsers {
    collection: Collection<UserDocument>,
    timeout: Duration,
}

impl MongoUsers {
    /// Connects, pings the server and ensures the unique index on `id`.
    /// Any failure here is meant to abort startup.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self, UserRepositoryError> {
        let mut options = bounded(timeout, ClientOptions::parse(uri)).await?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        let client = Client::with_options(options).map_err(backend)?;

        let database = client.database(database);
        bounded(timeout, database.run_command(doc! { "ping": 1 })).await?;

        let users = Self {
            collection: database.collection::<UserDocument>(collection),
            timeout,
        };
        users.ensure_indexes().await?;
        tracing::info!(
            database = database.name(),
            collection = users.collection.name(),
            "connected to document store"
        );
        Ok(users)
    }

    async fn ensure_indexes(&self) -> Result<(), UserRepositoryError> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        bounded(self.timeout, self.collection.create_index(index)).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserRepository for MongoUsers {
    async fn put(&self, id: &str, user: User) -> Result<(), UserRepositoryError> {
        let document = UserDocument::from(user);
        let result = bounded(
            self.timeout,
            self.collection
                .replace_one(doc! { "id": id }, &document)
                .upsert(true),
        )
        .await?;
        tracing::debug!(
            user_id = id,
            matched = result.matched_count,
            upserted = result.upserted_id.is_some(),
            "user document written"
        );
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, UserRepositoryError> {
        let document = bounded(self.timeout, self.collection.find_one(doc! { "id": id })).await?;
        Ok(document.map(User::from))
    }
}

async fn bounded<F, T>(limit: Duration, operation: F) -> Result<T, UserRepositoryError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result.map_err(backend),
        Err(_) => Err(UserRepositoryError::Timeout(limit)),
    }
}

fn backend(error: mongodb::error::Error) -> UserRepositoryError {
    UserRepositoryError::Backend(error.to_string())
}
