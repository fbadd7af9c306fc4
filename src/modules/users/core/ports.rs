// Ports define what the users module needs from a storage backend.
//
// Responsibilities
// - Describe the record store as a trait so handlers never see a concrete backend.
//
// Boundaries
// - Adapters implement this trait: an in memory map and, behind the `mongodb`
//   feature, a document store collection.

use crate::modules::users::core::user::User;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Associates `user` with `id`, replacing whatever was stored there.
    async fn put(&self, id: &str, user: User) -> Result<(), UserRepositoryError>;

    /// Returns the record stored under `id`. Absence is `Ok(None)`, not an error.
    async fn get(&self, id: &str) -> Result<Option<User>, UserRepositoryError>;
}
