// In memory user repository.
//
// Purpose
// - Default record store of the service, and the backend used by handler tests.
//
// Responsibilities
// - Store user records in a map keyed by user id.
// - Writers take the write lock, readers the read lock. Records are cloned in
//   and out so no lock is held past the map access.

use crate::modules::users::core::ports::{UserRepository, UserRepositoryError};
use crate::modules::users::core::user::User;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUsers {
    rows: RwLock<HashMap<String, User>>,
    is_offline: bool,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUsers {
    async fn put(&self, id: &str, user: User) -> Result<(), UserRepositoryError> {
        if self.is_offline {
            return Err(UserRepositoryError::Backend(
                "User repository offline".into(),
            ));
        }

        self.rows.write().await.insert(id.to_string(), user);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, UserRepositoryError> {
        if self.is_offline {
            return Err(UserRepositoryError::Backend(
                "User repository offline".into(),
            ));
        }

        Ok(self.rows.read().await.get(id).cloned())
    }
}
