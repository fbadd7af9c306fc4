use crate::modules::users::core::ports::{UserRepository, UserRepositoryError};
use crate::modules::users::core::user::User;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

pub struct CreateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Stores `user` under its own id, overwriting any previous record, and
    /// returns what was stored.
    pub async fn handle(&self, user: User) -> Result<User, ApplicationError> {
        self.repository.put(&user.id, user.clone()).await?;
        tracing::info!(user_id = %user.id, "user stored");
        Ok(user)
    }
}
