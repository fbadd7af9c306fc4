use crate::modules::users::adapters::outbound::users_in_memory::InMemoryUsers;
use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::use_cases::create_user::handler::CreateUserHandler;
use crate::shell::config::{AppConfig, StorageBackend};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub create_user: Arc<CreateUserHandler>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            create_user: Arc::new(CreateUserHandler::new(users.clone())),
            users,
        }
    }

    /// Builds the repository selected by `config`. A document store that
    /// cannot be reached is an error, never a fallback to memory.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let users: Arc<dyn UserRepository> = match config.backend {
            StorageBackend::InMemory => {
                tracing::info!("using in-memory user store");
                Arc::new(InMemoryUsers::new())
            }
            StorageBackend::MongoDb => mongodb_users(config).await?,
        };
        Ok(Self::new(users))
    }
}

#[cfg(feature = "mongodb")]
async fn mongodb_users(config: &AppConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
    use crate::modules::users::adapters::outbound::users_mongodb::MongoUsers;

    let settings = &config.mongo;
    let users = MongoUsers::connect(
        &settings.uri,
        &settings.database,
        &settings.collection,
        settings.timeout,
    )
    .await?;
    Ok(Arc::new(users))
}

#[cfg(not(feature = "mongodb"))]
async fn mongodb_users(_config: &AppConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
    anyhow::bail!("USERS_BACKEND=mongodb requires building with the `mongodb` feature")
}
