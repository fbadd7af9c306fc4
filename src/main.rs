use tracing_subscriber::{EnvFilter, fmt};

use user_management_service::shell::config::AppConfig;
use user_management_service::shell::http::router;
use user_management_service::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config).await?;
    let app = router(state);

    tracing::info!("Users endpoint: http://{}/users", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
