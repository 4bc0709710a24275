use anyhow::{Context, Result};
use todo_service::{
    config::Config, observability::init_tracing, repository::MemoryStore, routes::router,
    server::Server, state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config);

    let seeded = config.store.seed.len();
    let store = MemoryStore::with_items(config.store.seed.clone())
        .await
        .context("failed to seed todo store")?;
    tracing::info!(items = seeded, "Todo store ready");

    let app = router(AppState::new(config.clone(), store));

    Server::new(config)
        .serve(app)
        .await
        .context("server error")?;

    Ok(())
}
