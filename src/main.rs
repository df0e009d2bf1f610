use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = ledgerd::Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        listen = %cfg.listen,
        loglevel = %cfg.loglevel,
    );

    let storage = ledgerd::db::connect(&cfg.database_url).await?;

    let token: Arc<str> = Arc::from(cfg.token.as_str());
    let state = ledgerd::router::AppState::new(storage, token);
    let app = ledgerd::router::ledger_router(state);

    let listener = TcpListener::bind(&cfg.listen).await?;
    info!("HTTP server listening on {}", cfg.listen);
    axum::serve(listener, app).await?;
    Ok(())
}
