use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use geargenie_booking::config::AppConfig;
use geargenie_booking::db::Store;
use geargenie_booking::routes;
use geargenie_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    // A missing or broken store is logged inside `connect`; requests are still served.
    let db = Store::connect(config.database_url.as_deref());

    let state = Arc::new(AppState { db });

    let app = routes::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
