mod config;
mod error;
mod routes;
mod state;

use catalog::CATALOG;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "gallery server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    CATALOG.validate()?;

    let state = state::AppState::new(&config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(
        port = config.port,
        base = %config.base_path,
        site_dir = %config.site_dir.display(),
        groups = CATALOG.groups().len(),
        items = CATALOG.item_count(),
        "gallery listening"
    );
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
