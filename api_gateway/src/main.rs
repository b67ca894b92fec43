use anyhow::{Context, Result};
use shared::Settings;
use shared::telemetry::init_tracing;
use tracing::info;

mod error;
mod page;
mod routes;


#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::from_env().context("Invalid configuration")?;
    let app = routes::router(routes::AppState::new(settings.public_origin.clone()));

    let listener = tokio::net::TcpListener::bind(settings.bind)
        .await
        .with_context(|| format!("Failed to bind HTTP server to {}", settings.bind))?;
    info!("🚀 HTTP server listening on {}", settings.bind);

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;
    Ok(())
}
