use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;

use chatbot_sim::config::Config;
use chatbot_sim::routes;
use chatbot_sim::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chatbot_sim=debug".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "starting chat service");

    let state = Arc::new(AppState::new(config.thinking));
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("🚀 chat assistant running at http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
