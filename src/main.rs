// RoomViz backend - design persistence and retrieval service
// Entry point and server setup

use roomviz::app::AppState;
use roomviz::config::Config;
use roomviz::http;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomviz=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RoomViz backend");

    let config = Config::from_env()?;
    let state = AppState::new(&config);
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
