//! Drinks catalog server: reads settings from the environment, connects the store and serves the API.

use drinks_catalog::{app_router, store, AppState, DrinkCatalog, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("drinks_catalog=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let store = store::connect(&settings).await?;
    let state = AppState::new(DrinkCatalog::new(store));
    let app = app_router(state, settings.body_limit);

    let listener = TcpListener::bind(settings.listen_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
