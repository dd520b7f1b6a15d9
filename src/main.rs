//! Dogs house server: loads config, resets and seeds the Dog table, serves HTTP.

use dogshouse::{app, bootstrap, from_env, AppState};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dogshouse=info,tower_http=info")),
        )
        .init();

    let config = from_env()?;
    // Lazy so an unreachable store never blocks startup.
    let pool = PgPoolOptions::new()
        .max_connections(config.server.max_connections)
        .connect_lazy_with(config.db.connect_options()?);
    let state = AppState::new(pool);

    if let Err(e) = bootstrap(&state.store).await {
        tracing::error!(error = %e, "database bootstrap failed; serving anyway");
    }

    let listener = TcpListener::bind(config.server.listen).await?;
    tracing::info!("Server running on {}", listener.local_addr()?);
    axum::serve(listener, app(state, config.server.body_limit))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
