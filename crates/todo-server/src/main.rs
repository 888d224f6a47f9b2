use std::sync::Arc;

use tracing::info;

use todo_api::AppStateInner;
use todo_server::{app::build_app, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    todo_server::init_tracing();

    let config = Config::from_env()?;

    let db = todo_db::Database::open(&config.db_path)?;
    let state = AppStateInner::new(Arc::new(db));

    let app = build_app(state, &config);

    let addr = config.addr()?;
    info!("Todo server listening on {}", addr);
    info!("CORS origin: {:?}", config.cors_origin);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
