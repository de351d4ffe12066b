use std::{net::SocketAddr, sync::Arc};
use task_dashboard::{router, AppState, Config, FileStore};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    fs::create_dir_all(&config.data_dir).await?;

    let store = FileStore::new(config.data_dir.clone());
    info!(
        "storing tasks under {} (weekly basis: {:?})",
        store.dir().display(),
        config.weekly_basis
    );
    let state = AppState::new(Arc::new(store), config.weekly_basis);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
