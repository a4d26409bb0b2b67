//! Task List RS binary entry point

use std::sync::Arc;

use task_list_rs::{
    api,
    config::{Config, StorageBackend as BackendKind},
    storage::{backend::MemoryBackend, file::FileBackend, StorageBackend},
    TaskStore,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config sources are logged at the default level before the configured
    // subscriber exists
    let bootstrap = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    let config = tracing::subscriber::with_default(bootstrap, Config::load)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.max_level()?)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Task List RS");

    match config.storage_backend {
        BackendKind::File => {
            let backend = FileBackend::new(&config.data_file);
            info!("Using data file {}", backend.path().display());
            serve(&config, backend).await
        }
        BackendKind::Memory => {
            info!("Using in-memory storage");
            serve(&config, MemoryBackend::new()).await
        }
    }
}

async fn serve<B: StorageBackend + 'static>(
    config: &Config,
    backend: B,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(TaskStore::with_id_strategy(backend, config.id_strategy));
    let app = api::router(store);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Task List RS stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
