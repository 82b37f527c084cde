use crate::application::service::ReceiptService;
use crate::config::ServerConfig;
use crate::domain::ports::ReceiptStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryReceiptStore;
use crate::interfaces::http;
use std::sync::Arc;

/// Binds the configured address and serves requests until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<()> {
    let store: ReceiptStoreBox = Box::new(InMemoryReceiptStore::new());
    let service = Arc::new(ReceiptService::new(store));
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler, keep serving until the process is killed.
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
