use std::sync::Arc;

use anyhow::{Context, Result};
use facevault_core::{DEFAULT_MAX_UPLOAD_BYTES, env_parse_with_default};
use facevault_http::{AppState, create_router};
use facevault_storage::StorageBackend;

use crate::{build_service, connect_postgres};

pub(crate) async fn run(port: u16, host: String, memory: bool) -> Result<()> {
    let storage = if memory {
        tracing::warn!("in-memory storage: enrollments are lost on exit");
        StorageBackend::new_memory()
    } else {
        connect_postgres().await?
    };
    let service = Arc::new(build_service(storage)?);
    let config = service.config();
    tracing::info!(
        threshold = config.threshold,
        max_results = config.max_results,
        backend = service.storage().kind(),
        "recognition service ready"
    );

    let max_upload_bytes = env_parse_with_default("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES);
    let state = Arc::new(AppState::new(service).with_max_upload_bytes(max_upload_bytes));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Starting HTTP server on {}", addr);
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutting down");
}
