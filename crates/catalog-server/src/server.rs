//! Listener lifecycle: bind, serve, shut down on signal.

use catalog_core::CatalogConfig;
use catalog_store::CatalogStore;

use crate::error::{Result, ServerError};
use crate::routes::router;
use crate::schema::build_schema;

/// Build the store and schema from config, then serve until Ctrl+C/SIGTERM.
pub async fn serve(config: CatalogConfig) -> Result<()> {
    let store = if config.seed.enabled {
        CatalogStore::seeded()
    } else {
        CatalogStore::new()
    };
    let (items, brands) = store.counts().await;

    let schema = build_schema(store, &config.graphql);
    let app = router(schema, config.graphql.graphiql);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        addr = %listener.local_addr()?,
        items,
        brands,
        graphiql = config.graphql.graphiql,
        "Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
