//! Bookshelf application library
//!
//! Books and users resources served over HTTP and persisted in JSON files.

use anyhow::Context;
use axum::Router;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

pub mod modules;
pub mod routes;

/// Initialize every module of `registry` and compose the root router.
pub async fn build_app(registry: &ModuleRegistry, settings: &Settings) -> anyhow::Result<Router> {
    let ctx = InitCtx { settings };

    registry
        .init_modules(&ctx)
        .await
        .context("failed to initialize modules")?;

    let table = registry.route_table(&ctx);
    Ok(bookshelf_http::build_router(table))
}

/// Discover the route modules and serve them until Ctrl-C.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(
        env = ?settings.environment,
        port = settings.server.port,
        data_dir = %settings.storage.data_dir.display(),
        "bookshelf bootstrap starting"
    );

    let registry = routes::discover();
    let router = build_app(&registry, &settings).await?;

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.start_modules(&ctx).await?;

    bookshelf_http::start_server(router, &settings, shutdown_signal()).await?;

    registry.stop_modules().await?;
    tracing::info!("bookshelf stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
