//! HTTP server facade for bookshelf with Axum and uniform error responses.

use anyhow::Context;
use axum::{routing::get, Router};

use bookshelf_kernel::{settings::Settings, RouteTable};

pub mod error;
pub mod extract;
pub mod response;
pub mod router;

pub use error::{handle_http, AppError, ErrorCause};
pub use extract::{JsonBody, PathParam};
use router::RouterBuilder;

/// Start the HTTP server and serve until `shutdown` resolves
pub async fn start_server<F>(router: Router, settings: &Settings, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let address = format!("{}:{}", settings.server.host, settings.server.port);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind to {}", address))?;

    tracing::info!("Servidor iniciado en http://{}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Build the main HTTP router with every mounted module
pub fn build_router(table: RouteTable) -> Router {
    RouterBuilder::new()
        .mount_table(table)
        .route("/ping", get(ping))
        .with_tracing()
        .with_cors()
        .with_request_id()
        .with_trailing_slash_trimmed()
        .build()
}

/// Liveness endpoint
async fn ping() -> &'static str {
    "pong"
}
