pub mod handlers;
pub mod models;
pub mod service;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};
use bookshelf_store::JsonFileStore;

use service::BookService;

/// Books resource backed by the books collection file
pub struct BooksModule;

impl BooksModule {
    pub const fn new() -> Self {
        Self
    }

    fn service(ctx: &InitCtx<'_>) -> BookService {
        BookService::new(JsonFileStore::new(ctx.settings.storage.books_path()))
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let service = Self::service(ctx);
        service
            .store()
            .ensure_exists()
            .await
            .with_context(|| "failed to prepare books collection")?;

        tracing::info!(
            module = self.name(),
            path = %service.store().path().display(),
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: &InitCtx<'_>) -> Option<Router> {
        Some(crate::routes::books::router(Arc::new(Self::service(ctx))))
    }
}

/// Create a new instance of the books module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BooksModule::new())
}
