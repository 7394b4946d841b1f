pub mod handlers;
pub mod models;
pub mod service;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};
use bookshelf_store::JsonFileStore;

use service::UserService;

/// Users resource backed by the users collection file
pub struct UsersModule;

impl UsersModule {
    pub const fn new() -> Self {
        Self
    }

    fn service(ctx: &InitCtx<'_>) -> UserService {
        UserService::new(JsonFileStore::new(ctx.settings.storage.users_path()))
    }
}

#[async_trait]
impl Module for UsersModule {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let service = Self::service(ctx);
        service
            .store()
            .ensure_exists()
            .await
            .with_context(|| "failed to prepare users collection")?;

        tracing::info!(
            module = self.name(),
            path = %service.store().path().display(),
            "users module initialized"
        );
        Ok(())
    }

    fn routes(&self, ctx: &InitCtx<'_>) -> Option<Router> {
        Some(crate::routes::users::router(Arc::new(Self::service(ctx))))
    }
}

/// Create a new instance of the users module
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(UsersModule::new())
}
