use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization and route construction
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Builds a module instance; referenced from a route entry.
pub type ModuleFactory = fn() -> Arc<dyn Module>;

/// Core module trait that every resource module implements
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context
    /// Called once during startup, before any route is mounted
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Handler group for this module, mounted under `/{prefix}`.
    /// `None` means the module exposes no routes and is skipped with a warning.
    fn routes(&self, _ctx: &InitCtx<'_>) -> Option<Router> {
        None
    }

    /// Called after every module has been initialized
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called during application shutdown
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
