use anyhow::Context;
use axum::Router;
use std::sync::Arc;

use crate::discovery::{self, DiscoveryWarning, RouteEntry, SkipReason};
use crate::module::{InitCtx, Module};

/// A module together with the prefix it is mounted under.
#[derive(Clone)]
pub struct MountedModule {
    pub prefix: &'static str,
    pub source: &'static str,
    pub module: Arc<dyn Module>,
}

/// Router of one module, ready to be nested under `/{prefix}`.
pub struct Mount {
    pub prefix: &'static str,
    pub source: &'static str,
    pub router: Router,
}

/// Immutable routing table handed to the HTTP layer.
pub struct RouteTable {
    pub mounts: Vec<Mount>,
    pub warnings: Vec<DiscoveryWarning>,
}

/// Module registry built once at startup from the route entries
pub struct ModuleRegistry {
    modules: Vec<MountedModule>,
    warnings: Vec<DiscoveryWarning>,
}

impl ModuleRegistry {
    /// Create an empty module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Instantiate the module of every entry.
    ///
    /// The entry whose prefix matches the loader's own file (`loader_source`) is ignored.
    /// Entries without a module, with an empty prefix, or repeating a prefix are skipped
    /// with a warning.
    pub fn discover(entries: &[RouteEntry], loader_source: &str) -> Self {
        let own_name = discovery::clean_name(discovery::file_name(loader_source));
        let mut registry = Self::new();

        for entry in entries {
            let prefix = entry.prefix();
            if prefix == own_name {
                tracing::debug!(source = entry.source(), "ignoring route loader entry");
                continue;
            }

            let reason = if prefix.is_empty() {
                Some(SkipReason::EmptyPrefix)
            } else if let Some(existing) = registry.modules.iter().find(|m| m.prefix == prefix) {
                Some(SkipReason::DuplicatePrefix {
                    mounted: existing.source,
                })
            } else if entry.factory().is_none() {
                Some(SkipReason::MissingModule)
            } else {
                None
            };

            if let Some(reason) = reason {
                registry.skip(entry.source(), prefix, reason);
                continue;
            }

            if let Some(factory) = entry.factory() {
                registry.register(prefix, entry.source(), factory());
            }
        }

        registry
    }

    /// Register a module under `prefix`
    pub fn register(&mut self, prefix: &'static str, source: &'static str, module: Arc<dyn Module>) {
        tracing::debug!(module = module.name(), prefix, "registered module");
        self.modules.push(MountedModule {
            prefix,
            source,
            module,
        });
    }

    fn skip(&mut self, source: &'static str, prefix: &'static str, reason: SkipReason) {
        let warning = DiscoveryWarning {
            source,
            prefix,
            reason,
        };
        warning.emit();
        self.warnings.push(warning);
    }

    /// Get all registered modules in registration order
    pub fn modules(&self) -> &[MountedModule] {
        &self.modules
    }

    /// Warnings collected while discovering modules
    pub fn warnings(&self) -> &[DiscoveryWarning] {
        &self.warnings
    }

    /// Initialize modules in registration order
    pub async fn init_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for mounted in &self.modules {
            let module = &mounted.module;
            tracing::info!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Start modules in registration order
    pub async fn start_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        for mounted in &self.modules {
            let module = &mounted.module;
            tracing::info!(module = module.name(), "starting module");

            module
                .start(ctx)
                .await
                .with_context(|| format!("failed to start module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Stop modules in reverse order
    pub async fn stop_modules(&self) -> anyhow::Result<()> {
        for mounted in self.modules.iter().rev() {
            let module = &mounted.module;
            tracing::info!(module = module.name(), "stopping module");

            module
                .stop()
                .await
                .with_context(|| format!("failed to stop module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Collect the handler group of every module.
    ///
    /// Modules without routes are left out and reported next to the discovery warnings.
    pub fn route_table(&self, ctx: &InitCtx<'_>) -> RouteTable {
        let mut warnings = self.warnings.clone();
        let mut mounts = Vec::with_capacity(self.modules.len());

        for mounted in &self.modules {
            match mounted.module.routes(ctx) {
                Some(router) => mounts.push(Mount {
                    prefix: mounted.prefix,
                    source: mounted.source,
                    router,
                }),
                None => {
                    let warning = DiscoveryWarning {
                        source: mounted.source,
                        prefix: mounted.prefix,
                        reason: SkipReason::MissingRoutes,
                    };
                    warning.emit();
                    warnings.push(warning);
                }
            }
        }

        RouteTable { mounts, warnings }
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
