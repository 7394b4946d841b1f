pub mod discovery;
pub mod module;
pub mod registry;
pub mod settings;

pub use discovery::{DiscoveryWarning, RouteEntry, SkipReason};
pub use module::{InitCtx, Module, ModuleFactory};
pub use registry::{ModuleRegistry, Mount, MountedModule, RouteTable};
