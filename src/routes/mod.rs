//! Route loader.
//!
//! Every route module in this directory declares an `ENTRY` and is listed in
//! [`ROUTE_MODULES`]. Its file name (up to the first dot) becomes the URL prefix.

use bookshelf_kernel::{ModuleRegistry, RouteEntry};

pub mod books;
pub mod users;

/// Route modules mounted by the application.
pub const ROUTE_MODULES: &[RouteEntry] = &[books::ENTRY, users::ENTRY];

/// Build the registry from [`ROUTE_MODULES`].
pub fn discover() -> ModuleRegistry {
    discover_from(ROUTE_MODULES)
}

/// Build a registry from an arbitrary entry list, skipping this loader's own entry.
pub fn discover_from(entries: &[RouteEntry]) -> ModuleRegistry {
    ModuleRegistry::discover(entries, file!())
}
