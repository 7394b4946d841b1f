//! Route module discovery.
//!
//! Route modules are declared in an explicit list of [`RouteEntry`] values. Each entry
//! records the path of the file that declared it (through [`route_entry!`]) and the
//! factory of the module serving it. The URL prefix is the file name up to its first
//! dot, so `books.rs` mounts at `/books` and `books.v2.rs` also mounts at `/books`.

use std::fmt;
use std::path::Path;

use crate::module::ModuleFactory;

/// One declared route module.
#[derive(Clone, Copy)]
pub struct RouteEntry {
    source: &'static str,
    factory: Option<ModuleFactory>,
}

impl RouteEntry {
    pub const fn new(source: &'static str, factory: ModuleFactory) -> Self {
        Self {
            source,
            factory: Some(factory),
        }
    }

    /// Entry for a file that does not export a module.
    pub const fn without_module(source: &'static str) -> Self {
        Self {
            source,
            factory: None,
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn factory(&self) -> Option<ModuleFactory> {
        self.factory
    }

    /// URL segment derived from the declaring file's name.
    pub fn prefix(&self) -> &'static str {
        clean_name(file_name(self.source))
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("source", &self.source)
            .field("has_module", &self.factory.is_some())
            .finish()
    }
}

/// Declare a route entry for the current file.
///
/// ```ignore
/// pub const ENTRY: RouteEntry = bookshelf_kernel::route_entry!(crate::modules::books::create_module);
/// ```
#[macro_export]
macro_rules! route_entry {
    () => {
        $crate::discovery::RouteEntry::without_module(file!())
    };
    ($factory:expr) => {
        $crate::discovery::RouteEntry::new(file!(), $factory)
    };
}

/// Final component of a source path.
pub fn file_name(source: &str) -> &str {
    Path::new(source)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(source)
}

/// Everything before the first dot of `file_name`.
pub fn clean_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Why a route entry was not mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry declares no module factory.
    MissingModule,
    /// The module returned no handler group.
    MissingRoutes,
    /// The derived prefix is empty, e.g. for `.hidden.rs`.
    EmptyPrefix,
    /// Another entry already claimed the prefix.
    DuplicatePrefix { mounted: &'static str },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingModule => f.write_str("does not export a route module"),
            SkipReason::MissingRoutes => f.write_str("module does not expose a router"),
            SkipReason::EmptyPrefix => f.write_str("file name yields an empty prefix"),
            SkipReason::DuplicatePrefix { mounted } => {
                write!(f, "prefix already mounted from {mounted}")
            }
        }
    }
}

/// Structured warning for a skipped route entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryWarning {
    pub source: &'static str,
    pub prefix: &'static str,
    pub reason: SkipReason,
}

impl DiscoveryWarning {
    pub(crate) fn emit(&self) {
        tracing::warn!(
            source = self.source,
            prefix = self.prefix,
            reason = %self.reason,
            "skipping route module"
        );
    }
}

impl fmt::Display for DiscoveryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipping {}: {}", file_name(self.source), self.reason)
    }
}
