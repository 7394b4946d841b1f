//! File-backed record store.
//!
//! Each collection lives in a single JSON file holding an array of records. Every
//! operation re-reads the file, so the file is the only source of truth. Writers are
//! not serialized: two concurrent read-modify-write cycles on the same file race and the
//! last write wins.

pub mod error;
pub mod json_file;

pub use error::{StoreError, StoreResult};
pub use json_file::{JsonFileStore, Record};
