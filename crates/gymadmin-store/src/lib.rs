//! Gym administration store - durable backends and seed import
//!
//! Provides:
//! - SQLite key-value backend with an embedded, checksummed migration runner
//! - Single-file JSON backend with atomic temp-file + rename writes
//! - Seed fixture parser (YAML), digest and importer

pub mod db;
pub mod errors;
pub mod kv;
pub mod migrations;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use kv::{open_backend, JsonFileKv, SqliteKv};
pub use seed::{import_seed, ImportSummary};
