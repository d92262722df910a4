//! Seed fixture import
//!
//! Provides:
//! - YAML parser with validation
//! - Digest canonicalization
//! - Importer replacing every collection of a store

pub mod digest;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use importer::{import_seed, import_seed_data, ImportSummary};
pub use parser::{parse_seed_file, parse_seed_str};
