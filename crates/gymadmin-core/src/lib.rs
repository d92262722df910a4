//! Gym administration core
//!
//! This crate holds everything that does not depend on a concrete storage
//! medium:
//! - Entity models (members, instructors, classes, reservations) in their
//!   persisted JSON shape
//! - `GymStore`, which owns the four collections, assigns ids, cascades
//!   deletes and writes every change back through a `KvStorage`
//! - Form validation, the login gate and read-only queries
//! - Configuration, the error facility and the logging facility

pub mod apply;
pub mod auth;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;
pub mod seed;
pub mod storage;

// Used by the exported logging macros
pub use gymadmin_core_types;

// Re-export commonly used types
pub use apply::apply;
pub use auth::{AdminAccount, Session};
pub use commands::{Command, CommandOutcome};
pub use config::{GymConfig, StorageBackend};
pub use errors::{ExError, ExErrorKind, GymError, Result};
pub use model::{Collection, EntityId};
pub use ops::{GymStore, HydrationPolicy, HydrationReport};
pub use seed::SeedData;
pub use storage::{KvStorage, MemoryStorage};
