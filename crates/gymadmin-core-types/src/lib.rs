//! Core types shared across the gym administration crates
//!
//! - **Correlation types**: RequestId, SessionId
//! - **Sensitive data**: Sensitive<T> marker for credential redaction
//! - **Schema constants**: Canonical field keys and event names for logging

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestId, SessionId};
pub use sensitive::Sensitive;
