//! Form-level rules applied before a command reaches the store

pub mod invariants;
pub mod validation;
