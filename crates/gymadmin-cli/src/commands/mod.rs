pub mod classes;
pub mod context;
pub mod dashboard;
pub mod instructors;
pub mod members;
pub mod person;
pub mod reservations;
pub mod seed;

/// Result type shared by every command
pub type CmdResult = Result<(), Box<dyn std::error::Error>>;
