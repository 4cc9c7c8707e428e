//! Error handling
//!
//! Defines error types and handling for scoped file operations.

pub mod types;

pub use types::*;
