//! File system storage primitives
//!
//! Low-level helpers shared by the scoped manager: existence checks,
//! atomic writes, file replacement, and free-space queries.

pub mod filesystem;

// Re-export commonly used helpers
pub use filesystem::{directory_exists, file_exists, free_space, replace_file, write_atomic};
