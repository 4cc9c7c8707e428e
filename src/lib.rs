//! Scoped file management over well-known platform directories.
//!
//! A [`ScopedFileManager`] wraps a current base directory and exposes file
//! and folder operations relative to it. Every operation comes in two
//! flavors: a typed `try_*` method returning [`FileError`], and a
//! boolean/optional convenience method that logs the failure and never
//! returns an error.

pub mod basedir;
pub mod error;
pub mod manager;
pub mod storage;

pub use basedir::BaseDir;
pub use error::{FileError, ResolveError};
pub use manager::ScopedFileManager;
