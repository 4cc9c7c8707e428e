//! Error types
//!
//! Defines domain-specific error types for each module of the library.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::basedir::BaseDir;

/// Base directory resolution errors
#[derive(Debug)]
pub enum ResolveError {
    /// The directory kind has no mapping on the current platform.
    UnavailableOnPlatform(BaseDir),
    /// The platform reported a directory that does not exist.
    NotFound(PathBuf),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnavailableOnPlatform(kind) => {
                write!(f, "Directory kind {kind:?} is not available on this platform")
            }
            ResolveError::NotFound(p) => {
                write!(f, "Base directory not found: {}", p.display())
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// File and folder operation errors
#[derive(Debug)]
pub enum FileError {
    /// A base or folder target is missing or not a directory.
    BadDirectory(PathBuf),
    /// An expected file or folder is absent.
    NotFound(PathBuf),
    /// A file was expected but a directory was found.
    IsADirectory(PathBuf),
    /// A read, write, copy, remove, or rename failed.
    Io(PathBuf, io::Error),
    /// File contents were not valid UTF-8.
    Encoding(PathBuf),
    /// JSON encoding or decoding failed.
    Serialization(PathBuf, serde_json::Error),
    /// Base directory resolution failed.
    Resolve(ResolveError),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::BadDirectory(p) => write!(f, "Bad directory: {}", p.display()),
            FileError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FileError::IsADirectory(p) => {
                write!(f, "Expected a file, found a directory: {}", p.display())
            }
            FileError::Io(p, e) => write!(f, "I/O error on {}: {}", p.display(), e),
            FileError::Encoding(p) => write!(f, "Invalid UTF-8 in {}", p.display()),
            FileError::Serialization(p, e) => {
                write!(f, "JSON error for {}: {}", p.display(), e)
            }
            FileError::Resolve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FileError {}

impl From<ResolveError> for FileError {
    fn from(error: ResolveError) -> Self {
        FileError::Resolve(error)
    }
}
