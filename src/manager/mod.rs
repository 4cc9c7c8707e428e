//! Scoped file manager
//!
//! Holds the current base directory and exposes file and folder operations
//! relative to it.

pub mod json;
pub mod operations;

use log::error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::basedir::{self, BaseDir};
use crate::error::FileError;

/// File and folder operations scoped under a current base directory.
///
/// The base is set from a [`BaseDir`] kind plus an optional subdirectory
/// and always names a directory that existed when it was set. The struct
/// holds no lock: share an instance across threads only with external
/// synchronization, or give each thread its own.
///
/// The `try_*` methods return [`FileError`] values carrying the failure
/// cause; their unprefixed counterparts log the failure and reduce it to a
/// `bool` or `Option` for call sites that do not care why.
#[derive(Debug, Clone)]
pub struct ScopedFileManager {
    base: PathBuf,
}

impl ScopedFileManager {
    /// Creates a manager scoped to the program working directory
    pub fn new() -> Result<Self, FileError> {
        Self::with_base(BaseDir::Program, "")
    }

    /// Creates a manager scoped to `kind`, optionally under `subdir`
    pub fn with_base(kind: BaseDir, subdir: &str) -> Result<Self, FileError> {
        let base = resolve_base(kind, subdir)?;
        Ok(Self { base })
    }

    /// Points the manager at a new base directory.
    ///
    /// On failure the previous base is left untouched.
    pub fn set_base(&mut self, kind: BaseDir, subdir: &str) -> Result<(), FileError> {
        self.base = resolve_base(kind, subdir)?;
        Ok(())
    }

    /// The directory all relative operations are scoped to
    pub fn base_path(&self) -> &Path {
        &self.base
    }

    // ═══ Typed operations ═══

    /// Verifies that `name` exists under the base and is a regular file.
    ///
    /// Distinguishes a missing entry (`NotFound`) from a directory sitting
    /// at the path (`IsADirectory`).
    pub fn check_file(&self, name: &str) -> Result<PathBuf, FileError> {
        operations::check_file(&self.base, name)
    }

    /// Verifies that `name` under the base is a directory, creating it
    /// recursively when `create` is set.
    pub fn check_folder(&self, name: &str, create: bool) -> Result<PathBuf, FileError> {
        operations::check_folder(&self.base, name, create)
    }

    /// Lists entries of `folder` under the base, in enumeration order
    pub fn try_list_files(
        &self,
        folder: &str,
        extension: Option<&str>,
    ) -> Result<Vec<String>, FileError> {
        operations::list_entries(&self.base, folder, extension)
    }

    /// Writes `content` to `name` atomically
    pub fn try_save(&self, name: &str, content: impl AsRef<[u8]>) -> Result<(), FileError> {
        operations::write_file(&self.base, name, content.as_ref())
    }

    /// Appends `text` to an existing file; the file is not created
    pub fn try_append(&self, name: &str, text: &str) -> Result<(), FileError> {
        operations::append_file(&self.base, name, text)
    }

    /// Deletes the file `name` under the base
    pub fn try_delete(&self, name: &str) -> Result<(), FileError> {
        operations::delete_file(&self.base, name)
    }

    /// Reads `name` as a UTF-8 string
    pub fn try_load_string(&self, name: &str) -> Result<String, FileError> {
        operations::read_string(&self.base, name)
    }

    /// Reads the raw bytes of `name`
    pub fn try_load_bytes(&self, name: &str) -> Result<Vec<u8>, FileError> {
        operations::read_bytes(&self.base, name)
    }

    /// Replaces `destination` with the file `name` under the base.
    ///
    /// See [`crate::storage::replace_file`] for the replacement semantics
    /// and the documented orphan window.
    pub fn try_replace(&self, name: &str, destination: &Path) -> Result<(), FileError> {
        operations::replace_file(&self.base, name, destination)
    }

    /// Serializes `value` as pretty-printed JSON and writes it atomically
    pub fn try_save_object<T: Serialize>(&self, name: &str, value: &T) -> Result<(), FileError> {
        json::write_json(&self.base, name, value)
    }

    /// Reads `name` and deserializes it from JSON
    pub fn try_load_object<T: DeserializeOwned>(&self, name: &str) -> Result<T, FileError> {
        json::read_json(&self.base, name)
    }

    /// Available free space in bytes on the volume containing `at`
    pub fn try_free_space(at: &Path) -> Result<u64, FileError> {
        operations::free_space(at)
    }

    // ═══ Convenience wrappers ═══
    //
    // These never return an error: failures are logged at the operation
    // site and reduced to `false`/`None`.

    /// True only if `name` exists under the base and is a regular file
    pub fn file_exists(&self, name: &str) -> bool {
        self.check_file(name).is_ok()
    }

    /// True if `name` under the base is a directory, creating it first
    /// when `create` is set
    pub fn folder_exists(&self, name: &str, create: bool) -> bool {
        self.check_folder(name, create).is_ok()
    }

    /// Entries of `folder` under the base, or `None` if it cannot be
    /// enumerated
    pub fn list_files(&self, folder: &str, extension: Option<&str>) -> Option<Vec<String>> {
        self.try_list_files(folder, extension).ok()
    }

    /// Writes `content` to `name` atomically; false on any I/O failure
    pub fn save(&self, name: &str, content: impl AsRef<[u8]>) -> bool {
        self.try_save(name, content).is_ok()
    }

    /// Appends `text` to an existing file; false when missing or on error
    pub fn append(&self, name: &str, text: &str) -> bool {
        self.try_append(name, text).is_ok()
    }

    /// Deletes the file `name`; false when missing or on error
    pub fn delete(&self, name: &str) -> bool {
        self.try_delete(name).is_ok()
    }

    /// Contents of `name` as a string, or `None` on any failure
    pub fn load_string(&self, name: &str) -> Option<String> {
        self.try_load_string(name).ok()
    }

    /// Contents of `name` as bytes, or `None` on any failure
    pub fn load_bytes(&self, name: &str) -> Option<Vec<u8>> {
        self.try_load_bytes(name).ok()
    }

    /// Replaces `destination` with the file `name`; false on any failure
    pub fn replace(&self, name: &str, destination: &Path) -> bool {
        self.try_replace(name, destination).is_ok()
    }

    /// Persists `value` as JSON under `name`; false on any failure
    pub fn save_object<T: Serialize>(&self, name: &str, value: &T) -> bool {
        self.try_save_object(name, value).is_ok()
    }

    /// Loads a JSON value from `name`, or `None` on any failure
    pub fn load_object<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.try_load_object(name).ok()
    }

    /// Free space at `at` in bytes, or 0 when the query fails.
    ///
    /// 0 conflates "no space" with "query failed"; use
    /// [`Self::try_free_space`] to tell them apart.
    pub fn free_space(at: &Path) -> u64 {
        Self::try_free_space(at).unwrap_or(0)
    }
}

fn resolve_base(kind: BaseDir, subdir: &str) -> Result<PathBuf, FileError> {
    let root = basedir::resolve(kind)?;
    let dir = if subdir.is_empty() {
        root
    } else {
        root.join(subdir)
    };

    if !dir.is_dir() {
        error!("Bad directory: {}", dir.display());
        return Err(FileError::BadDirectory(dir));
    }

    Ok(dir)
}
