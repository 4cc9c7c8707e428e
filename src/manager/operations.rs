//! Scoped file operations
//!
//! Free functions implementing file and folder operations relative to a
//! base directory. Each returns a typed error; the convenience wrappers on
//! `ScopedFileManager` reduce these to booleans and options.

use log::{error, info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::FileError;
use crate::storage::filesystem;

/// Joins a relative name onto the base directory.
///
/// Names must be relative: `Path::join` discards the base entirely when
/// handed an absolute path, which is not a supported use.
pub(crate) fn scoped(base: &Path, name: &str) -> PathBuf {
    base.join(name)
}

/// Verifies that `name` under `base` exists and is a regular file
pub fn check_file(base: &Path, name: &str) -> Result<PathBuf, FileError> {
    let path = scoped(base, name);

    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => {
            warn!("No file, it's a directory: {}", path.display());
            Err(FileError::IsADirectory(path))
        }
        Ok(_) => Ok(path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("No file at path: {}", path.display());
            Err(FileError::NotFound(path))
        }
        Err(e) => {
            error!("Failed to stat {}: {e}", path.display());
            Err(FileError::Io(path, e))
        }
    }
}

/// Verifies that `name` under `base` is a directory, optionally creating it
///
/// With `create` set, a missing folder is created recursively together with
/// its intermediate directories.
pub fn check_folder(base: &Path, name: &str, create: bool) -> Result<PathBuf, FileError> {
    let path = scoped(base, name);

    if filesystem::directory_exists(&path) {
        return Ok(path);
    }

    if path.exists() {
        warn!("Not a directory: {}", path.display());
        return Err(FileError::BadDirectory(path));
    }

    if !create {
        return Err(FileError::NotFound(path));
    }

    match fs::create_dir_all(&path) {
        Ok(_) => {
            info!("Folder did not exist, created: {}", path.display());
            Ok(path)
        }
        Err(e) => {
            error!("Failed to create folder {}: {e}", path.display());
            Err(FileError::Io(path, e))
        }
    }
}

/// Lists the entries of `folder` under `base` in enumeration order.
///
/// With `extension` set, keeps only names ending in `"." + extension`
/// (exact, case-sensitive suffix match).
pub fn list_entries(
    base: &Path,
    folder: &str,
    extension: Option<&str>,
) -> Result<Vec<String>, FileError> {
    let path = scoped(base, folder);

    let entries = fs::read_dir(&path).map_err(|e| {
        error!("Failed to list {}: {e}", path.display());
        FileError::Io(path.clone(), e)
    })?;

    let mut names = Vec::new();
    for entry in entries.flatten() {
        names.push(entry.file_name().to_string_lossy().to_string());
    }

    if let Some(extension) = extension {
        let suffix = format!(".{extension}");
        names.retain(|name| name.ends_with(&suffix));
    }

    Ok(names)
}

/// Writes `bytes` to `name` under `base` atomically
pub fn write_file(base: &Path, name: &str, bytes: &[u8]) -> Result<(), FileError> {
    let path = scoped(base, name);

    filesystem::write_atomic(&path, bytes).map_err(|e| {
        error!("Failed to save {}: {e}", path.display());
        FileError::Io(path, e)
    })
}

/// Appends `text` to an existing file under `base`.
///
/// The file is never created here; appending to a missing file fails. The
/// handle is closed on every exit path.
pub fn append_file(base: &Path, name: &str, text: &str) -> Result<(), FileError> {
    let path = scoped(base, name);

    if !filesystem::file_exists(&path) {
        warn!("Cannot append, no file at {}", path.display());
        return Err(FileError::NotFound(path));
    }

    let mut file = OpenOptions::new().append(true).open(&path).map_err(|e| {
        error!("Failed to open {} for appending: {e}", path.display());
        FileError::Io(path.clone(), e)
    })?;

    file.write_all(text.as_bytes()).map_err(|e| {
        error!("Failed to append to {}: {e}", path.display());
        FileError::Io(path.clone(), e)
    })?;

    Ok(())
}

/// Deletes the file `name` under `base`
pub fn delete_file(base: &Path, name: &str) -> Result<(), FileError> {
    let path = scoped(base, name);

    match fs::remove_file(&path) {
        Ok(_) => {
            info!("Deleted file {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Cannot delete, no file at {}", path.display());
            Err(FileError::NotFound(path))
        }
        Err(e) => {
            error!("Failed to delete {}: {e}", path.display());
            Err(FileError::Io(path, e))
        }
    }
}

/// Reads the full contents of `name` under `base`
pub fn read_bytes(base: &Path, name: &str) -> Result<Vec<u8>, FileError> {
    let path = scoped(base, name);

    fs::read(&path).map_err(|e| {
        error!("Failed to load {}: {e}", path.display());
        match e.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound(path),
            _ => FileError::Io(path, e),
        }
    })
}

/// Reads `name` under `base` as a UTF-8 string
pub fn read_string(base: &Path, name: &str) -> Result<String, FileError> {
    let path = scoped(base, name);
    let bytes = read_bytes(base, name)?;

    String::from_utf8(bytes).map_err(|_| {
        error!("File is not valid UTF-8: {}", path.display());
        FileError::Encoding(path)
    })
}

/// Replaces `destination` with the file `name` under `base`
pub fn replace_file(base: &Path, name: &str, destination: &Path) -> Result<(), FileError> {
    let source = scoped(base, name);

    filesystem::replace_file(&source, destination).map_err(|e| {
        error!(
            "Failed to replace {} with {}: {e}",
            destination.display(),
            source.display()
        );
        FileError::Io(source, e)
    })
}

/// Available free space in bytes on the volume containing `at`
pub fn free_space(at: &Path) -> Result<u64, FileError> {
    filesystem::free_space(at).map_err(|e| {
        error!("Free space query failed for {}: {e}", at.display());
        FileError::Io(at.to_path_buf(), e)
    })
}
