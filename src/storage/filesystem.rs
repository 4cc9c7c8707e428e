//! File system operations
//!
//! Thin wrappers over `std::fs` plus the staging logic used for atomic
//! writes and file replacement.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Check if path names a regular file
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Check if path names a directory
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Uniquely-named sibling of `target` used to stage writes. Staying in the
/// target's directory keeps the final rename on a single volume.
fn staging_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}", Uuid::new_v4()));
    target.with_file_name(name)
}

/// Writes `bytes` to `path` with write-to-temp-then-rename semantics.
///
/// A crash mid-write never leaves a partially-written file visible at
/// `path`: readers observe either the old content or the new content.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let staged = staging_path(path);

    if let Err(e) = fs::write(&staged, bytes) {
        let _ = fs::remove_file(&staged);
        return Err(e);
    }

    if let Err(e) = fs::rename(&staged, path) {
        let _ = fs::remove_file(&staged);
        return Err(e);
    }

    Ok(())
}

/// Replaces `destination` with the contents of `source`.
///
/// Copies `source` to a uniquely-named sibling of `destination`, removes
/// `source`, then renames the sibling into place. External observers see
/// `destination` either fully old or fully new, never partial or absent.
///
/// A failure before the source removal cleans up the staged copy and
/// leaves both files unchanged. A failure between the removal and the
/// rename leaves the staged copy orphaned next to `destination` with
/// `destination` unchanged; callers needing stronger guarantees must
/// reconcile at the application level.
pub fn replace_file(source: &Path, destination: &Path) -> io::Result<()> {
    let staged = staging_path(destination);

    if let Err(e) = fs::copy(source, &staged) {
        let _ = fs::remove_file(&staged);
        return Err(e);
    }

    if let Err(e) = fs::remove_file(source) {
        let _ = fs::remove_file(&staged);
        return Err(e);
    }

    // The orphan window: from here on the staged copy is not cleaned up.
    fs::rename(&staged, destination)?;

    Ok(())
}

/// Available free space in bytes on the volume containing `path`.
#[cfg(unix)]
pub fn free_space(path: &Path) -> io::Result<u64> {
    use std::os::unix::ffi::OsStrExt;

    let cpath = std::ffi::CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains a NUL byte"))?;

    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let ret = unsafe { libc::statvfs(cpath.as_ptr(), &mut stat) };
    if ret != 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(stat.f_bavail as u64 * stat.f_frsize as u64)
}

/// Available free space in bytes on the volume containing `path`.
#[cfg(windows)]
pub fn free_space(path: &Path) -> io::Result<u64> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;
    use windows::core::PCWSTR;

    let mut wide: Vec<u16> = path.as_os_str().encode_wide().collect();
    wide.push(0);

    let mut free_bytes_available: u64 = 0;
    let result = unsafe {
        GetDiskFreeSpaceExW(
            PCWSTR(wide.as_ptr()),
            Some(&mut free_bytes_available),
            None,
            None,
        )
    };
    if result.is_err() {
        return Err(io::Error::last_os_error());
    }

    Ok(free_bytes_available)
}
