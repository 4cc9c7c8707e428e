//! Base directory resolver implementation

use std::env;
use std::path::PathBuf;

use crate::basedir::BaseDir;
use crate::error::ResolveError;

type Resolver = fn() -> Option<PathBuf>;

/// Capability table for the current platform.
///
/// Kinds absent from the table have no mapping here and resolve to
/// `UnavailableOnPlatform`.
#[cfg(target_os = "macos")]
const CAPABILITIES: &[(BaseDir, Resolver)] = &[
    (BaseDir::Bundle, bundle_dir),
    (BaseDir::Home, home_dir),
    (BaseDir::Temp, temp_dir),
    (BaseDir::Desktop, desktop_dir),
    (BaseDir::Document, document_dir),
    (BaseDir::Download, download_dir),
    (BaseDir::Shared, shared_dir),
    (BaseDir::Program, program_dir),
];

#[cfg(not(target_os = "macos"))]
const CAPABILITIES: &[(BaseDir, Resolver)] = &[
    (BaseDir::Home, home_dir),
    (BaseDir::Temp, temp_dir),
    (BaseDir::Desktop, desktop_dir),
    (BaseDir::Document, document_dir),
    (BaseDir::Download, download_dir),
    (BaseDir::Shared, shared_dir),
    (BaseDir::Program, program_dir),
];

/// Resolves a directory kind to an absolute path
pub fn resolve(kind: BaseDir) -> Result<PathBuf, ResolveError> {
    let (_, resolver) = CAPABILITIES
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .ok_or(ResolveError::UnavailableOnPlatform(kind))?;

    let path = resolver().ok_or(ResolveError::UnavailableOnPlatform(kind))?;

    if !path.is_dir() {
        return Err(ResolveError::NotFound(path));
    }

    Ok(path)
}

fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

fn temp_dir() -> Option<PathBuf> {
    Some(env::temp_dir())
}

fn desktop_dir() -> Option<PathBuf> {
    dirs::desktop_dir()
}

fn document_dir() -> Option<PathBuf> {
    dirs::document_dir()
}

fn download_dir() -> Option<PathBuf> {
    dirs::download_dir()
}

fn shared_dir() -> Option<PathBuf> {
    dirs::public_dir()
}

fn program_dir() -> Option<PathBuf> {
    env::current_dir().ok()
}

/// Resources directory of the enclosing application bundle. For an
/// executable at `Foo.app/Contents/MacOS/foo` this is
/// `Foo.app/Contents/Resources`.
#[cfg(target_os = "macos")]
fn bundle_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let contents = exe.parent()?.parent()?;
    Some(contents.join("Resources"))
}
