//! Base directory resolution
//!
//! Maps well-known directory kinds to absolute paths on the current
//! platform.

mod resolver;

// Re-export public functions
pub use resolver::resolve;

/// Well-known directory roots a manager can be scoped to.
///
/// Availability is platform-dependent: `Bundle` only resolves on macOS,
/// and kinds the platform does not report (for example `Download` on a
/// headless system) fail with `UnavailableOnPlatform` rather than falling
/// back silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDir {
    /// Application bundle resources (macOS only).
    Bundle,
    /// The current user's home directory.
    Home,
    /// The system temporary directory.
    Temp,
    /// The user's desktop directory.
    Desktop,
    /// The user's documents directory.
    Document,
    /// The user's downloads directory.
    Download,
    /// The shared/public directory.
    Shared,
    /// The program's current working directory.
    Program,
}
