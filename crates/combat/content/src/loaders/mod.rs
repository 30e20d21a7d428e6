//! Content loaders for reading boss profiles from files.
//!
//! Loaders convert RON profile files into [`crate::BossProfile`] values and
//! validate them before handing them to the runtime.

mod profiles;

pub use profiles::ProfileLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
