//! Platform data directory resolution.

use std::path::PathBuf;

use super::error::PathError;

/// Root directory for newsdesk application data.
///
/// Resolves to the platform data directory plus a `newsdesk` segment,
/// e.g. `~/.local/share/newsdesk` on Linux.
pub fn data_root() -> Result<PathBuf, PathError> {
    let base = dirs::data_dir().ok_or(PathError::NoDataDir)?;
    let root = base.join("newsdesk");
    if root.exists() && !root.is_dir() {
        return Err(PathError::NotADirectory(root));
    }
    Ok(root)
}
