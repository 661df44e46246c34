//! Workspace root discovery.
//!
//! A Simone workspace is any directory containing a `.simone` directory.
//! Commands resolve their root once at startup: an explicit `--root` flag
//! or `SIMONE_ROOT` value is used literally, otherwise the nearest
//! ancestor workspace of the current directory wins.

use std::path::{Path, PathBuf};

/// Name of the workspace marker directory.
pub const SIMONE_DIR: &str = ".simone";

/// Configuration document location, relative to the workspace root.
pub const CONFIG_PATH: &str = ".simone/config/atlassian.json";

/// Default milestone directory for `sync`, relative to the workspace root.
pub const DEFAULT_MILESTONE_DIR: &str = ".simone/02_REQUIREMENTS/M07_Atlassian_Integration";

/// Walk up from `start` to the nearest directory containing `.simone`.
pub fn find_simone_root(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join(SIMONE_DIR).is_dir() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}
