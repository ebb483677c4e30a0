//! Repository boundary detection

use std::path::{Path, PathBuf};

use super::{GIT_MARKER, ancestors};

/// Find the nearest repository root at or above `start`.
///
/// A directory is a repository root when it contains a `.git` entry. Both
/// the usual `.git/` directory and the `.git` file written by worktrees and
/// submodules count. The innermost root wins.
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    let root = ancestors(start).find(|dir| has_marker(dir));
    match &root {
        Some(dir) => tracing::debug!(root = %dir.display(), "found repository root"),
        None => tracing::debug!(start = %start.display(), "no repository above start"),
    }
    root
}

/// Check whether `directory` sits inside a repository
pub fn is_inside_repository(directory: &Path) -> bool {
    find_repository_root(directory).is_some()
}

fn has_marker(dir: &Path) -> bool {
    let found = dir.join(GIT_MARKER).exists();
    tracing::trace!(dir = %dir.display(), found, "checking for repository marker");
    found
}
