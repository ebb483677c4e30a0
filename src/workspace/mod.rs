//! Project layout lookups
//!
//! This module handles:
//! - Repository boundary detection (`.git` marker)
//! - Reading the `packageManager` declaration from `package.json`
//! - Walking ancestor directories with a cycle guard
//!
//! All lookups are read-only.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use normpath::PathExt;

pub mod git;
pub mod manifest;

/// Repository marker entry name
pub const GIT_MARKER: &str = ".git";

/// Project manifest filename
pub const MANIFEST_FILE: &str = "package.json";

/// Iterator over a directory and its ancestors.
///
/// Ends at the filesystem root, or as soon as a directory is seen twice
/// (compared by normalized path, so symlinked aliases count as the same
/// directory).
#[derive(Debug)]
pub struct Ancestors {
    next: Option<PathBuf>,
    visited: HashSet<PathBuf>,
}

impl Iterator for Ancestors {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let current = self.next.take()?;
        if !self.visited.insert(visit_key(&current)) {
            tracing::trace!(dir = %current.display(), "directory revisited, stopping walk");
            return None;
        }
        self.next = current.parent().map(Path::to_path_buf);
        Some(current)
    }
}

/// Walk `start` and each of its parents, innermost first.
///
/// A relative `start` is resolved against the current directory so the
/// walk always reaches the real filesystem root.
pub fn ancestors(start: &Path) -> Ancestors {
    let start = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
    Ancestors {
        next: Some(start),
        visited: HashSet::new(),
    }
}

/// Key used for the visited set.
///
/// Falls back to the lexical path when normalization fails (missing
/// directories, odd Windows temp paths).
fn visit_key(path: &Path) -> PathBuf {
    path.normalize()
        .map(normpath::BasePathBuf::into_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
