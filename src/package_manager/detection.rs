//! Package manager detection for a project directory
//!
//! The package manager must be declared explicitly through the
//! `packageManager` field of a `package.json`. Lockfiles are never
//! consulted, and manifests above the repository root are never read.

use std::path::{Path, PathBuf};

use crate::error::{Result, ShaddError};
use crate::workspace::{ancestors, git, manifest};

use super::PackageManager;

/// Outcome of a package manager lookup.
///
/// `manager` and `source_dir` are either both set or both empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The declared package manager
    pub manager: Option<PackageManager>,

    /// Directory of the `package.json` that declared it
    pub source_dir: Option<PathBuf>,
}

impl Resolution {
    fn found(manager: PackageManager, source_dir: PathBuf) -> Self {
        Self {
            manager: Some(manager),
            source_dir: Some(source_dir),
        }
    }

    /// Manager and source directory, if resolved
    pub fn into_found(self) -> Option<(PackageManager, PathBuf)> {
        self.manager.zip(self.source_dir)
    }
}

/// Resolve the package manager declared for `start`.
///
/// Walks from `start` up to the enclosing repository root (inclusive) and
/// returns the first supported declaration. Outside of a repository this
/// returns an empty resolution without reading any manifest.
pub fn resolve_package_manager(start: &Path) -> Resolution {
    let Some(root) = git::find_repository_root(start) else {
        return Resolution::default();
    };

    for dir in ancestors(start) {
        if let Some(declared) = manifest::read_package_manager(&dir) {
            match PackageManager::from_declaration(&declared) {
                Some(manager) => {
                    tracing::debug!(
                        %manager,
                        dir = %dir.display(),
                        "resolved package manager"
                    );
                    return Resolution::found(manager, dir);
                }
                None => tracing::debug!(
                    declared = %declared,
                    dir = %dir.display(),
                    "unsupported packageManager declaration"
                ),
            }
        }

        if dir == root {
            break;
        }
    }

    Resolution::default()
}

/// Resolve the package manager or return an error if none is declared
pub fn resolve_or_error(start: &Path) -> Result<(PackageManager, PathBuf)> {
    resolve_package_manager(start)
        .into_found()
        .ok_or(ShaddError::NoPackageManager)
}
