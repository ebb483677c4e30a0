//! Test fixtures shared by unit tests.
//!
//! Builds throwaway project trees (temp directories, repository markers,
//! `package.json` manifests) with a single call.
//!
//! ```ignore
//! use crate::test_fixtures::{create_git_repo, create_nested_dir, write_manifest};
//!
//! let (temp, repo) = create_git_repo();
//! write_manifest(&repo, r#"{ "packageManager": "pnpm@8.6.0" }"#);
//! let nested = create_nested_dir(&temp, "apps/web");
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Base directory for temp dirs, always absolute.
///
/// A relative `TMPDIR` would place fixtures under the current directory,
/// which is usually inside this crate's own repository.
fn temp_dir_base() -> PathBuf {
    let t = std::env::temp_dir();
    if t.is_absolute() {
        return t;
    }
    #[cfg(windows)]
    {
        std::env::var("TEMP")
            .or_else(|_| std::env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory outside of any repository.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create a temp directory marked as a repository root (`.git/`).
///
/// # Panics
///
/// Panics if the temp directory or the marker cannot be created.
#[must_use]
pub fn create_git_repo() -> (TempDir, PathBuf) {
    let temp = create_temp_dir();
    let path = temp.path().to_path_buf();
    std::fs::create_dir(path.join(".git")).expect("Failed to create .git directory");
    (temp, path)
}

/// Create a nested directory structure below `temp`.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn create_nested_dir(temp: &TempDir, path: &str) -> PathBuf {
    let nested = temp.path().join(path);
    std::fs::create_dir_all(&nested).expect("Failed to create nested directory");
    nested
}

/// Create files from `(relative path, content)` pairs.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Write `package.json` with raw `content` into `dir`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_manifest(dir: &Path, content: &str) {
    std::fs::create_dir_all(dir).expect("Failed to create manifest directory");
    std::fs::write(dir.join("package.json"), content).expect("Failed to write package.json");
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_git_repo() {
        let (temp, path) = create_git_repo();
        assert!(path.join(".git").is_dir());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_nested_dir() {
        let (temp, _path) = create_git_repo();
        let nested = create_nested_dir(&temp, "deep/nested/path");
        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("apps/web/README.md", "# Web")]);

        let content = std::fs::read_to_string(temp.path().join("apps/web/README.md"))
            .expect("Failed to read");
        assert_eq!(content, "# Web");
    }

    #[test]
    fn test_write_manifest() {
        let temp = create_temp_dir();
        let dir = temp.path().join("packages/ui");
        write_manifest(&dir, "{}");
        assert!(dir.join("package.json").is_file());
    }
}
