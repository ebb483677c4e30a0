//! Error types and handling for shadd
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//! Malformed manifests are not errors; they are treated as "no declaration".

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shadd operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShaddError {
    #[error(
        "Not inside an active git repository. Run this inside a repository with shadcn initialized (see https://ui.shadcn.com/docs/cli#init)."
    )]
    #[diagnostic(
        code(shadd::git::not_in_repo),
        help("Run 'git init' in your project or cd into an existing repository")
    )]
    NotInRepository,

    #[error(
        "No package manager detected. Ensure your project is initialized and a supported package manager is declared in package.json (\"packageManager\": \"pnpm@<version>\")."
    )]
    #[diagnostic(
        code(shadd::package_manager::not_found),
        help("Supported package managers: pnpm, npm, yarn, bun")
    )]
    NoPackageManager,

    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(
        code(shadd::runner::spawn_failed),
        help("Check that the package manager is installed and on PATH")
    )]
    SpawnFailed { program: String, reason: String },

    #[error("Cannot determine current directory: {reason}")]
    #[diagnostic(code(shadd::fs::current_dir))]
    CurrentDirUnavailable { reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(shadd::completions::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shadd::io::error))]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl ShaddError {
    /// Whether this error is a condition the user is expected to run into.
    ///
    /// Expected errors are reported with a plain `Error:` prefix; anything
    /// else is reported as unexpected.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotInRepository | Self::NoPackageManager | Self::UnknownShell { .. }
        )
    }

    /// Prefix used when printing this error to stderr
    pub fn prefix(&self) -> &'static str {
        if self.is_expected() {
            "Error:"
        } else {
            "Unexpected error:"
        }
    }
}

impl From<std::io::Error> for ShaddError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Result type alias for shadd operations
pub type Result<T> = std::result::Result<T, ShaddError>;
