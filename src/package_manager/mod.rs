//! Supported package managers
//!
//! This module handles:
//! - The set of package managers shadd can dispatch through
//! - Normalizing a `packageManager` declaration into one of them
//! - Resolving the declaration for a project (via detection module)

use std::fmt;

pub mod detection;

pub use detection::resolve_or_error;

/// A package manager shadd knows how to run `shadcn` with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Npm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// All supported managers, in matching order
    pub const ALL: [PackageManager; 4] = [Self::Pnpm, Self::Npm, Self::Yarn, Self::Bun];

    /// Lowercase identifier, as written in `package.json`
    pub fn name(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Normalize a `packageManager` declaration.
    ///
    /// Case-insensitive prefix match against [`Self::ALL`], first match wins.
    /// Anything after the name, typically `@<version>`, is ignored.
    pub fn from_declaration(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|pm| value.starts_with(pm.name()))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
