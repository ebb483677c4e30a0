//! `package.json` reading
//!
//! Only the `packageManager` field matters. A manifest that is missing,
//! unreadable or not valid JSON is treated the same as one without a
//! declaration.

use std::path::Path;

use serde::Deserialize;

use super::MANIFEST_FILE;

/// The part of `package.json` shadd cares about
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Raw `packageManager` value; kept untyped so non-string values do not
    /// fail the whole parse
    #[serde(rename = "packageManager", default)]
    package_manager: Option<serde_json::Value>,
}

impl Manifest {
    /// Parse manifest content
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// The declared package manager, if it is a string
    pub fn package_manager(&self) -> Option<&str> {
        self.package_manager.as_ref().and_then(|v| v.as_str())
    }
}

/// Read the `packageManager` declaration of the manifest in `dir`
pub fn read_package_manager(dir: &Path) -> Option<String> {
    let path = dir.join(MANIFEST_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "cannot read manifest");
            }
            return None;
        }
    };

    match Manifest::parse(&content) {
        Ok(manifest) => {
            let declared = manifest.package_manager().map(str::to_string);
            tracing::trace!(path = %path.display(), ?declared, "read manifest");
            declared
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "ignoring malformed manifest");
            None
        }
    }
}
