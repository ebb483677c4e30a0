//! Add command implementation
//!
//! The add flow:
//! 1. Confirm the working directory is inside a git repository
//! 2. Resolve the package manager declared in package.json
//! 3. Run `shadcn add` through it and hand back its exit code

use std::path::Path;

use crate::cli::{Cli, ForwardedArgs};
use crate::error::{Result, ShaddError};
use crate::package_manager;
use crate::runner;
use crate::workspace::git;

/// Run the add command from the current directory
pub fn run(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir().map_err(|e| ShaddError::CurrentDirUnavailable {
        reason: e.to_string(),
    })?;
    run_in(&cwd, &cli.forwarded_args())
}

/// Run the add command as if started from `dir`
pub fn run_in(dir: &Path, forwarded: &ForwardedArgs) -> Result<i32> {
    if !git::is_inside_repository(dir) {
        return Err(ShaddError::NotInRepository);
    }

    let (manager, source_dir) = package_manager::resolve_or_error(dir)?;
    tracing::debug!(
        %manager,
        manifest_dir = %source_dir.display(),
        "using declared package manager"
    );

    runner::dispatch(manager, forwarded.as_slice())
}
