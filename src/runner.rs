//! Running `shadcn add` through a package manager
//!
//! Builds the per-manager invocation, spawns it with inherited stdio and maps
//! the child's exit status to our own exit code. The child is never retried.

use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Result, ShaddError};
use crate::package_manager::PackageManager;

/// Package spec handed to each package manager's executor
pub const SHADCN_PACKAGE: &str = "shadcn@latest";

/// `shadcn` subcommand every invocation runs
pub const ADD_SUBCOMMAND: &str = "add";

/// Exit code used when the child exits without one (killed by a signal)
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// A concrete external invocation of `shadcn add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadcnCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShadcnCommand {
    /// Build the invocation for `manager`, appending `forwarded` after `add`.
    ///
    /// | manager | command |
    /// |---------|---------|
    /// | pnpm | `pnpm dlx shadcn@latest add …` |
    /// | npm  | `npx shadcn@latest add …` |
    /// | yarn | `yarn shadcn@latest add …` |
    /// | bun  | `bunx --bun shadcn@latest add …` |
    pub fn for_manager(manager: PackageManager, forwarded: &[String]) -> Self {
        let (program, runner_args): (&str, &[&str]) = match manager {
            PackageManager::Pnpm => ("pnpm", &["dlx"]),
            PackageManager::Npm => ("npx", &[]),
            PackageManager::Yarn => ("yarn", &[]),
            PackageManager::Bun => ("bunx", &["--bun"]),
        };

        let args = runner_args
            .iter()
            .chain(&[SHADCN_PACKAGE, ADD_SUBCOMMAND])
            .map(|s| (*s).to_string())
            .chain(forwarded.iter().cloned())
            .collect();

        Self {
            program: program.to_string(),
            args,
        }
    }

    /// The process to spawn, with stdio inherited from this process.
    ///
    /// On Windows the package manager executables are `.cmd` shims, so the
    /// command goes through `cmd /C`.
    pub fn to_command(&self) -> Command {
        let mut command = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.program);
            c
        } else {
            Command::new(&self.program)
        };
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl fmt::Display for ShadcnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run `shadcn add` with `forwarded` arguments through `manager`
pub fn dispatch(manager: PackageManager, forwarded: &[String]) -> Result<i32> {
    run(&ShadcnCommand::for_manager(manager, forwarded))
}

/// Spawn `command`, wait for it and return its exit code
pub fn run(command: &ShadcnCommand) -> Result<i32> {
    tracing::debug!(%command, "spawning");

    let status = command
        .to_command()
        .status()
        .map_err(|e| ShaddError::SpawnFailed {
            program: command.program.clone(),
            reason: e.to_string(),
        })?;

    let code = exit_code(status);
    tracing::debug!(%status, code, "child exited");
    Ok(code)
}

/// Map a child's exit status to the code this process exits with
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(FALLBACK_EXIT_CODE)
}
