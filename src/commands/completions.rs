//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::cli::Cli;
use crate::error::{Result, ShaddError};

/// Parse a shell name, case-insensitively
fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(ShaddError::UnknownShell {
            shell: name.to_string(),
        }),
    }
}

/// Write completions for `shell` into `out`
///
/// The script is rendered into memory first: `clap_complete` panics on a
/// failed write, so only our own write touches `out`.
pub fn generate(shell: &str, out: &mut dyn Write) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, "shadd", &mut script);
    out.write_all(&script)?;
    out.flush()?;
    Ok(())
}

/// Print completions for `shell` to stdout
pub fn run(shell: &str) -> Result<()> {
    generate(shell, &mut std::io::stdout().lock())
}
