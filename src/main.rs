//! shadd - add shadcn components with the right package manager
//!
//! Detects the package manager a JavaScript/TypeScript project declares in
//! its `package.json` and forwards the command line to `shadcn add` through
//! that package manager's executor.

use std::io::Write;

use clap::Parser;

mod cli;
mod commands;
mod error;
mod logging;
mod package_manager;
mod runner;
mod workspace;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use error::ShaddError;

/// Exit code for every failure that is not the child's own
const FAILURE_EXIT_CODE: i32 = 1;

/// Print `err` as a single line on stderr
fn report(err: &ShaddError) {
    let prefix = console::style(err.prefix()).red().bold().for_stderr();
    eprintln!("{prefix} {err}");
}

/// Text carried by a panic payload, if it is a message
fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("internal error")
}

/// Report panics like any other unexpected error: one line, no backtrace
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let prefix = console::style("Unexpected error:").red().bold().for_stderr();
        let message = panic_message(info.payload());
        let _ = writeln!(std::io::stderr(), "{prefix} {message}");
        std::process::exit(FAILURE_EXIT_CODE);
    }));
}

fn main() {
    install_panic_hook();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() { FAILURE_EXIT_CODE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    logging::init(cli.verbose, console::colors_enabled_stderr());

    let result = match cli.completions.as_deref() {
        Some(shell) => commands::completions::run(shell).map(|()| 0),
        None => commands::add::run(&cli),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            report(&e);
            std::process::exit(FAILURE_EXIT_CODE);
        }
    }
}
