//! Process-level tracing setup
//!
//! Logs go to stderr so they interleave with the child's output instead of
//! mixing into anything piped from stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive that overrides the
/// level picked from flags
pub const LOG_ENV: &str = "SHADD_LOG";

/// Default filter directive for the given verbosity
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Build the filter from `SHADD_LOG`, falling back to the verbosity flag
fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Initialize tracing output.
///
/// Best-effort: a second call, or a subscriber installed elsewhere, is left
/// alone.
pub fn init(verbose: bool, color: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .without_time()
        .try_init();
}
