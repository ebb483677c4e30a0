//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

/// Leading token dropped from forwarded arguments; `shadcn add` is implied
const REDUNDANT_SUBCOMMAND: &str = "add";

/// shadd - add shadcn components with your project's package manager
///
/// Detects the package manager declared in package.json and runs
/// `shadcn add` through it.
#[derive(Parser, Debug)]
#[command(
    name = "shadd",
    author,
    version,
    args_override_self = true,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Add shadcn components with the package manager your project declares",
    long_about = "shadd finds the package manager declared in the \"packageManager\" field of \
                  package.json (searching up to the git repository root) and runs \
                  `shadcn@latest add` through it: pnpm dlx, npx, yarn or bunx.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shadd button                 \x1b[90m# Add a component\x1b[0m\n   \
                  shadd add button card        \x1b[90m# Leading `add` is optional\x1b[0m\n   \
                  shadd -y dialog              \x1b[90m# Skip prompts\x1b[0m\n   \
                  shadd button --path src/ui   \x1b[90m# Options after components go to shadcn\x1b[0m\n"
)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Skip confirmation prompts (passed to shadcn as --yes)
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print shell completions (bash, elvish, fish, powershell, zsh)
    #[arg(long, value_name = "SHELL", hide = true)]
    pub completions: Option<String>,

    /// Components to add, followed by any options for `shadcn add`
    #[arg(
        value_name = "COMPONENTS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub components: Vec<String>,
}

impl Cli {
    /// Arguments handed to `shadcn add`
    pub fn forwarded_args(&self) -> ForwardedArgs {
        let mut forwarded = ForwardedArgs::new(self.components.iter().cloned());
        if self.yes {
            forwarded.0.insert(0, "--yes".to_string());
        }
        forwarded
    }
}

/// Arguments passed through to `shadcn add`.
///
/// A single leading `add` is dropped so `shadd add button` does not run
/// `shadcn add add button`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedArgs(Vec<String>);

impl ForwardedArgs {
    pub fn new(args: impl IntoIterator<Item = String>) -> Self {
        let mut args = args.into_iter().peekable();
        if args.peek().is_some_and(|first| first == REDUNDANT_SUBCOMMAND) {
            args.next();
        }
        Self(args.collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
