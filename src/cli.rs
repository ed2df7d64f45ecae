//! Command-line arguments.
use std::path::PathBuf;

use clap::Parser;

/// Version string reported by `--version`.
///
/// Taken from `DOTSTOW_VERSION` at build time (see `build.rs`), falling back
/// to the package version.
pub const VERSION: &str = match option_env!("DOTSTOW_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Mirror a directory tree into the home directory as links.
#[derive(Parser, Debug)]
#[command(
    name = "dotstow",
    about = "Link a dotfiles tree into the home directory",
    version = VERSION
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Options consumed by the stow command.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options that shape a stow run.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Preview links without changing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Source directory to stow (defaults to the current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}
