//! Flags shared by every subcommand.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::AppConfig;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug with event targets, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print rejected panels and errors"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long = "config", global = true, value_name = "FILE", help = "Configuration file path")]
    pub config: Option<PathBuf>,

    /// Panels already installed in the farm.
    ///
    /// Overrides `store.seed_file` from the configuration.
    #[arg(
        short = 'e',
        long = "existing",
        global = true,
        value_name = "FILE",
        help = "Panels already installed (.json or .toml)"
    )]
    pub existing: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// The file the panel store is seeded from: `--existing`, else the
    /// configured seed file, else nothing.
    pub fn seed_file<'a>(&'a self, config: &'a AppConfig) -> Option<&'a Path> {
        self.existing
            .as_deref()
            .or(config.store.seed_file.as_deref())
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    Human,
    Plain,
    /// One JSON document per command.
    Json,
}
