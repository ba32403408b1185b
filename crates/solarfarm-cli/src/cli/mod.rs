//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use solarfarm_core::domain::PanelMaterial;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "solarfarm",
    bin_name = "solarfarm",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2600} Solar farm panel inventory",
    long_about = "SolarFarm validates solar panel records and stores them \
                  without duplicate positions.",
    after_help = "EXAMPLES:\n\
        \x20 solarfarm add --section West --row 5 --column 9 --material cd-te --year 2011\n\
        \x20 solarfarm import panels.json --existing farm.json\n\
        \x20 solarfarm materials\n\
        \x20 solarfarm completions bash > /usr/share/bash-completion/completions/solarfarm",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate and add a single panel.
    #[command(
        visible_alias = "a",
        about = "Validate and add a panel",
        after_help = "EXAMPLES:\n\
            \x20 solarfarm add --section West --row 5 --column 9 --material cd-te --year 2011\n\
            \x20 solarfarm add --section West --row 5 --column 9 --material cigs --year 2015 --existing farm.json"
    )]
    Add(AddArgs),

    /// Validate and add every panel in a batch file.
    #[command(
        visible_alias = "i",
        about = "Validate and add panels from a file",
        after_help = "EXAMPLES:\n\
            \x20 solarfarm import panels.json\n\
            \x20 solarfarm import panels.toml --existing farm.json --output-format json"
    )]
    Import(ImportArgs),

    /// List panel materials.
    #[command(visible_alias = "m", about = "List panel materials")]
    Materials,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 solarfarm completions bash > ~/.local/share/bash-completion/completions/solarfarm\n\
            \x20 solarfarm completions zsh  > ~/.zfunc/_solarfarm"
    )]
    Completions(CompletionsArgs),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `solarfarm add`.
///
/// `--section` and `--material` are optional on purpose: leaving them out is
/// reported as a validation failure, not a usage error.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Caller-assigned id; 0 lets the store assign one.
    #[arg(long = "id", default_value_t = 0, help = "Panel id (0 = assign)")]
    pub id: i32,

    /// Section label.
    #[arg(short = 's', long = "section", value_name = "SECTION", help = "Section name")]
    pub section: Option<String>,

    /// Row within the section.
    #[arg(
        short = 'r',
        long = "row",
        allow_negative_numbers = true,
        help = "Row (0-250)"
    )]
    pub row: i32,

    /// Column within the section.
    #[arg(
        short = 'k',
        long = "column",
        allow_negative_numbers = true,
        help = "Column (0-250)"
    )]
    pub column: i32,

    /// Panel material.
    #[arg(
        short = 'm',
        long = "material",
        value_name = "MATERIAL",
        value_parser = parse_material,
        help = "Material code (see `solarfarm materials`)"
    )]
    pub material: Option<PanelMaterial>,

    /// Installation year.
    #[arg(
        short = 'y',
        long = "year",
        allow_negative_numbers = true,
        help = "Year installed (1980 to last year)"
    )]
    pub year: i32,

    /// Panel is on a sun tracker.
    #[arg(long = "tracking", help = "Panel uses a tracking mount")]
    pub tracking: bool,
}

// ── import ────────────────────────────────────────────────────────────────────

/// Arguments for `solarfarm import`.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Batch of candidate panels.
    #[arg(value_name = "FILE", help = "Panels to add (.json or .toml)")]
    pub file: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `solarfarm completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

impl Commands {
    /// Subcommand name, as recorded on the root span.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Import(_) => "import",
            Self::Materials => "materials",
            Self::Completions(_) => "completions",
        }
    }
}

/// Shells supported by `clap_complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn parse_material(s: &str) -> Result<PanelMaterial, String> {
    s.parse::<PanelMaterial>().map_err(|e| {
        let known: Vec<&str> = PanelMaterial::ALL.iter().map(|m| m.as_str()).collect();
        format!("{e} (expected one of: {})", known.join(", "))
    })
}
