//! Tracing setup for the `solarfarm` binary.
//!
//! The library crates only emit events; the subscriber lives here. Events go
//! to stderr so stdout stays clean for panel reports and JSON.
//!
//! `-v` raises the level to INFO, `-vv` to DEBUG and adds event targets so
//! repository events (`solarfarm_adapters`) can be told apart from service
//! events (`solarfarm_core`), `-vvv` to TRACE. `--quiet` drops to ERROR.
//! `RUST_LOG` overrides all of it.

use std::{io::IsTerminal as _, path::Path};

use tracing::{Span, info_span};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events the default filter lets through.
const LOG_TARGETS: [&str; 3] = ["solarfarm", "solarfarm_core", "solarfarm_adapters"];

/// Initialise the global tracing subscriber. Call once, before any command.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(show_targets(args))
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Root span for one invocation; every service and store event nests in it.
pub fn farm_span(command: &'static str, seed_file: Option<&Path>) -> Span {
    info_span!(
        "farm",
        command,
        seed_file = %seed_file.map_or_else(|| "none".into(), |p| p.display().to_string()),
    )
}

fn filter_directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn show_targets(args: &GlobalArgs) -> bool {
    !args.quiet && args.verbose >= 2
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
