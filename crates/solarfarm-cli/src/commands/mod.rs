//! Command handlers, one module per subcommand.

pub mod add;
pub mod completions;
pub mod import;
pub mod materials;

use std::path::Path;

use serde_json::{Value, json};
use tracing::info;

use solarfarm_adapters::{InMemoryPanelRepository, PanelFileLoader};
use solarfarm_core::{
    application::{PanelResult, PanelService},
    domain::Panel,
};

use crate::{error::CliResult, output::OutputManager};

/// Build a service over a fresh in-memory store seeded with the installed
/// panels from `seed_file`, if any.
pub(crate) fn open_service(seed_file: Option<&Path>) -> CliResult<PanelService> {
    let store = match seed_file {
        Some(path) => {
            let panels = PanelFileLoader::new(path).load()?;
            info!(count = panels.len(), path = %path.display(), "Seeding panel store");
            InMemoryPanelRepository::with_panels(panels)?
        }
        None => InMemoryPanelRepository::new(),
    };

    Ok(PanelService::new(Box::new(store)))
}

/// Human/plain rendering of one `add` outcome.
pub(crate) fn report(output: &OutputManager, candidate: &Panel, result: &PanelResult) -> CliResult<()> {
    match result.panel() {
        Some(stored) if result.is_success() => output.success(&format!("Added panel {stored}"))?,
        _ if result.is_success() => output.success(&format!("Added panel {candidate}"))?,
        _ => {
            output.error(&format!("Rejected panel {candidate}"))?;
            for message in result.messages() {
                output.detail(message)?;
            }
        }
    }
    Ok(())
}

/// JSON rendering of one `add` outcome.
pub(crate) fn outcome_json(candidate: &Panel, result: &PanelResult) -> Value {
    json!({
        "success": result.is_success(),
        "messages": result.messages(),
        "candidate": candidate,
        "stored": result.panel(),
    })
}
