//! Implementation of the `solarfarm import` command.
//!
//! Every panel in the batch goes through the same service, in file order, so
//! later panels see the ones accepted before them and duplicates inside one
//! batch are caught.

use std::path::Path;

use serde_json::json;
use tracing::{info, instrument};

use solarfarm_adapters::PanelFileLoader;

use crate::{
    cli::{ImportArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ImportArgs, seed_file: Option<&Path>, output: OutputManager) -> CliResult<()> {
    let candidates = PanelFileLoader::new(&args.file).load()?;
    if candidates.is_empty() {
        return Err(CliError::InvalidInput {
            message: format!("{} contains no panels", args.file.display()),
        });
    }

    let service = super::open_service(seed_file)?;

    let mut outcomes = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        let result = service.add(Some(candidate))?;
        outcomes.push((candidate, result));
    }

    let total = outcomes.len();
    let rejected = outcomes.iter().filter(|(_, r)| !r.is_success()).count();
    info!(total, rejected, "Import finished");

    match output.format() {
        OutputFormat::Json => {
            let results: Vec<_> = outcomes
                .iter()
                .map(|(candidate, result)| super::outcome_json(candidate, result))
                .collect();
            output.json(&json!({
                "total": total,
                "added": total - rejected,
                "rejected": rejected,
                "results": results,
            }))?;
        }
        _ => {
            output.header(&format!("Importing {} panel(s):", total))?;
            for (candidate, result) in &outcomes {
                super::report(&output, candidate, result)?;
            }
            output.print(&format!(
                "\n{} added, {} rejected",
                total - rejected,
                rejected
            ))?;
        }
    }

    if rejected == 0 {
        Ok(())
    } else {
        Err(CliError::PanelsRejected { rejected, total })
    }
}
