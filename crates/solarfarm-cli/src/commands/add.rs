//! Implementation of the `solarfarm add` command.

use std::path::Path;

use tracing::instrument;

use solarfarm_core::domain::Panel;

use crate::{
    cli::{AddArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: AddArgs, seed_file: Option<&Path>, output: OutputManager) -> CliResult<()> {
    let service = super::open_service(seed_file)?;

    let candidate = Panel {
        id: args.id,
        row: args.row,
        column: args.column,
        section: args.section,
        tracking: args.tracking,
        material: args.material,
        year_installed: args.year,
    };

    let result = service.add(Some(&candidate))?;

    match output.format() {
        OutputFormat::Json => output.json(&super::outcome_json(&candidate, &result))?,
        _ => super::report(&output, &candidate, &result)?,
    }

    if result.is_success() {
        Ok(())
    } else {
        Err(CliError::PanelsRejected {
            rejected: 1,
            total: 1,
        })
    }
}
