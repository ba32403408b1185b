//! Implementation of the `solarfarm materials` command.

use serde_json::json;

use solarfarm_core::domain::PanelMaterial;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => {
            let materials: Vec<_> = PanelMaterial::ALL
                .iter()
                .map(|m| json!({ "code": m.as_str(), "name": m.display_name() }))
                .collect();
            output.json(&json!(materials))?;
        }
        _ => {
            output.header("Panel materials:")?;
            for material in PanelMaterial::ALL {
                output.print(&format!(
                    "  {:<9} {}",
                    material.as_str(),
                    material.display_name()
                ))?;
            }
        }
    }

    Ok(())
}
