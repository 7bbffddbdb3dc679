//! Handler for the `sptgen generate` subcommand.

use std::path::Path;

use serde::Serialize;

use crate::error::SptError;
use crate::generator::{counted, ScaffoldArtifact};

use super::catalog_cmd::{ordinal_entries, OrdinalEntry};
use super::{load_config, write_output, Console};

/// Printed with --json after writing the header to a file
#[derive(Debug, Serialize)]
pub(super) struct GenerateSummary<'a> {
    pub(super) output: String,
    pub(super) ordinals: Vec<OrdinalEntry<'a>>,
    pub(super) slots: usize,
    pub(super) bytes: usize,
}

pub(crate) fn run_generate(
    config: Option<&Path>,
    slots: Option<usize>,
    output: Option<&Path>,
    console: Console,
) -> Result<(), SptError> {
    let config = load_config(config, console)?;
    let catalog = config.catalog()?;
    let budget = config.budget(slots)?;
    let generator = config.generator()?;
    let artifact = generator.generate(&catalog, budget)?;

    console.status(&format!(
        "Generated {} and {}",
        counted(catalog.ordinal_count(), "ordinal"),
        counted(artifact.slot_count(), "warning slot")
    ));

    let Some(path) = output else {
        print!("{}", artifact);
        return Ok(());
    };

    write_output(path, artifact.as_str())?;

    if console.json {
        let summary = GenerateSummary {
            output: path.display().to_string(),
            ordinals: ordinal_entries(&catalog, generator.schema()),
            slots: artifact.slot_count(),
            bytes: artifact.as_str().len(),
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        console.note(&describe(&artifact, path));
    }

    Ok(())
}

fn describe(artifact: &ScaffoldArtifact, path: &Path) -> String {
    format!(
        "Wrote {} ({}, {})",
        path.display(),
        counted(artifact.trial_count(), "kind"),
        counted(artifact.slot_count(), "slot")
    )
}
