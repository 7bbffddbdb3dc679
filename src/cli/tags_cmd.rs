//! Handler for the `sptgen tags` subcommand.

use std::path::Path;

use crate::error::{HarvestError, SptError};
use crate::harvest::harvest_tags;

use super::Console;

pub(crate) fn run_tags(url: &str, output: &Path, console: Console) -> Result<(), SptError> {
    console.status(&format!("Fetching {}", url));
    let tags = harvest_tags(url)?;

    // Nothing touches the file until the whole header is rendered
    std::fs::write(output, tags.render()).map_err(HarvestError::Io)?;

    if console.json {
        println!(
            "{}",
            serde_json::json!({
                "output": output.display().to_string(),
                "tags": tags.tags().len(),
            })
        );
    } else {
        console.note(&format!(
            "Wrote {} tags to {}",
            tags.tags().len(),
            output.display()
        ));
    }
    Ok(())
}
