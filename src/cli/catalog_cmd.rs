//! Handler for the `sptgen catalog` subcommand.

use std::path::Path;

use serde::Serialize;

use crate::catalog::{Catalog, Ordinal};
use crate::error::SptError;
use crate::generator::Schema;

use super::{load_config, Console};

/// One row of the ordinal table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct OrdinalEntry<'a> {
    pub(super) ordinal: Ordinal,
    pub(super) enumerator: String,
    pub(super) marker: &'a str,
}

pub(super) fn ordinal_entries<'a>(catalog: &'a Catalog, schema: &'a Schema) -> Vec<OrdinalEntry<'a>> {
    catalog
        .entries()
        .map(|(ordinal, marker)| {
            let marker = marker.name(&schema.sentinel);
            OrdinalEntry {
                ordinal,
                enumerator: format!("{}{}", schema.ordinal_prefix, marker),
                marker,
            }
        })
        .collect()
}

pub(crate) fn run_catalog(config: Option<&Path>, console: Console) -> Result<(), SptError> {
    let config = load_config(config, console)?;
    let catalog = config.catalog()?;
    let generator = config.generator()?;
    let entries = ordinal_entries(&catalog, generator.schema());

    if console.json {
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        println!("{:>3}  {}", entry.ordinal, entry.marker);
    }
    Ok(())
}
