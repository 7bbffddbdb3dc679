//! Project configuration (scaffold.toml)
//!
//! ```toml
//! [catalog]
//! slots = 20
//! kinds = ["Expecting_an_identifier", "Missing_open_bracket"]
//!
//! [schema]
//! namespace = "spt"
//! ```
//!
//! Both tables are optional. Without `[catalog]` the seephit catalog is used.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{Catalog, SlotBudget, DEFAULT_SLOTS};
use crate::error::{CatalogError, ConfigError};
use crate::generator::{Generator, Schema};

/// Default config file name
pub const CONFIG_FILE: &str = "scaffold.toml";

/// Parsed `scaffold.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,

    #[serde(default)]
    pub schema: Schema,
}

/// The `[catalog]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Error kinds in ordinal order
    pub kinds: Vec<String>,

    /// Warning slots to unroll
    #[serde(default = "default_slots")]
    pub slots: usize,
}

fn default_slots() -> usize {
    DEFAULT_SLOTS
}

impl Config {
    /// Load a config from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse a config from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build the validated catalog
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(c) => Catalog::new(c.kinds.iter().cloned()),
            None => Ok(Catalog::seephit()),
        }
    }

    /// Slot budget, with an optional command-line override
    pub fn budget(&self, override_slots: Option<usize>) -> Result<SlotBudget, CatalogError> {
        let configured = self.catalog.as_ref().map_or(DEFAULT_SLOTS, |c| c.slots);
        SlotBudget::new(override_slots.unwrap_or(configured))
    }

    pub fn generator(&self) -> Result<Generator, CatalogError> {
        Generator::new(self.schema.clone())
    }
}
