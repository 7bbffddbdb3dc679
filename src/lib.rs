//! sptgen
//!
//! Generates the parse-error scaffold header for the seephit constexpr HTML
//! parser from an error catalog, and ships the small tools around it: a
//! compiler-output filter, a test-program skeleton and an HTML tag harvester.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod generator;
pub mod harvest;
mod pattern;
pub mod skeleton;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, ErrorKind, MarkerType, Ordinal, SlotBudget};
    pub use crate::error::{CatalogError, SptError};
    pub use crate::generator::{generate, Generator, ScaffoldArtifact, Schema, Section};
}
