//! Error types for sptgen
//!
//! Every fallible operation returns one of the enums below. The generator
//! fails atomically: a `CatalogError` means no artifact text was produced.

use miette::Diagnostic;
use thiserror::Error;

use crate::catalog::Ordinal;

/// Errors raised while validating a catalog or slot budget.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CatalogError {
    #[error("duplicate error kind '{name}' (entries {first} and {second})")]
    #[diagnostic(
        code(sptgen::catalog::duplicate_name),
        help("Every kind must appear once; the sentinel name is reserved as well.")
    )]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("invalid error kind name {name:?} at entry {position}: {reason}")]
    #[diagnostic(
        code(sptgen::catalog::invalid_name),
        help("Names must be plain C++ identifiers: [A-Za-z_][A-Za-z0-9_]*, no keywords.")
    )]
    InvalidName {
        name: String,
        position: usize,
        reason: NameIssue,
    },

    #[error("invalid schema entry {field} = {value:?}: {reason}")]
    #[diagnostic(code(sptgen::catalog::invalid_schema))]
    InvalidSchema {
        field: &'static str,
        value: String,
        reason: NameIssue,
    },

    #[error("slot budget must be at least 1, got {slots}")]
    #[diagnostic(code(sptgen::catalog::invalid_budget))]
    InvalidBudget { slots: usize },
}

/// Why a name was rejected as a target identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameIssue {
    Empty,
    BadStart,
    BadCharacter(char),
    Keyword,
    Reserved,
    /// Clashes with an identifier the schema emits at the same scope
    SchemaClash,
}

impl std::fmt::Display for NameIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "name is empty"),
            Self::BadStart => write!(f, "must start with a letter or '_'"),
            Self::BadCharacter(c) => write!(f, "character {:?} is not allowed", c),
            Self::Keyword => write!(f, "is a C++ keyword"),
            Self::Reserved => write!(f, "is a reserved identifier"),
            Self::SchemaClash => write!(f, "clashes with a generated identifier"),
        }
    }
}

/// Errors from evaluating a report against a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DispatchError {
    #[error("ordinal {ordinal} has no marker type in this catalog")]
    #[diagnostic(code(sptgen::dispatch::unmapped_ordinal))]
    UnmappedOrdinal { ordinal: Ordinal },
}

/// Errors from the tag harvester. Any of these aborts before a file is written.
#[derive(Debug, Error, Diagnostic)]
pub enum HarvestError {
    #[error("failed to fetch tag reference: {0}")]
    #[diagnostic(code(sptgen::harvest::network))]
    Network(String),

    #[error("no tag names found at {url}")]
    #[diagnostic(
        code(sptgen::harvest::no_match),
        help("The reference page layout may have changed; check the .standard-table markup.")
    )]
    NoMatch { url: String },

    #[error("failed to write tag file: {0}")]
    #[diagnostic(code(sptgen::harvest::io))]
    Io(#[from] std::io::Error),

    #[error("built-in tag pattern does not compile: {0}")]
    #[diagnostic(code(sptgen::harvest::pattern))]
    Pattern(#[from] regex::Error),
}

/// Errors from loading `scaffold.toml`.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    #[diagnostic(code(sptgen::config::io))]
    Io { path: String, message: String },

    #[error("invalid configuration: {0}")]
    #[diagnostic(code(sptgen::config::parse))]
    Parse(String),
}

/// Top-level error surfaced by the command-line interface.
#[derive(Debug, Error, Diagnostic)]
pub enum SptError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Harvest(#[from] HarvestError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {path}: {source}")]
    #[diagnostic(code(sptgen::output))]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    #[diagnostic(code(sptgen::json))]
    Json(#[from] serde_json::Error),

    #[error("built-in filter pattern does not compile: {0}")]
    #[diagnostic(code(sptgen::pattern))]
    Pattern(#[from] regex::Error),
}
