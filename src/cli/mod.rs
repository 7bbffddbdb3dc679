//! Command-line interface for sptgen
//!
//! Provides commands: generate, catalog, filter, skeleton, tags

mod catalog_cmd;
mod generate_cmd;
mod tags_cmd;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::SptError;

/// sptgen - scaffold generator for the seephit constexpr parser
#[derive(Parser, Debug)]
#[command(name = "sptgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output summaries as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show progress on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the parse-error scaffold header
    Generate {
        /// Catalog configuration (scaffold.toml); the seephit catalog if omitted
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Number of warning slots to unroll
        #[arg(long, short = 'n')]
        slots: Option<usize>,

        /// Write the header here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List the catalog's ordinals and marker types
    Catalog {
        /// Catalog configuration (scaffold.toml)
        #[arg(long, short)]
        config: Option<PathBuf>,
    },

    /// Shorten a raw compiler diagnostic to "<message> at line: <n>"
    Filter {
        /// Raw compiler output
        raw: Option<String>,
    },

    /// Print a test program that parses and dumps a template file
    Skeleton {
        /// Template source to #include
        source: String,
    },

    /// Harvest HTML tag names into a C++ header
    Tags {
        /// Reference page to scrape
        #[arg(long, default_value = crate::harvest::DEFAULT_TAGS_URL)]
        url: String,

        /// Header to write
        #[arg(long, short, default_value = "tags.hpp")]
        output: PathBuf,
    },
}

/// Output flags shared by every handler
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Console {
    /// Progress line on stderr, shown with --verbose
    pub fn status(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Human-readable result line on stdout, hidden by --quiet
    pub fn note(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }
}

impl Cli {
    pub fn console(&self) -> Console {
        Console {
            json: self.json,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }

    /// Run the parsed command
    pub fn run(&self) -> Result<(), SptError> {
        let console = self.console();

        match &self.command {
            Command::Generate {
                config,
                slots,
                output,
            } => {
                generate_cmd::run_generate(config.as_deref(), *slots, output.as_deref(), console)?;
            }
            Command::Catalog { config } => {
                catalog_cmd::run_catalog(config.as_deref(), console)?;
            }
            Command::Filter { raw } => {
                let filtered = crate::filter::filter_message(raw.as_deref().unwrap_or(""))?;
                println!("{}", filtered);
            }
            Command::Skeleton { source } => {
                println!("{}", crate::skeleton::build_skeleton(source));
            }
            Command::Tags { url, output } => {
                tags_cmd::run_tags(url, output, console)?;
            }
        }

        Ok(())
    }
}

/// Load `path`, or the built-in defaults when no file was given
fn load_config(path: Option<&Path>, console: Console) -> Result<Config, SptError> {
    match path {
        Some(path) => {
            console.status(&format!("Loading {}", path.display()));
            Ok(Config::load(path)?)
        }
        None => {
            console.status("Using the built-in seephit catalog");
            Ok(Config::default())
        }
    }
}

/// Write a finished artifact in one call
fn write_output(path: &Path, content: &str) -> Result<(), SptError> {
    std::fs::write(path, content).map_err(|source| SptError::Output {
        path: path.display().to_string(),
        source,
    })
}
