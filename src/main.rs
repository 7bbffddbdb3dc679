//! sptgen CLI - scaffold generator for the seephit constexpr parser

use clap::Parser;
use std::process::ExitCode;

use sptgen::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("{:?}", miette::Report::new(e));
            }
            ExitCode::FAILURE
        }
    }
}
