//! `polar-toolbox` CLI application
//!
//! The CLI application is organized in several subcommands. The
//! supported subcommands can be seen by running `polar-toolbox`.
//! See the modules below for examples and more information about
//! how to use each subcommand.

use clap::Parser;
use std::error::Error;

pub mod reliability;
pub mod sequence;

/// Trait to run a CLI subcommand
pub trait Run {
    /// Run the CLI subcommand
    fn run(&self) -> Result<(), Box<dyn Error>>;
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(author, version, name = "polar-toolbox", about = "Polar toolbox")]
pub enum Args {
    /// reliability subcommand
    Reliability(reliability::Args),
    /// sequence subcommand
    Sequence(sequence::Args),
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Args::Reliability(x) => x.run(),
            Args::Sequence(x) => x.run(),
        }
    }
}
