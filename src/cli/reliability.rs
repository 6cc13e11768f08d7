//! Reliability CLI subcommand.
//!
//! This subcommand prints the reliability ranks of the first positions of
//! the polar sequence to `stdout`, one rank per position in position order.
//! See [`crate::codes::nr`] for more information about the sequence.
//!
//! # Examples
//! The ranks of the 8 first bit positions are printed with
//! ```shell
//! $ polar-toolbox reliability --codeword-size 8
//! 0 1 2 7 3 8 11 24
//! ```

use crate::cli::*;
use crate::codes::nr;
use clap::Parser;

/// Reliability CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Prints the reliability ranks of the polar sequence")]
pub struct Args {
    /// Codeword size (n)
    #[arg(long)]
    codeword_size: usize,
}

impl Run for Args {
    fn run(&self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let n = self.codeword_size;
        if n == 0 || n > nr::MAX_CODEWORD_SIZE {
            return Err(format!("invalid codeword size {}", n).into());
        }
        let ranks = (0..n)
            .map(|q| nr::reliability(q).to_string())
            .collect::<Vec<_>>();
        println!("{}", ranks.join(" "));
        Ok(())
    }
}
