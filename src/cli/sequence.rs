//! Sequence CLI subcommand.
//!
//! This subcommand computes the frozen and unfrozen bit positions of an
//! `(n, k)` polar code and prints them to `stdout`. See
//! [`crate::construction`] for more information about how the positions are
//! selected.
//!
//! # Examples
//! The positions of the (8, 4) code are printed with
//! ```shell
//! $ polar-toolbox sequence --codeword-size 8 --message-size 4
//! frozen: 0 1 2 4
//! unfrozen: 3 5 6 7
//! ```
//! A single set can be selected, which prints just the space-separated
//! positions:
//! ```shell
//! $ polar-toolbox sequence --codeword-size 8 --message-size 4 --frozen
//! 0 1 2 4
//! ```
//! The partition can also be printed as a frozen-bit mask in position order,
//! with `1` marking the frozen positions:
//! ```shell
//! $ polar-toolbox sequence --codeword-size 8 --message-size 4 --mask
//! 11101000
//! ```

use crate::cli::*;
use crate::construction::FrozenBits;
use clap::Parser;

/// Sequence CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Computes frozen and unfrozen positions of a polar code")]
pub struct Args {
    /// Codeword size (n)
    #[arg(long)]
    codeword_size: usize,
    /// Message size (k)
    #[arg(long)]
    message_size: usize,
    /// Prints only the frozen positions
    #[arg(long, conflicts_with_all = ["unfrozen", "mask"])]
    frozen: bool,
    /// Prints only the unfrozen positions
    #[arg(long, conflicts_with = "mask")]
    unfrozen: bool,
    /// Prints the frozen-bit mask in position order
    #[arg(long)]
    mask: bool,
}

fn positions_line(positions: &[usize]) -> String {
    let strs = positions.iter().map(|q| q.to_string()).collect::<Vec<_>>();
    strs.join(" ")
}

impl Run for Args {
    fn run(&self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let bits = FrozenBits::new(self.codeword_size, self.message_size)?;
        if self.mask {
            let mask = bits
                .frozen_mask()
                .iter()
                .map(|&frozen| if frozen { '1' } else { '0' })
                .collect::<String>();
            println!("{}", mask);
        } else if self.frozen {
            println!("{}", positions_line(bits.frozen_positions()));
        } else if self.unfrozen {
            println!("{}", positions_line(bits.unfrozen_positions()));
        } else {
            println!("frozen: {}", positions_line(bits.frozen_positions()));
            println!("unfrozen: {}", positions_line(bits.unfrozen_positions()));
        }
        Ok(())
    }
}
