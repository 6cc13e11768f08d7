//! # Polar toolbox
//!
//! `polar_toolbox` is a collection of Rust utilities to construct polar
//! codes. It contains the polar sequence defined in the 5G NR standard and
//! computes the frozen and unfrozen bit positions that a polar encoder and
//! decoder need to agree on.
//!
//! It can be used as a Rust library or as a CLI tool that allows access from
//! the command line to the constructions implemented in `polar-toolbox`. See
//! [`cli`] for documentation about the usage of the CLI tool.

#![warn(missing_docs)]

pub mod cli;
pub mod codes;
pub mod construction;
