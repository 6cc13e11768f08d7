//! Standard-defined polar code data.
//!
//! This module contains the fixed data tables that published standards define
//! for polar codes. Currently the only table is the 5G NR polar sequence in
//! the [`nr`] module.

pub mod nr;
