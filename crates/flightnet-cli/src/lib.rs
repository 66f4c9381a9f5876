//! Flightnet CLI library.
//!
//! Subcommand handlers, terminal styling, and output formatting for the
//! `flightnet-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
