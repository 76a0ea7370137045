//! Command-line interface module
//!
//! Handles argument parsing and subcommand dispatch

pub mod args;

pub use args::*;
