//! Subcommand handlers

pub mod completions;
pub mod fonts;
pub mod generate;
