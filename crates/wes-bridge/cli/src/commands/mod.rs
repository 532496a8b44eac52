//! Subcommand implementations

pub mod request;
pub mod translate;
