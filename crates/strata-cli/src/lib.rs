//! Command line front end for Strata translation tables

pub mod args;
pub mod commands;

pub use args::{Args, Command, PathSpec};
pub use commands::{build_registry, execute, merge_settings};
