//! Tooling & Integration Layer
//!
//! Command-line front end over the preprocess pipeline.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
