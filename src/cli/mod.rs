//! Command-line interface: argument definitions and their handlers.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
