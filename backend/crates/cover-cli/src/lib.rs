//! cover-cli library
//!
//! Exports the HTTP client for use in tests and other crates.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod input;
pub mod project_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use input::{preview_data_url, read_canvas};
pub use project_commands::ProjectCommands;
