use crate::commands::Commands;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "cover")]
#[command(about = "Command-line client for the cover project store")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, env = "COVER_BASE_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Bearer token from `cover login`
    #[arg(long, global = true, env = "COVER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
