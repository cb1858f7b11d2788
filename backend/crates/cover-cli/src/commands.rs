use crate::project_commands::ProjectCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and print the issued token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "COVER_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Show the account behind the token
    Me,

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}
