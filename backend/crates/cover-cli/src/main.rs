//! cover - command-line client for the cover project store
//!
//! # Examples
//!
//! ```bash
//! # Log in and keep the token
//! export COVER_TOKEN=$(cover login --email admin@example.com --password admin123 | jq -r .token)
//!
//! # Save a new project with a preview
//! cover project save --name "Spring cover" --canvas-file canvas.json --preview-file cover.png
//!
//! # List projects
//! cover project list --pretty
//! ```

use cover_cli::{
    CliClientResult, Cli, Client, Commands, ProjectCommands, preview_data_url, read_canvas,
};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut client = Client::new(&cli.server, cli.token.as_deref());

    let result = run(&mut client, cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &mut Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Login { email, password } => client.login(&email, &password).await,
        Commands::Me => client.me().await,
        Commands::Project { action } => match action {
            ProjectCommands::List => client.list_projects().await,
            ProjectCommands::Get { id } => client.get_project(&id).await,
            ProjectCommands::Save {
                id,
                name,
                canvas,
                canvas_file,
                preview_file,
            } => {
                let canvas_json = read_canvas(canvas, canvas_file.as_deref())?;
                let preview = preview_file
                    .as_deref()
                    .map(preview_data_url)
                    .transpose()?;

                client
                    .save_project(id.as_deref(), &name, &canvas_json, preview.as_deref())
                    .await
            }
            ProjectCommands::Delete { id } => client.delete_project(&id).await,
        },
    }
}
