use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List your projects, most recently updated first
    List,
    /// Get a project by ID
    Get {
        id: String,
    },
    /// Create a project, or update one with --id
    Save {
        /// Existing project to update
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        name: String,

        /// Canvas JSON text
        #[arg(long, conflicts_with = "canvas_file", required_unless_present = "canvas_file")]
        canvas: Option<String>,

        /// Read the canvas JSON from a file
        #[arg(long)]
        canvas_file: Option<PathBuf>,

        /// PNG, JPEG, WebP or GIF file to upload as the preview
        #[arg(long)]
        preview_file: Option<PathBuf>,
    },
    /// Delete a project
    Delete {
        id: String,
    },
}
