use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tracker", about = "Keep your place in crochet patterns")]
pub struct Cli {
    /// Overrides the database url from settings.
    #[arg(long, global = true)]
    pub database_url: Option<String>,
    /// Settings file to read instead of ./tracker.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List projects, newest first.
    List,
    /// Start a project from a generated pattern JSON file.
    Start {
        #[arg(long)]
        pattern: PathBuf,
    },
    /// Show a project; defaults to the selected one.
    Show { project_id: Option<String> },
    /// Change a project's row/round counter.
    Counter {
        project_id: String,
        #[command(subcommand)]
        action: CounterAction,
    },
    /// Replace a project's notes.
    Notes { project_id: String, text: String },
    /// Make a project the active one.
    Select { project_id: String },
    /// Delete a project after confirmation.
    Delete {
        project_id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Print the stitch glossary.
    Glossary,
    /// Print the stored project snapshot as JSON.
    Export,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Set {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Inc,
    Dec,
}
