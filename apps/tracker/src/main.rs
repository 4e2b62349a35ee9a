use std::{io, sync::Arc};

use anyhow::Result;
use clap::Parser;
use storage::Storage;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod pattern_file;
mod render;
mod view_state;

use app::{confirm_on_stdin, TrackerApp};
use cli::Cli;
use config::{load_settings, load_settings_from, prepare_database_url};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path, |name| std::env::var(name).ok()),
        None => load_settings(),
    };
    if let Some(database_url) = &cli.database_url {
        settings.database_url = database_url.clone();
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let database_url = prepare_database_url(&settings.database_url)?;
    let storage = Storage::new(&database_url).await.map_err(|error| {
        error!(
            %database_url,
            error = %format!("{error:#}"),
            "failed to open SQLite database; verify parent directory exists and permissions are correct"
        );
        error
    })?;

    let mut app = TrackerApp::open(Arc::new(storage.clone()), &settings.projects_key).await;
    let mut stdout = io::stdout().lock();
    let result = app.execute(cli.command, &mut stdout, &confirm_on_stdin).await;
    storage.close().await;
    result
}
