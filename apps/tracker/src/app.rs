use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::{anyhow, Result};
use shared::{
    domain::{Project, ProjectId, View, ViewState},
    error::TrackerError,
    protocol::LifecycleNotice,
};
use storage::{KeyValueStore, ProjectSnapshotStore};
use tracing::{info, warn};
use tracker_core::{
    current_step, decrement, delete_project, increment, set_counter, set_notes,
    start_generated_project, DeleteConfirmation, DeleteOutcome, GenerationRequest,
    PersistenceWarning, ProjectStore,
};

use crate::{
    cli::{Command, CounterAction},
    pattern_file::PatternFile,
    render::{render_glossary, render_list, render_project},
    view_state::ViewStateStore,
};

/// Asks on the terminal before a project is removed.
pub fn confirm_on_stdin(project: &Project) -> bool {
    eprint!(
        "Delete this project? \"{}\" [y/N] ",
        project.pattern.title
    );
    let _ = io::stderr().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn confirm_always(_: &Project) -> bool {
    true
}

/// The view layer: owns navigation state and drives the engine per command.
pub struct TrackerApp {
    store: ProjectStore,
    views: ViewStateStore,
    view: ViewState,
}

impl TrackerApp {
    pub async fn open(kv: Arc<dyn KeyValueStore>, projects_key: &str) -> Self {
        let store =
            ProjectStore::open(ProjectSnapshotStore::with_key(kv.clone(), projects_key)).await;
        let views = ViewStateStore::new(kv);
        let mut view = views.load().await;
        if let Some(selected) = &view.selected_project {
            if !store.contains(selected) {
                info!(project_id = %selected, "selected project no longer exists; returning home");
                view = ViewState::default();
            }
        }
        Self { store, views, view }
    }

    pub async fn execute(
        &mut self,
        command: Command,
        out: &mut dyn Write,
        prompt: &dyn DeleteConfirmation,
    ) -> Result<()> {
        match command {
            Command::List => {
                self.navigate(View::Home).await;
                render_list(&self.store.summaries(), out)?;
            }
            Command::Start { pattern } => {
                let source = PatternFile::new(pattern);
                let request =
                    GenerationRequest::new(format!("pattern file {}", source.path().display()));
                let committed = start_generated_project(&mut self.store, &source, &request).await?;
                report_warning(committed.warning.as_ref(), out)?;
                let project = committed.into_value();
                writeln!(
                    out,
                    "started {} ({})",
                    project.pattern.title, project.id
                )?;
                self.view.open_project(project.id);
                self.save_view().await;
            }
            Command::Show { project_id } => {
                let project_id = match project_id {
                    Some(id) => ProjectId::from(id),
                    None => self.view.selected_project.clone().ok_or_else(|| {
                        anyhow!("no project selected; pass a project id or run `tracker select <id>`")
                    })?,
                };
                render_project(self.store.get(&project_id)?, out)?;
                self.view.open_project(project_id);
                self.save_view().await;
            }
            Command::Counter { project_id, action } => {
                let project_id = ProjectId::from(project_id);
                let committed = match action {
                    CounterAction::Set { value } => {
                        set_counter(&mut self.store, &project_id, value).await?
                    }
                    CounterAction::Inc => increment(&mut self.store, &project_id).await?,
                    CounterAction::Dec => decrement(&mut self.store, &project_id).await?,
                };
                report_warning(committed.warning.as_ref(), out)?;
                let project = committed.into_value();
                writeln!(out, "{}: row {}", project.pattern.title, project.counter)?;
                match current_step(&project) {
                    Some(step) => writeln!(out, "  now on {}: {}", step.round_or_row, step.step)?,
                    None => writeln!(out, "  pattern complete")?,
                }
            }
            Command::Notes { project_id, text } => {
                let project_id = ProjectId::from(project_id);
                let committed = set_notes(&mut self.store, &project_id, text).await?;
                report_warning(committed.warning.as_ref(), out)?;
                writeln!(out, "notes saved for {project_id}")?;
            }
            Command::Select { project_id } => {
                let project_id = ProjectId::from(project_id);
                let title = self.store.get(&project_id)?.pattern.title.clone();
                writeln!(out, "selected {title} ({project_id})")?;
                self.view.open_project(project_id);
                self.save_view().await;
            }
            Command::Delete { project_id, yes } => {
                let project_id = ProjectId::from(project_id);
                let confirmation: &dyn DeleteConfirmation =
                    if yes { &confirm_always } else { prompt };
                let outcome = delete_project(
                    &mut self.store,
                    &project_id,
                    confirmation,
                    self.view.selected_project.as_ref(),
                )
                .await;
                match outcome {
                    DeleteOutcome::Cancelled => writeln!(out, "deletion cancelled")?,
                    DeleteOutcome::NotFound => {
                        return Err(TrackerError::not_found(&project_id).into());
                    }
                    DeleteOutcome::Deleted { notice, warning } => {
                        report_warning(warning.as_ref(), out)?;
                        writeln!(out, "deleted {project_id}")?;
                        if let Some(LifecycleNotice::ClearSelection { navigate_to }) = notice {
                            self.view.selected_project = None;
                            self.view.current_view = navigate_to;
                            self.save_view().await;
                        }
                    }
                }
            }
            Command::Glossary => {
                self.navigate(View::Glossary).await;
                render_glossary(out)?;
            }
            Command::Export => {
                writeln!(out, "{}", serde_json::to_string_pretty(self.store.list())?)?;
            }
        }
        Ok(())
    }

    async fn navigate(&mut self, view: View) {
        if self.view.current_view != view {
            self.view.current_view = view;
            self.save_view().await;
        }
    }

    async fn save_view(&self) {
        if let Err(error) = self.views.save(&self.view).await {
            warn!(error = %format!("{error:#}"), "failed to save view state");
        }
    }
}

fn report_warning(warning: Option<&PersistenceWarning>, out: &mut dyn Write) -> io::Result<()> {
    if let Some(warning) = warning {
        writeln!(out, "warning: {warning}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
