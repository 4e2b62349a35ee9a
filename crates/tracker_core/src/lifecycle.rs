//! Project creation and confirmed deletion.

use chrono::Utc;
use shared::{
    domain::{Pattern, Project, ProjectId, View},
    error::TrackerError,
    protocol::LifecycleNotice,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    generator::{GenerationError, GenerationRequest, PatternGenerator},
    store::{Committed, PersistenceWarning, ProjectStore},
};

/// Affirmative "are you sure" step required before a project is removed.
pub trait DeleteConfirmation {
    fn confirm(&self, project: &Project) -> bool;
}

impl<F> DeleteConfirmation for F
where
    F: Fn(&Project) -> bool,
{
    fn confirm(&self, project: &Project) -> bool {
        self(project)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    NotFound,
    Deleted {
        notice: Option<LifecycleNotice>,
        warning: Option<PersistenceWarning>,
    },
}

impl DeleteOutcome {
    pub fn was_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }
}

#[derive(Debug, Error)]
pub enum StartProjectError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Store(#[from] TrackerError),
}

/// Wraps `pattern` in a fresh project and puts it at the top of the store.
pub async fn start_project(
    store: &mut ProjectStore,
    pattern: Pattern,
) -> Result<Committed<Project>, TrackerError> {
    let now = Utc::now();
    let project = Project {
        id: ProjectId::generate(),
        pattern,
        current_step_index: 0,
        notes: String::new(),
        start_date: now,
        last_modified: now,
        counter: 0,
    };

    let committed = store.insert(project).await?;
    info!(
        project_id = %committed.value.id,
        title = %committed.value.pattern.title,
        steps = committed.value.pattern.step_count(),
        "started project"
    );
    Ok(committed)
}

pub async fn start_generated_project(
    store: &mut ProjectStore,
    generator: &dyn PatternGenerator,
    request: &GenerationRequest,
) -> Result<Committed<Project>, StartProjectError> {
    let pattern = generator.generate(request).await.map_err(|error| {
        warn!(%error, prompt = %request.prompt, "pattern generation failed");
        error
    })?;
    Ok(start_project(store, pattern).await?)
}

/// Removes a project once `confirmation` agrees.
///
/// When the removed project is `selected`, the outcome carries a notice
/// telling the caller to clear its selection and return home.
pub async fn delete_project(
    store: &mut ProjectStore,
    project_id: &ProjectId,
    confirmation: &dyn DeleteConfirmation,
    selected: Option<&ProjectId>,
) -> DeleteOutcome {
    let Some(project) = store.find(project_id) else {
        return DeleteOutcome::NotFound;
    };

    if !confirmation.confirm(project) {
        info!(project_id = %project_id, "project deletion cancelled");
        return DeleteOutcome::Cancelled;
    }

    let committed = store.delete(project_id).await;
    if !committed.value {
        return DeleteOutcome::NotFound;
    }

    let notice = (selected == Some(project_id)).then_some(LifecycleNotice::ClearSelection {
        navigate_to: View::Home,
    });
    DeleteOutcome::Deleted {
        notice,
        warning: committed.warning,
    }
}
