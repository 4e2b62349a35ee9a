//! Counter handling and per-step status derived from a project's counter.
//!
//! Steps before the counter are complete, the step at the counter is current,
//! and everything after is upcoming. The counter may run past the end of the
//! instruction list; status stays computable for any index.

use serde::Serialize;
use shared::{
    domain::{InstructionStep, Project, ProjectId, StepStatus},
    error::TrackerError,
};
use tracing::info;

use crate::store::{Committed, ProjectStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepView<'a> {
    pub index: usize,
    pub step: &'a InstructionStep,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

pub fn step_status(project: &Project, step_index: usize) -> StepStatus {
    let counter = project.counter_index();
    if step_index < counter {
        StepStatus::Complete
    } else if step_index == counter {
        StepStatus::Current
    } else {
        StepStatus::Upcoming
    }
}

pub fn step_overview(project: &Project) -> Vec<StepView<'_>> {
    project
        .pattern
        .instructions
        .iter()
        .enumerate()
        .map(|(index, step)| StepView {
            index,
            step,
            status: step_status(project, index),
        })
        .collect()
}

pub fn current_step(project: &Project) -> Option<&InstructionStep> {
    project.pattern.step(project.counter_index())
}

pub fn is_finished(project: &Project) -> bool {
    project.counter_index() >= project.pattern.step_count()
}

pub fn progress_summary(project: &Project) -> ProgressSummary {
    let total = project.pattern.step_count();
    let completed = project.counter_index().min(total);
    ProgressSummary {
        completed,
        total,
        remaining: total - completed,
        is_finished: is_finished(project),
    }
}

/// Accepts any non-negative counter value that fits the stored width.
pub fn validate_counter(value: i64) -> Result<u32, TrackerError> {
    if value < 0 {
        return Err(TrackerError::invalid_argument(format!(
            "counter cannot be negative (got {value})"
        )));
    }
    u32::try_from(value).map_err(|_| {
        TrackerError::invalid_argument(format!("counter {value} exceeds {}", u32::MAX))
    })
}

pub async fn set_counter(
    store: &mut ProjectStore,
    project_id: &ProjectId,
    value: i64,
) -> Result<Committed<Project>, TrackerError> {
    let counter = validate_counter(value)?;
    apply_counter(store, project_id, counter).await
}

pub async fn increment(
    store: &mut ProjectStore,
    project_id: &ProjectId,
) -> Result<Committed<Project>, TrackerError> {
    let current = store.get(project_id)?.counter;
    let next = current
        .checked_add(1)
        .ok_or_else(|| TrackerError::invalid_argument("counter is already at its maximum"))?;
    apply_counter(store, project_id, next).await
}

pub async fn decrement(
    store: &mut ProjectStore,
    project_id: &ProjectId,
) -> Result<Committed<Project>, TrackerError> {
    let current = store.get(project_id)?.counter;
    let Some(next) = current.checked_sub(1) else {
        return Err(TrackerError::invalid_argument(
            "counter is already at zero",
        ));
    };
    apply_counter(store, project_id, next).await
}

pub async fn set_notes(
    store: &mut ProjectStore,
    project_id: &ProjectId,
    notes: impl Into<String>,
) -> Result<Committed<Project>, TrackerError> {
    let notes = notes.into();
    store
        .update(project_id, move |project| project.notes = notes)
        .await
}

async fn apply_counter(
    store: &mut ProjectStore,
    project_id: &ProjectId,
    counter: u32,
) -> Result<Committed<Project>, TrackerError> {
    let committed = store
        .update(project_id, |project| {
            project.counter = counter;
            project.current_step_index = counter;
        })
        .await?;
    info!(project_id = %project_id, counter, "counter updated");
    Ok(committed)
}
