use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, Project, ProjectId, View};

/// Row shown in the home listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub title: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub counter: u32,
    pub step_count: usize,
    pub last_modified: DateTime<Utc>,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            project_id: project.id.clone(),
            title: project.pattern.title.clone(),
            category: project.pattern.category.clone(),
            difficulty: project.pattern.difficulty,
            counter: project.counter,
            step_count: project.pattern.step_count(),
            last_modified: project.last_modified,
        }
    }
}

/// Emitted by the project store after every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreEvent {
    Inserted {
        project_id: ProjectId,
    },
    Updated {
        project_id: ProjectId,
        counter: u32,
        last_modified: DateTime<Utc>,
    },
    Deleted {
        project_id: ProjectId,
    },
    PersistenceFailed {
        reason: String,
    },
}

/// Obligations the lifecycle manager hands back to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LifecycleNotice {
    ClearSelection { navigate_to: View },
}
