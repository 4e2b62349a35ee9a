use std::{collections::HashSet, fmt};

use chrono::Utc;
use shared::{
    domain::{Project, ProjectId},
    error::TrackerError,
    protocol::{ProjectSummary, StoreEvent},
};
use storage::{ProjectSnapshotStore, SnapshotError};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// A mirror write that failed after the in-memory mutation was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceWarning {
    pub message: String,
}

impl fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "changes kept in memory only: {}", self.message)
    }
}

impl From<SnapshotError> for PersistenceWarning {
    fn from(value: SnapshotError) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

/// Result of a store mutation that was applied in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed<T> {
    pub value: T,
    pub warning: Option<PersistenceWarning>,
}

impl<T> Committed<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn is_persisted(&self) -> bool {
        self.warning.is_none()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Committed<U> {
        Committed {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

/// In-memory project collection, newest first, mirrored to durable storage
/// after every successful mutation.
pub struct ProjectStore {
    projects: Vec<Project>,
    snapshots: ProjectSnapshotStore,
    events: broadcast::Sender<StoreEvent>,
}

impl ProjectStore {
    pub async fn open(snapshots: ProjectSnapshotStore) -> Self {
        let loaded = snapshots.load().await;
        let loaded_count = loaded.len();

        let mut seen = HashSet::new();
        let projects: Vec<Project> = loaded
            .into_iter()
            .filter(|project| {
                let fresh = seen.insert(project.id.clone());
                if !fresh {
                    warn!(project_id = %project.id, "dropping duplicate project id from snapshot");
                }
                fresh
            })
            .collect();

        info!(
            key = snapshots.key(),
            count = projects.len(),
            dropped = loaded_count - projects.len(),
            "project store opened"
        );

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            projects,
            snapshots,
            events,
        }
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn summaries(&self) -> Vec<ProjectSummary> {
        self.projects.iter().map(ProjectSummary::from).collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn contains(&self, project_id: &ProjectId) -> bool {
        self.position(project_id).is_some()
    }

    pub fn find(&self, project_id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == project_id)
    }

    pub fn get(&self, project_id: &ProjectId) -> Result<&Project, TrackerError> {
        self.find(project_id)
            .ok_or_else(|| TrackerError::not_found(project_id))
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub async fn insert(&mut self, project: Project) -> Result<Committed<Project>, TrackerError> {
        if self.contains(&project.id) {
            error!(project_id = %project.id, "refusing to overwrite existing project id");
            return Err(TrackerError::duplicate_id(&project.id));
        }

        let project_id = project.id.clone();
        self.projects.insert(0, project.clone());
        debug!(project_id = %project_id, count = self.projects.len(), "inserted project");

        let warning = self.persist().await;
        self.emit(StoreEvent::Inserted { project_id });
        Ok(Committed {
            value: project,
            warning,
        })
    }

    /// Applies `mutator` to a copy of the project and stamps `last_modified`.
    ///
    /// The id, start date and pattern are restored after the mutator runs;
    /// they are fixed for the lifetime of a project.
    pub async fn update<F>(
        &mut self,
        project_id: &ProjectId,
        mutator: F,
    ) -> Result<Committed<Project>, TrackerError>
    where
        F: FnOnce(&mut Project),
    {
        let index = self
            .position(project_id)
            .ok_or_else(|| TrackerError::not_found(project_id))?;

        let current = &self.projects[index];
        let mut updated = current.clone();
        mutator(&mut updated);
        updated.id = current.id.clone();
        updated.start_date = current.start_date;
        if updated.pattern != current.pattern {
            warn!(project_id = %project_id, "ignoring attempted pattern edit on attached project");
            updated.pattern = current.pattern.clone();
        }
        updated.last_modified = Utc::now();

        self.projects[index] = updated.clone();
        debug!(project_id = %project_id, counter = updated.counter, "updated project");

        let warning = self.persist().await;
        self.emit(StoreEvent::Updated {
            project_id: updated.id.clone(),
            counter: updated.counter,
            last_modified: updated.last_modified,
        });
        Ok(Committed {
            value: updated,
            warning,
        })
    }

    pub async fn delete(&mut self, project_id: &ProjectId) -> Committed<bool> {
        let Some(index) = self.position(project_id) else {
            debug!(project_id = %project_id, "delete requested for unknown project");
            return Committed {
                value: false,
                warning: None,
            };
        };

        self.projects.remove(index);
        info!(project_id = %project_id, remaining = self.projects.len(), "deleted project");

        let warning = self.persist().await;
        self.emit(StoreEvent::Deleted {
            project_id: project_id.clone(),
        });
        Committed {
            value: true,
            warning,
        }
    }

    fn position(&self, project_id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| &p.id == project_id)
    }

    async fn persist(&self) -> Option<PersistenceWarning> {
        match self.snapshots.save(&self.projects).await {
            Ok(()) => None,
            Err(error) => {
                warn!(%error, "failed to persist project snapshot; in-memory state stays authoritative");
                let warning = PersistenceWarning::from(error);
                self.emit(StoreEvent::PersistenceFailed {
                    reason: warning.message.clone(),
                });
                Some(warning)
            }
        }
    }

    fn emit(&self, event: StoreEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }
}
