use std::sync::Arc;

use shared::domain::Project;
use thiserror::Error;
use tracing::{debug, warn};

use crate::KeyValueStore;

/// Key the project list has always been stored under.
pub const PROJECTS_KEY: &str = "crochet_projects";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode project snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write project snapshot under '{key}': {message}")]
    Write { key: String, message: String },
}

/// Mirrors the full project list into a single key of a [`KeyValueStore`].
///
/// Reads never fail: a missing, unreadable or malformed value loads as an
/// empty list. Writes overwrite the previous snapshot entirely.
#[derive(Clone)]
pub struct ProjectSnapshotStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProjectSnapshotStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(kv, PROJECTS_KEY)
    }

    pub fn with_key(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn load(&self) -> Vec<Project> {
        let raw = match self.kv.read_value(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no persisted project snapshot");
                return Vec::new();
            }
            Err(error) => {
                warn!(
                    key = %self.key,
                    error = %format!("{error:#}"),
                    "failed to read project snapshot; starting with no projects"
                );
                return Vec::new();
            }
        };

        match decode_snapshot(&raw) {
            Ok(projects) => {
                debug!(key = %self.key, count = projects.len(), "loaded project snapshot");
                projects
            }
            Err(error) => {
                warn!(
                    key = %self.key,
                    %error,
                    "persisted project snapshot is malformed; starting with no projects"
                );
                Vec::new()
            }
        }
    }

    pub async fn save(&self, projects: &[Project]) -> Result<(), SnapshotError> {
        let encoded = encode_snapshot(projects)?;
        self.kv
            .write_value(&self.key, &encoded)
            .await
            .map_err(|error| SnapshotError::Write {
                key: self.key.clone(),
                message: format!("{error:#}"),
            })?;
        debug!(key = %self.key, count = projects.len(), "saved project snapshot");
        Ok(())
    }
}

pub fn encode_snapshot(projects: &[Project]) -> Result<String, serde_json::Error> {
    serde_json::to_string(projects)
}

pub fn decode_snapshot(raw: &str) -> Result<Vec<Project>, serde_json::Error> {
    serde_json::from_str(raw)
}
