use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::domain::Pattern;
use tracker_core::{GenerationError, GenerationRequest, PatternGenerator};

/// Reads a pattern previously produced by a generation service from disk.
pub struct PatternFile {
    path: PathBuf,
}

impl PatternFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PatternGenerator for PatternFile {
    async fn generate(&self, _request: &GenerationRequest) -> Result<Pattern, GenerationError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|error| {
            GenerationError::Failed(format!("failed to read {}: {error}", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|error| {
            GenerationError::Malformed(format!("{}: {error}", self.path.display()))
        })
    }
}
