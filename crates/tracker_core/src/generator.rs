use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::domain::{Difficulty, Pattern};
use thiserror::Error;

/// Parameters handed to a pattern generation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("pattern generator unavailable: {0}")]
    Unavailable(String),
    #[error("pattern generation failed: {0}")]
    Failed(String),
    #[error("generated pattern is malformed: {0}")]
    Malformed(String),
}

/// Produces a finished pattern. The engine uses the result opaquely.
#[async_trait]
pub trait PatternGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Pattern, GenerationError>;
}

pub struct MissingPatternGenerator;

#[async_trait]
impl PatternGenerator for MissingPatternGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Pattern, GenerationError> {
        Err(GenerationError::Unavailable(format!(
            "no pattern generator configured for prompt '{}'",
            request.prompt
        )))
    }
}
