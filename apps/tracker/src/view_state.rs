use std::sync::Arc;

use anyhow::{Context, Result};
use shared::domain::ViewState;
use storage::KeyValueStore;
use tracing::warn;

pub const VIEW_STATE_KEY: &str = "tracker_view_state";

/// Selection and current view, kept next to the project snapshot so the
/// command line behaves like a long-lived screen between invocations.
#[derive(Clone)]
pub struct ViewStateStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ViewStateStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub async fn load(&self) -> ViewState {
        match self.kv.read_value(VIEW_STATE_KEY).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                warn!(%error, "view state is malformed; resetting to home");
                ViewState::default()
            }),
            Ok(None) => ViewState::default(),
            Err(error) => {
                warn!(error = %format!("{error:#}"), "failed to read view state; resetting to home");
                ViewState::default()
            }
        }
    }

    pub async fn save(&self, state: &ViewState) -> Result<()> {
        let encoded = serde_json::to_string(state).context("failed to encode view state")?;
        self.kv.write_value(VIEW_STATE_KEY, &encoded).await
    }
}
