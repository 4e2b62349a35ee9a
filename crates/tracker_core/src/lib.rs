//! Project progress engine: the project store, counter handling and the
//! project lifecycle built on top of `storage` snapshots.

pub mod generator;
pub mod lifecycle;
pub mod progress;
pub mod store;

use std::sync::Arc;

use storage::{KeyValueStore, ProjectSnapshotStore};

pub use generator::{GenerationError, GenerationRequest, MissingPatternGenerator, PatternGenerator};
pub use lifecycle::{
    delete_project, start_generated_project, start_project, DeleteConfirmation, DeleteOutcome,
    StartProjectError,
};
pub use progress::{
    current_step, decrement, increment, is_finished, progress_summary, set_counter, set_notes,
    step_overview, step_status, ProgressSummary, StepView,
};
pub use store::{Committed, PersistenceWarning, ProjectStore};

/// Opens the project store backed by `kv` under the default snapshot key.
pub async fn open_project_store(kv: Arc<dyn KeyValueStore>) -> ProjectStore {
    ProjectStore::open(ProjectSnapshotStore::new(kv)).await
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
