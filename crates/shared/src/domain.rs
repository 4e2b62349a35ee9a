use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

id_newtype!(PatternId);
id_newtype!(ProjectId);

impl ProjectId {
    /// Fresh random identifier (uuid v4, simple form).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Easy,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionStep {
    pub round_or_row: String,
    pub step: String,
}

impl InstructionStep {
    pub fn new(round_or_row: impl Into<String>, step: impl Into<String>) -> Self {
        Self {
            round_or_row: round_or_row.into(),
            step: step.into(),
        }
    }
}

/// A generated crochet pattern. Read-only once attached to a [`Project`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub id: PatternId,
    pub title: String,
    pub difficulty: Difficulty,
    pub materials: Vec<String>,
    pub abbreviations: BTreeMap<String, String>,
    pub instructions: Vec<InstructionStep>,
    pub description: String,
    pub category: String,
    pub hook_size: String,
}

impl Pattern {
    pub fn step(&self, index: usize) -> Option<&InstructionStep> {
        self.instructions.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.instructions.len()
    }

    pub fn abbreviation(&self, key: &str) -> Option<&str> {
        self.abbreviations.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub pattern: Pattern,
    pub current_step_index: u32,
    pub notes: String,
    pub start_date: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub counter: u32,
}

impl Project {
    /// Counter as a step index. Saturates on targets where `usize` is narrower.
    pub fn counter_index(&self) -> usize {
        usize::try_from(self.counter).unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    Generate,
    Project,
    Glossary,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub current_view: View,
    pub selected_project: Option<ProjectId>,
}

impl ViewState {
    pub fn open_project(&mut self, project_id: ProjectId) {
        self.selected_project = Some(project_id);
        self.current_view = View::Project;
    }

    pub fn is_selected(&self, project_id: &ProjectId) -> bool {
        self.selected_project.as_ref() == Some(project_id)
    }
}
