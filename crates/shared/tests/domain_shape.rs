use shared::{
    domain::{Difficulty, Project, ProjectId, StepStatus, View, ViewState},
    glossary::{lookup_stitch, STITCH_GLOSSARY},
    protocol::{LifecycleNotice, ProjectSummary},
};

const LEGACY_PROJECT: &str = r#"{
  "id": "k3j4h5g6f",
  "pattern": {
    "id": "pat-1",
    "title": "Chunky Beanie",
    "difficulty": "Easy",
    "materials": ["Bulky yarn, 120 yds", "Yarn needle"],
    "abbreviations": {"ch": "chain", "hdc": "half double crochet"},
    "instructions": [
      {"roundOrRow": "Round 1", "step": "Mr, 8 hdc in ring."},
      {"roundOrRow": "Round 2", "step": "2 hdc in each st around."}
    ],
    "description": "A quick winter hat.",
    "category": "Hats",
    "hookSize": "6.5mm (K)"
  },
  "currentStepIndex": 0,
  "notes": "",
  "startDate": "2024-05-01T10:00:00.000Z",
  "lastModified": "2024-05-02T08:30:15.250Z",
  "counter": 1
}"#;

#[test]
fn reads_project_written_by_the_web_app() {
    let project: Project = serde_json::from_str(LEGACY_PROJECT).expect("legacy project");
    assert_eq!(project.id, ProjectId::from("k3j4h5g6f"));
    assert_eq!(project.pattern.difficulty, Difficulty::Easy);
    assert_eq!(project.pattern.hook_size, "6.5mm (K)");
    assert_eq!(project.pattern.instructions[1].round_or_row, "Round 2");
    assert_eq!(project.pattern.abbreviation("hdc"), Some("half double crochet"));
    assert_eq!(project.counter, 1);
    assert_eq!(project.current_step_index, 0);
    assert!(project.last_modified > project.start_date);
}

#[test]
fn writes_camel_case_fields_and_integer_counter() {
    let project: Project = serde_json::from_str(LEGACY_PROJECT).expect("legacy project");
    let value = serde_json::to_value(&project).expect("encode");

    assert!(value["counter"].is_u64());
    assert!(value["currentStepIndex"].is_u64());
    assert!(value["startDate"].is_string());
    assert!(value["lastModified"].is_string());
    assert_eq!(value["pattern"]["hookSize"], "6.5mm (K)");
    assert_eq!(value["pattern"]["instructions"][0]["roundOrRow"], "Round 1");
    assert_eq!(value["pattern"]["abbreviations"]["ch"], "chain");
}

#[test]
fn rejects_negative_counter_in_persisted_data() {
    let tampered = LEGACY_PROJECT.replace("\"counter\": 1", "\"counter\": -1");
    assert!(serde_json::from_str::<Project>(&tampered).is_err());
}

#[test]
fn generated_project_ids_are_distinct() {
    let a = ProjectId::generate();
    let b = ProjectId::generate();
    assert_ne!(a, b);
    assert_eq!(a.as_str().len(), 32);
}

#[test]
fn summary_reflects_listing_fields() {
    let project: Project = serde_json::from_str(LEGACY_PROJECT).expect("legacy project");
    let summary = ProjectSummary::from(&project);
    assert_eq!(summary.title, "Chunky Beanie");
    assert_eq!(summary.category, "Hats");
    assert_eq!(summary.counter, 1);
    assert_eq!(summary.step_count, 2);
}

#[test]
fn view_state_tracks_opened_project() {
    let mut state = ViewState::default();
    assert_eq!(state.current_view, View::Home);

    let id = ProjectId::from("abc");
    state.open_project(id.clone());
    assert_eq!(state.current_view, View::Project);
    assert!(state.is_selected(&id));
    assert!(!state.is_selected(&ProjectId::from("other")));
}

#[test]
fn step_status_and_notice_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&StepStatus::Current).expect("encode"),
        "\"current\""
    );
    let notice = LifecycleNotice::ClearSelection {
        navigate_to: View::Home,
    };
    assert_eq!(
        serde_json::to_value(notice).expect("encode"),
        serde_json::json!({"type": "clear_selection", "navigate_to": "home"})
    );
}

#[test]
fn glossary_lookup_matches_abbreviation() {
    assert_eq!(STITCH_GLOSSARY.len(), 9);
    let entry = lookup_stitch("SL ST").expect("slip stitch");
    assert_eq!(entry.name, "Slip Stitch (sl st)");
    assert_eq!(lookup_stitch("dc").map(|e| e.name), Some("Double Crochet (dc)"));
    assert!(lookup_stitch("bobble").is_none());
    assert!(lookup_stitch("  ").is_none());
}
