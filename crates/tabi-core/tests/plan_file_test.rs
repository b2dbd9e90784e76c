//! Plan files on disk: TOML and JSON describe the same model.

use tabi_core::markdown::{generate_markdown, parse_markdown};
use tabi_core::plan::{PlanFileError, PlanFormat, load_plan, render_plan};
use tabi_test_utils::{full_standard_plan, okinawa_suggestion, write_file};

#[test]
fn toml_and_json_files_load_the_same_plan() {
    let dir = tempfile::TempDir::new().unwrap();
    let plan = full_standard_plan();

    let toml_path = write_file(
        dir.path(),
        "trip.toml",
        &render_plan(&plan, PlanFormat::Toml).unwrap(),
    );
    let json_path = write_file(
        dir.path(),
        "trip.json",
        &render_plan(&plan, PlanFormat::Json).unwrap(),
    );

    assert_eq!(load_plan(&toml_path).unwrap(), plan);
    assert_eq!(load_plan(&json_path).unwrap(), plan);
}

#[test]
fn hand_written_json_form_export() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "form.json",
        r#"{
  "general": {
    "departure": "札幌",
    "transport": {
      "outbound": {
        "type": "飛行機", "name": "ANA123",
        "depLocation": "羽田空港", "depTime": "08:00",
        "arrLocation": "新千歳空港", "arrTime": "09:30"
      }
    }
  },
  "days": [
    {
      "date": "2025-08-02",
      "area": "北海道",
      "city": "苫小牧市",
      "places": [{ "name": "苫小牧市美術博物館", "url": "https://example.com/museum" }],
      "doEat": ["ご当地名物を食べる"]
    }
  ],
  "isSuggestionMode": false
}"#,
    );

    let plan = load_plan(&path).unwrap();
    let markdown = generate_markdown(&plan);
    assert!(markdown.contains(
        "*   **往路の交通情報**：飛行機 ANA123（羽田空港 08:00発 → 新千歳空港 09:30着）"
    ));
    assert!(markdown.contains("### 1日目（2025/8/2・土）"));
}

#[test]
fn suggestion_plan_file_drives_generation() {
    let dir = tempfile::TempDir::new().unwrap();
    let plan = okinawa_suggestion();
    let path = write_file(
        dir.path(),
        "okinawa.toml",
        &render_plan(&plan, PlanFormat::Toml).unwrap(),
    );

    let loaded = load_plan(&path).unwrap();
    let parsed = parse_markdown(&generate_markdown(&loaded)).unwrap();
    assert_eq!(parsed, plan);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "trip.yaml", "general: {}\n");
    let err = load_plan(&path).unwrap_err();
    assert!(
        matches!(err, PlanFileError::UnsupportedExtension(_)),
        "got: {err}"
    );
}
