use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DECK: &str = r#"[
  {"title": "Intro", "content": ["What is photosynthesis?"], "notes": "Welcome the audience"},
  {"title": "Light", "content": ["Photons", "Chlorophyll"], "notes": ""},
  {"title": "Conclusion", "content": ["Recap"], "notes": "Thank the audience"}
]"#;

fn deckgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("deckgen").unwrap();
    cmd.current_dir(dir)
        .env_remove("API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn deck_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn titles(path: &Path) -> Vec<String> {
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    json.as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_themes_lists_presets() {
    let dir = tempfile::tempdir().unwrap();
    deckgen(dir.path())
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Professional"))
        .stdout(predicate::str::contains("Creative"))
        .stdout(predicate::str::contains("Minimalist"))
        .stdout(predicate::str::contains("Ocean"));
}

#[test]
fn test_show_prints_slides() {
    let (dir, path) = deck_file(DECK);
    deckgen(dir.path())
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] Intro"))
        .stdout(predicate::str::contains("- Chlorophyll"))
        .stdout(predicate::str::contains("notes: Thank the audience"));
}

#[test]
fn test_add_inserts_placeholder_after_index() {
    let (dir, path) = deck_file(DECK);
    deckgen(dir.path())
        .args(["add", "deck.json", "--after", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index 1"));

    assert_eq!(titles(&path), ["Intro", "New Slide", "Light", "Conclusion"]);
}

#[test]
fn test_delete_removes_slide() {
    let (dir, path) = deck_file(DECK);
    deckgen(dir.path())
        .args(["delete", "deck.json", "--index", "1"])
        .assert()
        .success();

    assert_eq!(titles(&path), ["Intro", "Conclusion"]);
}

#[test]
fn test_delete_refuses_last_slide() {
    let only = r#"[{"title": "Only", "content": [], "notes": ""}]"#;
    let (dir, path) = deck_file(only);
    deckgen(dir.path())
        .args(["delete", "deck.json", "--index", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot delete the last slide."));

    assert_eq!(fs::read_to_string(&path).unwrap(), only);
}

#[test]
fn test_delete_out_of_range_fails() {
    let (dir, path) = deck_file(DECK);
    deckgen(dir.path())
        .args(["delete", "deck.json", "--index", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert_eq!(fs::read_to_string(&path).unwrap(), DECK);
}

#[test]
fn test_edit_updates_fields() {
    let (dir, path) = deck_file(DECK);
    deckgen(dir.path())
        .args([
            "edit",
            "deck.json",
            "--index",
            "1",
            "--title",
            "Sunlight",
            "--content",
            "Photons\nWavelengths",
        ])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json[1]["title"], "Sunlight");
    assert_eq!(json[1]["content"], serde_json::json!(["Photons", "Wavelengths"]));
    assert_eq!(json[1]["notes"], "");
    assert_eq!(json[0]["title"], "Intro");
}

#[test]
fn test_export_pptx_default_name() {
    let (dir, _) = deck_file(DECK);
    deckgen(dir.path())
        .args(["export", "deck.json", "--theme", "ocean"])
        .assert()
        .success();

    let bytes = fs::read(dir.path().join("AI_Presentation.pptx")).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_print_html() {
    let (dir, _) = deck_file(DECK);
    deckgen(dir.path())
        .args(["export", "deck.json", "--format", "print", "-o", "out.html"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("out.html")).unwrap();
    assert_eq!(html.matches("class=\"slide-print\"").count(), 3);
    assert!(html.contains("What is photosynthesis?"));
}

#[test]
fn test_export_json_round_trips() {
    let (dir, path) = deck_file(DECK);
    deckgen(dir.path())
        .args(["export", "deck.json", "--format", "json"])
        .assert()
        .success();

    assert_eq!(titles(&dir.path().join("presentation.json")), titles(&path));
}

#[test]
fn test_export_unknown_theme_fails() {
    let (dir, _) = deck_file(DECK);
    deckgen(dir.path())
        .args(["export", "deck.json", "--theme", "Neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme: Neon"));
}

#[test]
fn test_generate_without_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    deckgen(dir.path())
        .args(["generate", "--topic", "Photosynthesis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API_KEY"));

    assert!(!dir.path().join("presentation.json").exists());
}

#[test]
fn test_generate_requires_topic_or_file() {
    let dir = tempfile::tempdir().unwrap();
    deckgen(dir.path())
        .env("API_KEY", "test-key")
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a topic or upload a file."));
}

#[test]
fn test_empty_deck_is_rejected() {
    let (dir, path) = deck_file("[]");
    deckgen(dir.path())
        .args(["export", "deck.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no slides"));
    assert!(!dir.path().join("AI_Presentation.pptx").exists());

    deckgen(dir.path())
        .args(["add", "deck.json"])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}
