use std::fs;

use chrono::{Local, TimeZone};
use clipper_core::FinishedNote;
use clipper_engine::{ensure_output_dir, AtomicFileWriter};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn note(name: &str, body: &str) -> FinishedNote {
    FinishedNote {
        file_name: name.to_string(),
        extension: "md".to_string(),
        body: body.to_string(),
        category: "article".to_string(),
        created_at: Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    }
}

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn colliding_names_get_numeric_suffix() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write_note(&note("Article 2024", "one")).unwrap();
    let second = writer.write_note(&note("Article 2024", "two")).unwrap();
    let third = writer.write_note(&note("Article 2024", "three")).unwrap();

    assert_eq!(first.file_name().unwrap(), "Article 2024.md");
    assert_eq!(second.file_name().unwrap(), "Article 2024 1.md");
    assert_eq!(third.file_name().unwrap(), "Article 2024 2.md");
    assert_eq!(fs::read_to_string(&first).unwrap(), "one");
    assert_eq!(fs::read_to_string(&third).unwrap(), "three");
}

#[test]
fn note_name_is_sanitised() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());
    let path = writer.write_note(&note("What? A/B: [draft]", "x")).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(!name.contains(['?', '/', ':', '[', ']']), "{name}");
    assert!(name.ends_with(".md"));
}

#[test]
fn file_in_place_of_directory_is_an_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write_note(&note("doc", "data")).is_err());
    assert!(!file_path.with_file_name("doc.md").exists());
}
