use std::fs;

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use fileman::{BaseDir, FileError, ScopedFileManager};

// Helper to build a manager scoped onto a fresh scratch directory. The
// scratch directory lives under the system temp directory, so it can be
// reached with `BaseDir::Temp` plus its name as the subdirectory.
fn scoped_temp() -> (TempDir, ScopedFileManager) {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let name = dir.path().file_name().unwrap().to_str().unwrap().to_string();
    let manager = ScopedFileManager::with_base(BaseDir::Temp, &name).unwrap();
    (dir, manager)
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Settings {
    theme: String,
    limits: Limits,
    recent: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Limits {
    max_entries: u32,
    max_bytes: u64,
}

#[test]
fn set_base_points_at_the_resolved_directory() {
    let (dir, manager) = scoped_temp();
    assert_eq!(manager.base_path(), dir.path());
}

#[test]
fn set_base_resolves_a_subdirectory() {
    let (dir, mut manager) = scoped_temp();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let name = dir.path().file_name().unwrap().to_str().unwrap();
    manager
        .set_base(BaseDir::Temp, &format!("{name}/nested"))
        .unwrap();

    assert_eq!(manager.base_path(), dir.path().join("nested"));
}

#[test]
fn failed_set_base_keeps_the_previous_base() {
    let (dir, mut manager) = scoped_temp();

    let err = manager
        .set_base(BaseDir::Temp, "fileman-test-no-such-directory")
        .unwrap_err();

    assert!(matches!(err, FileError::BadDirectory(_)));
    assert_eq!(manager.base_path(), dir.path());
}

#[test]
fn save_then_load_round_trips_strings() {
    let (_dir, manager) = scoped_temp();

    assert!(manager.save("note.txt", "two\nlines"));
    assert_eq!(manager.load_string("note.txt").unwrap(), "two\nlines");
}

#[test]
fn save_then_load_round_trips_bytes() {
    let (_dir, manager) = scoped_temp();
    let payload = [0u8, 159, 146, 150, 255];

    assert!(manager.save("blob.bin", payload));
    assert_eq!(manager.load_bytes("blob.bin").unwrap(), payload);
}

#[test]
fn save_object_then_load_object_round_trips() {
    let (_dir, manager) = scoped_temp();
    let settings = Settings {
        theme: "dark".into(),
        limits: Limits {
            max_entries: 64,
            max_bytes: 1 << 20,
        },
        recent: vec!["a.txt".into(), "b.txt".into()],
    };

    assert!(manager.save_object("settings.json", &settings));

    let loaded: Settings = manager.load_object("settings.json").unwrap();
    assert_eq!(loaded, settings);

    // The persisted form is readable, pretty-printed JSON.
    let raw = manager.load_string("settings.json").unwrap();
    assert!(raw.contains("\n"));
}

#[test]
fn load_object_with_mismatched_schema_is_none() {
    let (_dir, manager) = scoped_temp();
    assert!(manager.save("settings.json", "{\"unexpected\": true}"));

    let loaded: Option<Settings> = manager.load_object("settings.json");
    assert!(loaded.is_none());
}

#[test]
fn load_string_rejects_invalid_utf8() {
    let (_dir, manager) = scoped_temp();
    assert!(manager.save("raw.bin", [0xC3u8, 0x28]));

    assert!(manager.load_string("raw.bin").is_none());
    assert!(matches!(
        manager.try_load_string("raw.bin").unwrap_err(),
        FileError::Encoding(_)
    ));

    // The byte-level view of the same file is intact.
    assert_eq!(manager.load_bytes("raw.bin").unwrap(), [0xC3, 0x28]);
}

#[test]
fn append_requires_an_existing_file() {
    let (dir, manager) = scoped_temp();

    assert!(!manager.append("log.txt", "entry\n"));
    assert!(!dir.path().join("log.txt").exists());
    assert!(matches!(
        manager.try_append("log.txt", "entry\n").unwrap_err(),
        FileError::NotFound(_)
    ));
}

#[test]
fn append_extends_an_existing_file() {
    let (_dir, manager) = scoped_temp();

    assert!(manager.save("log.txt", "first\n"));
    assert!(manager.append("log.txt", "second\n"));
    assert_eq!(manager.load_string("log.txt").unwrap(), "first\nsecond\n");
}

#[test]
fn delete_on_a_missing_file_changes_nothing() {
    let (dir, manager) = scoped_temp();

    assert!(!manager.delete("ghost.txt"));

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().flatten().collect();
    assert!(entries.is_empty());
}

#[test]
fn delete_removes_the_file() {
    let (dir, manager) = scoped_temp();

    assert!(manager.save("gone.txt", "x"));
    assert!(manager.delete("gone.txt"));
    assert!(!dir.path().join("gone.txt").exists());
}

#[test]
fn list_files_filters_by_extension() {
    let (_dir, manager) = scoped_temp();

    assert!(manager.folder_exists("docs", true));
    assert!(manager.save("docs/a.txt", ""));
    assert!(manager.save("docs/b.md", ""));
    assert!(manager.save("docs/c.txt", ""));

    let mut filtered = manager.list_files("docs", Some("txt")).unwrap();
    filtered.sort();
    assert_eq!(filtered, ["a.txt", "c.txt"]);

    let all = manager.list_files("docs", None).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn list_files_on_a_missing_folder_is_none() {
    let (_dir, manager) = scoped_temp();
    assert!(manager.list_files("nowhere", None).is_none());
}

#[test]
fn folder_exists_creates_on_demand() {
    let (dir, manager) = scoped_temp();

    assert!(!manager.folder_exists("cache/images", false));
    assert!(manager.folder_exists("cache/images", true));
    assert!(manager.folder_exists("cache/images", false));
    assert!(dir.path().join("cache/images").is_dir());
}

#[test]
fn file_exists_is_false_for_directories() {
    let (_dir, manager) = scoped_temp();

    assert!(manager.folder_exists("subdir", true));
    assert!(!manager.file_exists("subdir"));
    assert!(matches!(
        manager.check_file("subdir").unwrap_err(),
        FileError::IsADirectory(_)
    ));
    assert!(matches!(
        manager.check_file("absent").unwrap_err(),
        FileError::NotFound(_)
    ));
}

#[test]
fn replace_moves_content_and_removes_the_source() {
    let (dir, manager) = scoped_temp();
    let destination = dir.path().join("target.cfg");

    fs::write(&destination, "previous").unwrap();
    assert!(manager.save("incoming.cfg", "fresh"));

    assert!(manager.replace("incoming.cfg", &destination));

    assert_eq!(fs::read_to_string(&destination).unwrap(), "fresh");
    assert!(!dir.path().join("incoming.cfg").exists());
}

#[test]
fn replace_with_a_missing_source_leaves_the_destination() {
    let (dir, manager) = scoped_temp();
    let destination = dir.path().join("target.cfg");

    fs::write(&destination, "previous").unwrap();

    assert!(!manager.replace("absent.cfg", &destination));
    assert_eq!(fs::read_to_string(&destination).unwrap(), "previous");
}

#[test]
fn free_space_reports_a_nonzero_figure() {
    let (dir, _manager) = scoped_temp();

    assert!(ScopedFileManager::try_free_space(dir.path()).unwrap() > 0);
    assert!(ScopedFileManager::free_space(dir.path()) > 0);
}

#[test]
fn free_space_on_a_missing_path_is_zero() {
    let (dir, _manager) = scoped_temp();
    let missing = dir.path().join("no-such-volume");

    assert_eq!(ScopedFileManager::free_space(&missing), 0);
    assert!(ScopedFileManager::try_free_space(&missing).is_err());
}
