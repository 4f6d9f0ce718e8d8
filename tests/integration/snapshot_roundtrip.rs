//! Snapshot persistence through the JSON store.

use super::RecordingHost;
use labeltree::snapshot::NamespaceSnapshot;
use labeltree::store::{JsonSnapshotStore, SnapshotStore};
use labeltree::Namespace;
use tempfile::TempDir;

fn populated(host: &RecordingHost) -> Namespace {
    let mut ns = Namespace::new("Home").unwrap();
    ns.create_label("School").unwrap();
    ns.create_label("Work").unwrap();
    ns.create_folder("Education").unwrap();
    ns.open_folder("Education").unwrap();
    ns.create_folder("CPSC 210").unwrap();
    ns.open_folder("CPSC 210").unwrap();
    ns.create_file("syllabus", "/docs/syllabus.pdf").unwrap();
    ns.label_file("syllabus", "School").unwrap();
    ns.open_file("syllabus", host).unwrap();
    ns.open_root_folder();
    ns.create_file("cv", "/docs/cv.pdf").unwrap();
    ns.label_file("cv", "Work").unwrap();
    ns.label_file("cv", "School").unwrap();
    ns.open_file("cv", host).unwrap();
    ns.open_label("Work").unwrap();
    ns.open_root_folder();
    ns.open_folder("Education").unwrap();
    ns
}

#[test]
fn test_store_round_trip_preserves_namespace() {
    let temp_dir = TempDir::new().unwrap();
    let host = RecordingHost::with_paths(["/docs/syllabus.pdf", "/docs/cv.pdf"]);
    let ns = populated(&host);
    let store = JsonSnapshotStore::new(temp_dir.path().join("ns.json"));

    store.save_namespace(&ns).unwrap();
    let snapshot = store.load().unwrap().unwrap();
    let restored = Namespace::restore(&snapshot).unwrap();

    assert_eq!(restored.current_path(), vec!["Education".to_string()]);
    assert_eq!(restored.label_names(), ns.label_names());
    assert_eq!(restored.recent_file_names(), ns.recent_file_names());
    assert_eq!(restored.recent_folder_names(), ns.recent_folder_names());
    assert_eq!(restored.recent_label_names(), vec!["Work".to_string()]);

    let mut exported = restored.export();
    let mut original = ns.export();
    exported.saved_at = None;
    original.saved_at = None;
    assert_eq!(exported, original);
}

#[test]
fn test_snapshot_json_uses_camel_case_paths() {
    let temp_dir = TempDir::new().unwrap();
    let host = RecordingHost::with_paths(["/docs/syllabus.pdf", "/docs/cv.pdf"]);
    let store = JsonSnapshotStore::new(temp_dir.path().join("ns.json"));
    store.save_namespace(&populated(&host)).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["currentFolderPath"], serde_json::json!(["Education"]));
    assert_eq!(
        value["recentlyOpenedFilePaths"][0],
        serde_json::json!(["cv"])
    );
    assert_eq!(
        value["recentlyOpenedFilePaths"][1],
        serde_json::json!(["Education", "CPSC 210", "syllabus"])
    );
    assert_eq!(value["rootFolder"]["name"], "Home");
    assert_eq!(value["rootFolder"]["subfiles"][0]["filePath"], "/docs/cv.pdf");
}

#[test]
fn test_restore_tolerates_dangling_references() {
    let raw = r#"{
        "currentFolderPath": ["Missing"],
        "labels": [{"name": "School"}],
        "recentlyOpenedFilePaths": [["ghost"], ["notes"]],
        "recentlyOpenedFolderPaths": [["Nowhere"]],
        "recentlyOpenedLabels": [{"name": "Gone"}, {"name": "School"}],
        "rootFolder": {
            "name": "Root",
            "subfiles": [
                {"name": "notes", "filePath": "/notes.md", "labels": [{"name": "Extra"}]}
            ],
            "subfolders": []
        }
    }"#;
    let snapshot: NamespaceSnapshot = serde_json::from_str(raw).unwrap();
    assert!(snapshot.tracking_enabled, "tracking defaults to on");

    let ns = Namespace::restore(&snapshot).unwrap();
    assert!(ns.is_at_root());
    assert_eq!(ns.recent_file_names(), vec!["notes".to_string()]);
    assert!(ns.recent_folder_names().is_empty());
    assert_eq!(ns.recent_label_names(), vec!["School".to_string()]);
    assert_eq!(
        ns.label_names(),
        vec!["Extra".to_string(), "School".to_string()]
    );
    assert_eq!(ns.labels_of_file("notes").unwrap(), vec!["Extra".to_string()]);
}

#[test]
fn test_load_missing_snapshot_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonSnapshotStore::new(temp_dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_none());
}
