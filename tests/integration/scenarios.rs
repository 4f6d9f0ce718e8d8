//! End-to-end namespace scenarios through the public library API.

use super::RecordingHost;
use labeltree::error::NamespaceError;
use labeltree::namespace::{NavState, RECENT_CAPACITY};
use labeltree::types::EntityKind;
use labeltree::Namespace;

#[test]
fn test_case_insensitive_folder_collision_reports_true_name() {
    let mut ns = Namespace::new("Root").unwrap();
    ns.create_folder("Education").unwrap();
    ns.open_folder("Education").unwrap();
    ns.create_folder("CPSC 210").unwrap();

    let result = ns.create_folder("cpsc 210");
    assert_eq!(result, Err(NamespaceError::NameTaken("CPSC 210".to_string())));
    assert_eq!(ns.subfolder_names(), vec!["CPSC 210".to_string()]);
}

#[test]
fn test_label_view_differentiates_same_named_files() {
    let mut ns = Namespace::default();
    ns.create_label("School").unwrap();
    ns.create_file("File Name", "/a/file").unwrap();
    ns.label_file("File Name", "School").unwrap();
    ns.create_folder("Hobbies").unwrap();
    ns.open_folder("Hobbies").unwrap();
    ns.create_file("File Name", "/b/file").unwrap();
    ns.label_file("File Name", "School").unwrap();

    ns.open_label("School").unwrap();

    assert_eq!(ns.nav_state(), NavState::AtLabelView);
    assert_eq!(
        ns.subfile_names(),
        vec!["File Name".to_string(), "File Name (1)".to_string()]
    );
    assert_eq!(ns.go_up_one_level(), Err(NamespaceError::NoParent));

    // The suffix is written to the file itself and is visible from its real folder.
    ns.open_root_folder();
    ns.open_folder("Hobbies").unwrap();
    assert_eq!(ns.subfile_names(), vec!["File Name (1)".to_string()]);
}

#[test]
fn test_file_recency_keeps_ten_most_recent() {
    let names: Vec<String> = (1..=11).map(|i| i.to_string()).collect();
    let paths: Vec<String> = names.iter().map(|n| format!("/files/{}", n)).collect();
    let host = RecordingHost::with_paths(paths.iter().map(String::as_str));
    let mut ns = Namespace::default();
    for (name, path) in names.iter().zip(&paths) {
        ns.create_file(name, path).unwrap();
    }
    for name in &names {
        ns.open_file(name, &host).unwrap();
    }

    let recent = ns.recent_file_names();
    assert_eq!(recent.len(), RECENT_CAPACITY);
    let expected: Vec<String> = (2..=11).rev().map(|i| i.to_string()).collect();
    assert_eq!(recent, expected);
    assert_eq!(host.opened().len(), 11);
}

#[test]
fn test_disabled_tracking_is_not_backfilled() {
    let mut ns = Namespace::default();
    for name in ["a", "b", "c", "d"] {
        ns.create_folder(name).unwrap();
    }
    ns.open_folder("a").unwrap();
    ns.open_root_folder();
    let before = ns.recent_folder_names();

    ns.set_tracking_enabled(false);
    for name in ["b", "c"] {
        ns.open_folder(name).unwrap();
        ns.go_up_one_level().unwrap();
    }
    assert_eq!(ns.recent_folder_names(), before);

    ns.set_tracking_enabled(true);
    ns.open_folder("d").unwrap();
    assert_eq!(
        ns.recent_folder_names(),
        vec!["d".to_string(), "a".to_string()]
    );
}

#[test]
fn test_rename_checks_name_taken_before_not_found() {
    let mut ns = Namespace::default();
    ns.create_file("File", "/file").unwrap();

    let result = ns.rename_file("ghost", "File");
    assert_eq!(result, Err(NamespaceError::NameTaken("File".to_string())));

    let result = ns.rename_file("ghost", "Other");
    assert_eq!(
        result,
        Err(NamespaceError::NotFound(EntityKind::File, "ghost".to_string()))
    );
}

#[test]
fn test_missing_path_is_not_recorded() {
    let host = RecordingHost::with_paths(["/present"]);
    let mut ns = Namespace::default();
    ns.create_file("gone", "/missing").unwrap();
    ns.create_file("here", "/present").unwrap();

    assert_eq!(
        ns.open_file("gone", &host),
        Err(NamespaceError::PathInvalid("/missing".to_string()))
    );
    ns.open_file("here", &host).unwrap();

    assert_eq!(ns.recent_file_names(), vec!["here".to_string()]);
    assert_eq!(host.opened(), vec!["/present".to_string()]);
}

#[test]
fn test_deleting_folder_cascades_to_labels_and_recents() {
    let host = RecordingHost::with_paths(["/deep"]);
    let mut ns = Namespace::default();
    ns.create_label("Work").unwrap();
    ns.create_folder("Projects").unwrap();
    ns.open_folder("Projects").unwrap();
    ns.create_folder("Old").unwrap();
    ns.open_folder("Old").unwrap();
    ns.create_file("deep", "/deep").unwrap();
    ns.label_file("deep", "Work").unwrap();
    ns.open_file("deep", &host).unwrap();
    ns.open_root_folder();

    ns.delete_folder("projects").unwrap();

    assert!(ns.subfolder_names().is_empty());
    assert!(ns.recent_folder_names().is_empty());
    assert!(ns.recent_file_names().is_empty());
    ns.open_label("Work").unwrap();
    assert!(ns.subfile_names().is_empty());
}

#[test]
fn test_label_view_rejects_structural_creates() {
    let mut ns = Namespace::default();
    ns.create_label("School").unwrap();
    ns.open_label("School").unwrap();

    assert_eq!(
        ns.create_folder("New"),
        Err(NamespaceError::ReadOnlyView("School".to_string()))
    );
    assert!(matches!(
        ns.create_file("new", "/new"),
        Err(NamespaceError::ReadOnlyView(_))
    ));
}

#[test]
fn test_recent_entries_can_be_reopened_by_name() {
    let host = RecordingHost::with_paths(["/cv.pdf"]);
    let mut ns = Namespace::default();
    ns.create_label("Work").unwrap();
    ns.create_folder("Jobs").unwrap();
    ns.open_folder("Jobs").unwrap();
    ns.create_file("cv", "/cv.pdf").unwrap();
    ns.label_file("cv", "Work").unwrap();
    ns.open_file("cv", &host).unwrap();
    ns.open_label("Work").unwrap();
    ns.open_root_folder();

    ns.open_recent_folder("JOBS").unwrap();
    assert_eq!(ns.current_folder_name(), "Jobs");

    ns.open_recent_label("work").unwrap();
    assert!(ns.is_in_label_view());
    assert_eq!(ns.subfile_names(), vec!["cv".to_string()]);

    ns.open_recent_file("cv", &host).unwrap();
    assert_eq!(host.opened(), vec!["/cv.pdf".to_string(), "/cv.pdf".to_string()]);

    assert!(matches!(
        ns.open_recent_folder("Nowhere"),
        Err(NamespaceError::NotFound(EntityKind::Folder, _))
    ));
}
