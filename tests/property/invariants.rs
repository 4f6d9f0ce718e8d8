//! Property-based tests for namespace invariants

use labeltree::error::NamespaceError;
use labeltree::namespace::{RecencyList, RECENT_CAPACITY};
use labeltree::Namespace;
use proptest::prelude::*;
use std::collections::HashSet;

fn lowercase_set(names: &[String]) -> HashSet<String> {
    names.iter().map(|n| n.to_lowercase()).collect()
}

/// Recency lists never exceed capacity, hold no duplicates and put the last touch first.
#[test]
fn test_recency_list_bounded_and_deduplicated() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(0u8..20, 0..60), |touches| {
            let mut list = RecencyList::new();
            for item in &touches {
                list.touch(*item);
            }

            let items: Vec<u8> = list.iter().collect();
            prop_assert!(items.len() <= RECENT_CAPACITY);
            let unique: HashSet<u8> = items.iter().copied().collect();
            prop_assert_eq!(unique.len(), items.len());
            if let Some(last) = touches.last() {
                prop_assert_eq!(items.first(), Some(last));
            }

            // Expected order: distinct items by most recent touch.
            let mut expected = Vec::new();
            for item in touches.iter().rev() {
                if !expected.contains(item) {
                    expected.push(*item);
                }
            }
            expected.truncate(RECENT_CAPACITY);
            prop_assert_eq!(items, expected);
            Ok(())
        })
        .unwrap();
}

/// Sibling names stay unique ignoring case, whatever sequence of creates is attempted.
#[test]
fn test_sibling_names_unique_ignoring_case() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(("[a-cA-C]{1,2}", any::<bool>()), 1..40),
            |creates| {
                let mut ns = Namespace::default();
                for (name, as_folder) in &creates {
                    let result = if *as_folder {
                        ns.create_folder(name).map(|_| ())
                    } else {
                        ns.create_file(name, "/p").map(|_| ())
                    };
                    if let Err(e) = result {
                        prop_assert!(matches!(e, NamespaceError::NameTaken(_)));
                    }
                }

                let folders = ns.subfolder_names();
                let files = ns.subfile_names();
                prop_assert_eq!(lowercase_set(&folders).len(), folders.len());
                prop_assert_eq!(lowercase_set(&files).len(), files.len());
                Ok(())
            },
        )
        .unwrap();
}

/// A file carries a label exactly when the label's view lists it.
#[test]
fn test_label_membership_is_symmetric() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec((0usize..4, 0usize..3, any::<bool>()), 0..40),
            |ops| {
                let files = ["f0", "f1", "f2", "f3"];
                let labels = ["L0", "L1", "L2"];
                let mut ns = Namespace::default();
                for file in files {
                    ns.create_file(file, "/p").unwrap();
                }
                for label in labels {
                    ns.create_label(label).unwrap();
                }
                for (file, label, attach) in &ops {
                    if *attach {
                        ns.label_file(files[*file], labels[*label]).unwrap();
                    } else {
                        ns.unlabel_file(files[*file], labels[*label]).unwrap();
                    }
                }

                for label in labels {
                    ns.open_root_folder();
                    let carriers: Vec<String> = files
                        .iter()
                        .filter(|file| {
                            ns.labels_of_file(file)
                                .map(|names| names.iter().any(|n| n == label))
                                .unwrap_or(false)
                        })
                        .map(|file| file.to_string())
                        .collect();
                    ns.open_label(label).unwrap();
                    prop_assert_eq!(ns.subfile_names(), carriers);
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Export then restore reproduces the same snapshot.
#[test]
fn test_export_restore_round_trip() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec("[a-d]{1,3}", 0..6),
                prop::collection::vec("[a-d]{1,3}", 0..6),
                prop::collection::vec("[A-C]", 0..3),
                any::<bool>(),
            ),
            |(folders, files, labels, tracking)| {
                let mut ns = Namespace::default();
                for label in &labels {
                    let _ = ns.create_label(label);
                }
                for folder in &folders {
                    let _ = ns.create_folder(folder);
                }
                for (i, file) in files.iter().enumerate() {
                    if ns.create_file(file, &format!("/{}", i)).is_ok() {
                        if let Some(label) = labels.get(i % labels.len().max(1)) {
                            ns.label_file(file, label).unwrap();
                        }
                    }
                }
                if let Some(first) = ns.subfolder_names().first().cloned() {
                    ns.open_folder(&first).unwrap();
                }
                ns.set_tracking_enabled(tracking);

                let mut original = ns.export();
                let restored = Namespace::restore(&original).unwrap();
                let mut again = restored.export();
                original.saved_at = None;
                again.saved_at = None;
                prop_assert_eq!(again, original);
                Ok(())
            },
        )
        .unwrap();
}
