//! Directory walking and aggregation against real directory trees.
//!
//! Traversal order is OS-dependent, so assertions compare sets, never
//! sequences.

use fskit::fs::{self, walk};
use std::collections::HashSet;
use std::path::Path;
use tempfile::tempdir;

fn seed_tree(root: &Path) {
    fs::file::write(&root.join("a"), "a").unwrap();
    fs::dirs::create(&root.join("sub")).unwrap();
    fs::file::write(&root.join("sub").join("b"), "bb").unwrap();
    fs::dirs::create(&root.join("sub").join("deep")).unwrap();
    fs::file::write(&root.join("sub").join("deep").join("c"), "ccc").unwrap();
}

#[test]
fn recursive_and_shallow_listings() {
    let temp = tempdir().unwrap();
    seed_tree(temp.path());

    assert_eq!(walk::file_names(temp.path(), false), vec!["a"]);

    let deep: HashSet<_> = walk::file_names(temp.path(), true).into_iter().collect();
    assert_eq!(deep, HashSet::from(["a".into(), "b".into(), "c".into()]));

    let dirs: HashSet<_> = walk::subdirectory_names(temp.path(), true).into_iter().collect();
    assert_eq!(dirs, HashSet::from(["sub".into(), "deep".into()]));
}

#[test]
fn nonexistent_root_yields_empty_everything() {
    let ghost = Path::new("/nonexistent_fskit_it_root");

    assert!(walk::file_paths(ghost, true).is_empty());
    assert!(walk::details_for_all(ghost, true).unwrap().is_empty());
    assert!(walk::search_containing(ghost, "x", false, true).unwrap().is_empty());
    assert_eq!(walk::read_all(ghost, true).count(), 0);
}

#[test]
fn details_for_all_matches_per_file_details() {
    let temp = tempdir().unwrap();
    seed_tree(temp.path());

    let all = walk::details_for_all(temp.path(), true).unwrap();
    assert_eq!(all.len(), 3);

    for (path, snapshot) in &all {
        assert_eq!(snapshot, &fs::details(path).unwrap());
    }

    let a = &all[&temp.path().join("a")];
    assert_eq!(a.md5, "0cc175b9c0f1b6a831c399e269772661");
    assert_eq!(a.size, 1);
}

#[test]
fn read_all_can_stop_early() {
    let temp = tempdir().unwrap();
    seed_tree(temp.path());

    let first = walk::read_all(temp.path(), true).next().unwrap().unwrap();
    let (path, content) = first;
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn search_containing_keeps_only_hits() {
    let temp = tempdir().unwrap();
    fs::file::write(&temp.path().join("haystack.txt"), "needle needle").unwrap();
    fs::file::write(&temp.path().join("empty.txt"), "straw").unwrap();

    let literal = walk::search_containing(temp.path(), "needle", false, true).unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[&temp.path().join("haystack.txt")], vec!["needle", "needle"]);

    let regex = walk::search_containing(temp.path(), r"(need)le", true, true).unwrap();
    assert_eq!(regex[&temp.path().join("haystack.txt")], vec!["need", "need"]);
}

#[test]
fn matching_uses_glob_or_substring() {
    let temp = tempdir().unwrap();
    fs::file::write(&temp.path().join("report.md"), "").unwrap();
    fs::file::write(&temp.path().join("report-final.md"), "").unwrap();
    fs::file::write(&temp.path().join("data.csv"), "").unwrap();

    let globbed = walk::names_matching(temp.path(), "report*.md", true).unwrap();
    assert_eq!(globbed.len(), 2);

    let substring = walk::paths_matching(temp.path(), "final", true).unwrap();
    assert_eq!(substring, vec![temp.path().join("report-final.md")]);
}
