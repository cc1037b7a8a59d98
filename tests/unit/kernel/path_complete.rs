use super::*;
use std::fs::{self, File};
use tempfile::tempdir;

fn fixture() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("alpha.txt")).unwrap();
    fs::create_dir(dir.path().join("alpine")).unwrap();
    File::create(dir.path().join("beta.md")).unwrap();
    File::create(dir.path().join(".secret")).unwrap();
    dir
}

fn base(dir: &tempfile::TempDir) -> String {
    format!("{}/", dir.path().display())
}

#[test]
fn test_candidates_filter_by_prefix_and_sort() {
    let dir = fixture();
    let found = candidates(&format!("{}al", base(&dir)));
    let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["alpha.txt", "alpine"]);
    assert!(found[1].is_dir);
}

#[test]
fn test_hidden_entries_need_dot_prefix() {
    let dir = fixture();
    assert_eq!(candidates(&base(&dir)).len(), 3);
    assert_eq!(candidates(&format!("{}.", base(&dir))).len(), 1);
}

#[test]
fn test_complete_extends_to_common_prefix() {
    let dir = fixture();
    let root = base(&dir);
    assert_eq!(complete(&format!("{root}al")), Some(format!("{root}alp")));
}

#[test]
fn test_complete_unique_directory_gets_separator() {
    let dir = fixture();
    let root = base(&dir);
    assert_eq!(complete(&format!("{root}alpi")), Some(format!("{root}alpine/")));
}

#[test]
fn test_complete_without_progress_returns_none() {
    let dir = fixture();
    let root = base(&dir);
    assert_eq!(complete(&format!("{root}alp")), None);
    assert_eq!(complete(&format!("{root}zzz")), None);
    assert_eq!(complete(&format!("{root}beta.md")), None);
}
