use modsel_util::fs::{ensure_dir, ensure_parent_dir};
use tempfile::TempDir;

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("x").join("y").join("z");
    assert!(!deep.exists());
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
}

#[test]
fn test_ensure_dir_idempotent() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("already");
    std::fs::create_dir(&dir).unwrap();
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn test_ensure_parent_dir_creates_parent_only() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("out").join("mvs.json");
    ensure_parent_dir(&file).unwrap();
    assert!(tmp.path().join("out").is_dir());
    assert!(!file.exists());
}

#[test]
fn test_ensure_parent_dir_bare_file_name() {
    ensure_parent_dir(std::path::Path::new("mvs.json")).unwrap();
}
