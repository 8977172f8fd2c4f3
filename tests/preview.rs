use assert_fs::TempDir;
use assert_fs::prelude::*;
use file_falcon::prelude::*;
use std::path::PathBuf;

#[test]
fn preview_lists_relative_paths_without_touching_disk() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    src.child("b.mp4").touch().unwrap();
    src.child("a/clip.webm").touch().unwrap();
    src.child("notes.txt").touch().unwrap();

    let cfg = OperationConfig::for_category(
        src.path(),
        dst.path(),
        ExtensionCatalog::builtin(),
        "Video Basic",
        &[],
    )
    .unwrap();
    let mut log = LogCapture::new();
    let map = preview(&cfg, &mut log).unwrap();

    let files = map.get("Video Basic").expect("category key");
    assert_eq!(
        files,
        &vec![PathBuf::from("a").join("clip.webm"), PathBuf::from("b.mp4")]
    );
    assert!(!dst.path().join("Video Basic").exists(), "preview must not create folders");

    let infos: Vec<&str> = log.of_kind(LogKind::Info).collect();
    assert_eq!(infos.len(), 2);
    assert!(infos[1].starts_with("b.mp4 -> "));
    assert!(infos[1].ends_with("b.mp4"));
    assert!(log.of_kind(LogKind::Success).any(|m| m == "Found 2 files to copy."));
}

#[test]
fn preview_without_matches_is_empty_and_warns() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    src.child("readme.md").touch().unwrap();

    let cfg = OperationConfig::new(src.path(), dst.path(), "PDF", [".pdf"]).unwrap();
    let mut log = LogCapture::new();
    let map = preview(&cfg, &mut log).unwrap();

    assert!(map.is_empty());
    assert_eq!(log.count(LogKind::Warning), 1);
    assert_eq!(log.count(LogKind::Success), 0);
}

#[test]
fn preview_mentions_move_verb() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    src.child("a.db").touch().unwrap();

    let cfg = OperationConfig::new(src.path(), dst.path(), "Database", ["db"])
        .unwrap()
        .with_operation(OperationType::Move);
    let mut log = LogCapture::new();
    preview(&cfg, &mut log).unwrap();
    assert!(log.of_kind(LogKind::Success).any(|m| m == "Found 1 file to move."));
    assert!(src.child("a.db").path().exists());
}

#[cfg(unix)]
#[test]
fn unreadable_subfolder_is_a_warning() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    if unsafe { libc::geteuid() } == 0 {
        eprintln!("skipping: running as root");
        return;
    }

    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    src.child("ok.pdf").touch().unwrap();
    let locked = src.child("locked");
    locked.child("hidden.pdf").touch().unwrap();
    fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o000)).unwrap();

    let cfg = OperationConfig::new(src.path(), dst.path(), "PDF", [".pdf"]).unwrap();
    let mut log = LogCapture::new();
    let map = preview(&cfg, &mut log).unwrap();

    fs::set_permissions(locked.path(), fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(map["PDF"], vec![PathBuf::from("ok.pdf")]);
    assert!(log.of_kind(LogKind::Warning).any(|m| m.contains("locked")));
}

#[cfg(unix)]
#[test]
fn preview_lists_file_symlinks_and_warns_on_dangling() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    outside.child("real.pdf").touch().unwrap();
    std::os::unix::fs::symlink(outside.child("real.pdf").path(), src.path().join("link.pdf"))
        .unwrap();
    std::os::unix::fs::symlink(src.path().join("nowhere.pdf"), src.path().join("stale.pdf"))
        .unwrap();

    let cfg = OperationConfig::new(src.path(), dst.path(), "PDF", [".pdf"]).unwrap();
    let mut log = LogCapture::new();
    let map = preview(&cfg, &mut log).unwrap();

    assert_eq!(map["PDF"], vec![PathBuf::from("link.pdf")]);
    assert!(log.of_kind(LogKind::Warning).any(|m| m == "Skipping symlink: stale.pdf"));
}
