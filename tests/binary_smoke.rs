use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::Path;
use std::process::{Command, Output};

/// Settings file that keeps the log inside the test directory.
fn settings_in(td: &TempDir) -> std::path::PathBuf {
    let cfg = td.child("config.xml");
    cfg.write_str(&format!(
        "<config><log_file>{}</log_file></config>",
        td.path().join("ff.log").display()
    ))
    .unwrap();
    cfg.path().to_path_buf()
}

fn run(cfg: &Path, args: &[&str]) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("file_falcon");
    Command::new(me)
        .env("FILE_FALCON_CONFIG", cfg)
        .args(args)
        .output()
        .expect("spawn binary")
}

fn path_arg(p: &Path) -> &str {
    p.to_str().expect("utf-8 temp path")
}

#[test]
fn binary_print_config_succeeds() {
    let td = TempDir::new().unwrap();
    let cfg = settings_in(&td);
    let out = run(&cfg, &["--print-config"]);
    assert!(out.status.success(), "binary should succeed with --print-config");
    assert!(String::from_utf8_lossy(&out.stdout).contains("FILE_FALCON_CONFIG"));
}

#[test]
fn categories_lists_builtin_catalog() {
    let td = TempDir::new().unwrap();
    let cfg = settings_in(&td);
    let out = run(&cfg, &["categories"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("Video Basic: ") && l.contains(".mp4")));
    assert_eq!(stdout.lines().count(), 13);
}

#[test]
fn execute_copies_and_exits_zero() {
    let td = TempDir::new().unwrap();
    let cfg = settings_in(&td);
    let src = td.child("in");
    let dst = td.child("out");
    src.child("a.mp4").write_binary(b"a").unwrap();
    src.child("b.txt").write_str("b").unwrap();
    src.child("c.MP4").write_binary(b"c").unwrap();
    dst.create_dir_all().unwrap();

    let out = run(
        &cfg,
        &[
            "execute",
            "-s",
            path_arg(src.path()),
            "-d",
            path_arg(dst.path()),
            "-c",
            "Video Basic",
            "-t",
            ".mp4",
        ],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(dst.path().join("Video Basic/a.mp4").exists());
    assert!(dst.path().join("Video Basic/c.MP4").exists());
    assert!(src.path().join("a.mp4").exists());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("ok: Successfully processed 2 files."), "{stdout}");
}

#[test]
fn execute_move_without_tty_needs_no_prompt() {
    let td = TempDir::new().unwrap();
    let cfg = settings_in(&td);
    let src = td.child("in");
    let dst = td.child("out");
    src.child("sheet.xlsx").write_binary(b"x").unwrap();
    dst.create_dir_all().unwrap();

    let out = run(
        &cfg,
        &[
            "execute",
            "-s",
            path_arg(src.path()),
            "-d",
            path_arg(dst.path()),
            "-c",
            "Spreadsheet",
            "--operation",
            "move",
        ],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(dst.path().join("Spreadsheet/sheet.xlsx").exists());
    assert!(!src.path().join("sheet.xlsx").exists());
}

#[test]
fn execute_with_no_matches_exits_two() {
    let td = TempDir::new().unwrap();
    let cfg = settings_in(&td);
    let src = td.child("in");
    let dst = td.child("out");
    src.child("notes.txt").write_str("x").unwrap();
    dst.create_dir_all().unwrap();

    let out = run(
        &cfg,
        &["execute", "-s", path_arg(src.path()), "-d", path_arg(dst.path()), "-c", "PDF"],
    );
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn missing_source_is_a_configuration_error() {
    let td = TempDir::new().unwrap();
    let cfg = settings_in(&td);
    let out = run(
        &cfg,
        &[
            "preview",
            "-s",
            path_arg(&td.path().join("missing")),
            "-d",
            path_arg(td.path()),
        ],
    );
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Source folder does not exist"), "{stderr}");
}

#[test]
fn preview_json_emits_structured_status_lines() {
    let td = TempDir::new().unwrap();
    let cfg = settings_in(&td);
    let src = td.child("in");
    let dst = td.child("out");
    src.child("report.pdf").write_str("%PDF").unwrap();
    dst.create_dir_all().unwrap();

    let out = run(
        &cfg,
        &[
            "--json",
            "preview",
            "-s",
            path_arg(src.path()),
            "-d",
            path_arg(dst.path()),
            "-c",
            "PDF",
            "-k",
            "report",
            "--match",
            "exact",
        ],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(!dst.path().join("PDF").exists());

    let stderr = String::from_utf8_lossy(&out.stderr);
    let events: Vec<serde_json::Value> = stderr
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("valid JSON log line"))
        .collect();
    let status_lines: Vec<&serde_json::Value> = events
        .iter()
        .filter(|e| e["target"] == "file_falcon::report")
        .collect();
    assert!(
        status_lines
            .iter()
            .any(|e| e["fields"]["message"].as_str().is_some_and(|m| m.starts_with("report.pdf -> "))),
        "{stderr}"
    );
    assert!(status_lines.iter().any(|e| e["fields"]["kind"] == "success"));
}
