//! Preview and execute an organize run.
//!
//! Both walk `source` recursively in file-name order without descending into
//! symlinked directories, test each file with [`matcher::matches`], and send
//! classified lines to a [`Reporter`]. A symlink to a regular file counts as that
//! file; any other matching symlink is skipped with a warning.
//!
//! Preview never touches the filesystem; execute copies or moves every match into
//! `dest/category`, renaming on collision and continuing past failures.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{OperationConfig, OperationType};
use crate::errors::{FalconError, Result};
use crate::fs_ops::{copy_preserving, move_preserving, resolve_destination};
use crate::matcher;
use crate::report::{LogKind, Reporter};

/// Files per category, as paths relative to the source folder.
pub type PreviewMap = BTreeMap<String, Vec<PathBuf>>;

/// Counts for one execute run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub success_count: usize,
    pub error_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// At least one file processed, no errors.
    Success,
    /// Some files processed, some failed.
    Partial,
    /// Nothing processed and at least one error.
    Failed,
    /// Nothing matched and nothing failed.
    NothingMatched,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.success_count > 0 && self.error_count == 0
    }

    pub fn status(&self) -> RunStatus {
        match (self.success_count, self.error_count) {
            (0, 0) => RunStatus::NothingMatched,
            (_, 0) => RunStatus::Success,
            (0, _) => RunStatus::Failed,
            _ => RunStatus::Partial,
        }
    }
}

/// One walk step: a matched file, a matching entry that cannot be processed, or an
/// entry the walk could not read.
enum Found {
    Match { path: PathBuf, relative: PathBuf },
    Skipped(String),
    Unreadable(String),
}

/// Walk `config.source()` and yield matches in deterministic order.
fn scan(config: &OperationConfig) -> impl Iterator<Item = Found> + '_ {
    let category_dir = config.category_dir();
    WalkDir::new(config.source())
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| {
            let skip = e.depth() > 0 && e.file_type().is_dir() && e.path() == category_dir;
            if skip {
                debug!(path = %e.path().display(), "skipping destination folder inside source");
            }
            !skip
        })
        .filter_map(move |entry| match entry {
            Ok(e) => classify(config, &e),
            Err(e) => {
                let at = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| config.source().display().to_string());
                Some(Found::Unreadable(format!("Cannot read '{at}': {e}")))
            }
        })
}

fn classify(config: &OperationConfig, e: &DirEntry) -> Option<Found> {
    let ft = e.file_type();
    if ft.is_dir() {
        return None;
    }
    let name = e.file_name().to_string_lossy();
    if !matcher::matches(&name, config) {
        return None;
    }
    let relative = e
        .path()
        .strip_prefix(config.source())
        .unwrap_or(e.path())
        .to_path_buf();

    if ft.is_symlink() {
        // Only links that resolve to a regular file are processed.
        match fs::metadata(e.path()) {
            Ok(m) if m.is_file() => {
                debug!(path = %e.path().display(), "following symlink to file");
            }
            _ => return Some(Found::Skipped(format!("Skipping symlink: {}", relative.display()))),
        }
    } else if !ft.is_file() {
        return None;
    }

    Some(Found::Match {
        path: e.path().to_path_buf(),
        relative,
    })
}

fn file_word(n: usize) -> &'static str {
    if n == 1 { "file" } else { "files" }
}

/// List what `execute` would process. Nothing is created, copied or moved.
pub fn preview(config: &OperationConfig, reporter: &mut dyn Reporter) -> Result<PreviewMap> {
    if config.selected_types().is_empty() {
        return Err(FalconError::NoTypesSelected);
    }

    let dest_dir = config.category_dir();
    let mut found: Vec<PathBuf> = Vec::new();
    for item in scan(config) {
        match item {
            Found::Match { path, relative } => {
                let target = dest_dir.join(path.file_name().unwrap_or_default());
                reporter.report(
                    LogKind::Info,
                    &format!("{} -> {}", relative.display(), target.display()),
                );
                found.push(relative);
            }
            Found::Skipped(msg) => {
                debug!("{msg}");
                reporter.report(LogKind::Warning, &msg);
            }
            Found::Unreadable(msg) => {
                warn!("{msg}");
                reporter.report(LogKind::Warning, &msg);
            }
        }
    }

    let mut map = PreviewMap::new();
    if found.is_empty() {
        reporter.report(LogKind::Warning, "No files matched your criteria.");
    } else {
        reporter.report(
            LogKind::Success,
            &format!(
                "Found {} {} to {}.",
                found.len(),
                file_word(found.len()),
                config.operation_type().verb()
            ),
        );
        map.insert(config.category().to_string(), found);
    }
    debug!(matches = map.values().map(Vec::len).sum::<usize>(), "preview complete");
    Ok(map)
}

/// Copy or move every matching file into `dest/category`.
///
/// Returns `Err` only when the run cannot start (no types, category folder cannot be
/// created). Per-file failures and unreadable directory entries are reported and
/// counted in [`Outcome::error_count`].
pub fn execute(config: &OperationConfig, reporter: &mut dyn Reporter) -> Result<Outcome> {
    if config.selected_types().is_empty() {
        return Err(FalconError::NoTypesSelected);
    }

    let dest_dir = config.category_dir();
    fs::create_dir_all(&dest_dir).map_err(|source| FalconError::Unwritable {
        label: "category folder",
        path: dest_dir.clone(),
        source,
    })?;

    let op = config.operation_type();
    let mut outcome = Outcome::default();

    for item in scan(config) {
        let (path, relative) = match item {
            Found::Match { path, relative } => (path, relative),
            Found::Skipped(msg) => {
                debug!("{msg}");
                reporter.report(LogKind::Warning, &msg);
                continue;
            }
            Found::Unreadable(msg) => {
                warn!("{msg}");
                reporter.report(LogKind::Error, &msg);
                outcome.error_count += 1;
                continue;
            }
        };

        reporter.report(LogKind::Info, &format!("Processing: {}", relative.display()));
        match process_file(&path, &dest_dir, op, reporter) {
            Ok(dest) => {
                info!(op = op.verb(), src = %path.display(), dest = %dest.display(), "processed");
                outcome.success_count += 1;
            }
            Err(e) => {
                error!(code = e.code(), "{e}");
                reporter.report(
                    LogKind::Error,
                    &format!("Error processing {}: {}", relative.display(), e),
                );
                outcome.error_count += 1;
            }
        }
    }

    if outcome.success_count > 0 {
        reporter.report(
            LogKind::Success,
            &format!(
                "Successfully processed {} {}.",
                outcome.success_count,
                file_word(outcome.success_count)
            ),
        );
    }
    if outcome.error_count > 0 {
        reporter.report(
            LogKind::Error,
            &format!(
                "Encountered errors with {} {}.",
                outcome.error_count,
                file_word(outcome.error_count)
            ),
        );
    }
    if outcome.success_count == 0 && outcome.error_count == 0 {
        reporter.report(LogKind::Warning, "No files matched your criteria.");
    }
    reporter.report(LogKind::Info, "File organization complete.");

    debug!(?outcome, "execute complete");
    Ok(outcome)
}

/// Pick a free name in `dest_dir` and copy or move `src` there.
fn process_file(
    src: &Path,
    dest_dir: &Path,
    op: OperationType,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    let name = src.file_name().unwrap_or_default();
    let dest = resolve_destination(dest_dir, name);
    if dest.file_name() != Some(name) {
        let new_name = dest.file_name().unwrap_or_default().to_string_lossy();
        reporter.report(
            LogKind::Warning,
            &format!("File already exists, renamed to: {new_name}"),
        );
    }

    let res = match op {
        OperationType::Copy => copy_preserving(src, &dest).map(|_| ()),
        OperationType::Move => move_preserving(src, &dest).map(|_| ()),
    };
    res.map_err(|source| FalconError::FileOperation {
        op: op.verb(),
        src: src.to_path_buf(),
        dest: dest.clone(),
        source,
    })?;
    Ok(dest)
}
