//! Collision-safe destination naming.
//!
//! If `dst_dir/name` is taken, `_1`, `_2`, ... is inserted before the extension
//! until a free name is found:
//! - "a.mp4" -> "a_1.mp4", "a_2.mp4", ...
//! - "archive.tar.gz" -> "archive.tar_1.gz"
//! - ".env" -> ".env_1"
//!
//! The check reflects the filesystem at call time; the executor runs single-threaded.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Return a path inside `dst_dir` that does not exist yet, starting from `name`.
pub fn resolve_destination(dst_dir: &Path, name: &OsStr) -> PathBuf {
    let candidate = dst_dir.join(name);
    if !exists(&candidate) {
        return candidate;
    }

    let base = Path::new(name);
    let stem: OsString = base
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| name.to_os_string());
    let ext: Option<OsString> = base.extension().map(OsStr::to_os_string);

    let mut n: u64 = 1;
    loop {
        let new_name = build_name_with_suffix(&stem, ext.as_deref(), &format!("_{n}"));
        let candidate = dst_dir.join(&new_name);
        if !exists(&candidate) {
            trace!(name = ?name, chosen = ?new_name, "destination taken; using numbered name");
            return candidate;
        }
        n += 1;
    }
}

// A dangling symlink still occupies the name.
fn exists(p: &Path) -> bool {
    p.symlink_metadata().is_ok()
}

#[cfg(windows)]
const MAX_FILENAME_LEN: usize = 240;
#[cfg(not(windows))]
const MAX_FILENAME_LEN: usize = 255;

#[cfg(unix)]
fn name_len_units(s: &OsStr) -> usize {
    use std::os::unix::ffi::OsStrExt;
    s.as_bytes().len()
}

#[cfg(windows)]
fn name_len_units(s: &OsStr) -> usize {
    s.to_string_lossy().len()
}

/// `stem + suffix + ["." + ext]`, shortening the stem so the result fits in one
/// path component.
fn build_name_with_suffix(stem: &OsStr, ext: Option<&OsStr>, suffix: &str) -> OsString {
    let mut ext_part = OsString::new();
    if let Some(e) = ext {
        ext_part.push(".");
        ext_part.push(e);
    }
    let overhead = suffix.len() + name_len_units(&ext_part);

    let mut stem_os = stem.to_os_string();
    if name_len_units(&stem_os) + overhead > MAX_FILENAME_LEN {
        let budget = MAX_FILENAME_LEN.saturating_sub(overhead).max(1);
        stem_os = truncate_stem(stem, budget);
    }

    let mut new_name = stem_os;
    new_name.push(suffix);
    new_name.push(&ext_part);
    new_name
}

fn truncate_stem(stem: &OsStr, budget: usize) -> OsString {
    let lossy = stem.to_string_lossy();
    #[cfg(unix)]
    if stem.to_str().is_none() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};
        let bytes = stem.as_bytes();
        return OsString::from_vec(bytes[..bytes.len().min(budget)].to_vec());
    }
    let mut acc = String::new();
    for ch in lossy.chars() {
        if acc.len() + ch.len_utf8() > budget {
            break;
        }
        acc.push(ch);
    }
    if acc.is_empty() {
        acc.push('f');
    }
    OsString::from(acc)
}
