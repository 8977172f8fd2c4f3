//! Metadata preservation for copied files.
//! - Timestamps (atime, mtime) via filetime.
//! - Unix mode bits; the readonly attribute on Windows.
//! - Extended attributes with the `xattrs` feature.
//!
//! Best-effort: a failure is logged and the copy still counts as done.

use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

pub(super) fn preserve_metadata(src: &Path, dest: &Path, src_meta: &fs::Metadata) {
    preserve_times(dest, src_meta);
    preserve_xattrs(src, dest);
    // Permissions last: a read-only source would otherwise block the steps above.
    preserve_permissions(dest, src_meta);
}

fn preserve_times(dest: &Path, src_meta: &fs::Metadata) {
    let mt = FileTime::from_last_modification_time(src_meta);
    let at = FileTime::from_last_access_time(src_meta);
    match set_file_times(dest, at, mt) {
        Ok(()) => trace!(path = %dest.display(), "set atime/mtime on destination"),
        Err(e) => {
            warn!(path = %dest.display(), error = %e, "failed to set atime/mtime on destination")
        }
    }
}

#[cfg(unix)]
fn preserve_permissions(dest: &Path, src_meta: &fs::Metadata) {
    use std::os::unix::fs::PermissionsExt;
    let mode = src_meta.permissions().mode() & 0o7777;
    if let Err(e) = fs::set_permissions(dest, fs::Permissions::from_mode(mode)) {
        warn!(path = %dest.display(), mode = format!("{mode:o}"), error = %e, "failed to set permissions on destination");
    }
}

#[cfg(windows)]
fn preserve_permissions(dest: &Path, src_meta: &fs::Metadata) {
    let ro = src_meta.permissions().readonly();
    let res = fs::metadata(dest).and_then(|meta| {
        let mut perms = meta.permissions();
        perms.set_readonly(ro);
        fs::set_permissions(dest, perms)
    });
    if let Err(e) = res {
        warn!(path = %dest.display(), readonly = ro, error = %e, "failed to set readonly attribute on destination");
    }
}

#[cfg(feature = "xattrs")]
fn preserve_xattrs(src: &Path, dest: &Path) {
    let names = match xattr::list(src) {
        Ok(names) => names,
        Err(e) => {
            warn!(src = %src.display(), error = %e, "failed to list xattrs; continuing");
            return;
        }
    };
    for name in names {
        let shown = name.to_string_lossy().into_owned();
        let value = match xattr::get(src, &name) {
            Ok(v) => v.unwrap_or_default(),
            Err(e) => {
                warn!(src = %src.display(), xattr = %shown, error = %e, "failed to read xattr");
                continue;
            }
        };
        match xattr::set(dest, &name, &value) {
            Ok(()) => trace!(dest = %dest.display(), xattr = %shown, size = value.len(), "preserved xattr"),
            Err(e) => warn!(dest = %dest.display(), xattr = %shown, error = %e, "failed to set xattr"),
        }
    }
}

#[cfg(not(feature = "xattrs"))]
fn preserve_xattrs(_src: &Path, _dest: &Path) {}
