//! I/O error enrichment.
//!
//! Wraps an `io::Error` with the failing operation, the path and, when the OS
//! code is recognized, a short hint. The original `ErrorKind` is kept so callers
//! can still branch on it.
//!
//! Usage:
//!   File::open(p).map_err(io_error_with_help_io("open source", p))?;

use std::io;
use std::path::Path;

#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
        libc::EXDEV => "cross-filesystem; atomic rename not possible",
        libc::EBUSY => "resource busy; another process may hold the file",
        libc::ENOENT => "path not found; it may have been removed during the run",
        libc::EEXIST => "already exists",
        libc::ENOSPC => "insufficient space on device",
        libc::EDQUOT => "disk quota exceeded",
        libc::EROFS => "read-only filesystem",
        libc::ELOOP => "too many levels of symbolic links",
        libc::ENAMETOOLONG => "file name or path too long",
        libc::EMFILE | libc::ENFILE => "too many open files",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        5 => "access denied; check permissions",
        17 => "not the same device; cross-filesystem move",
        32 => "sharing violation; the file is in use",
        2 | 3 => "path not found; it may have been removed during the run",
        80 | 183 => "already exists",
        112 => "insufficient disk space",
        19 => "write protected media",
        206 => "file name or path too long",
        4 => "too many open files",
        _ => return None,
    };
    Some(hint)
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied"),
        io::ErrorKind::NotFound => Some("path not found"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        io::ErrorKind::StorageFull => Some("insufficient space"),
        _ => None,
    }
}

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{op} '{}': {e}", path.display());
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    msg
}

/// `.map_err` adapter for `io::Result` code paths.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
