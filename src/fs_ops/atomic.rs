//! Rename helper.
//! - Renames within one filesystem; the raw OS error is returned untouched so
//!   callers can detect a cross-device rename before enriching it.
//! - On Unix, best-effort fsync of the destination directory afterwards.

use std::fs;
use std::io;
use std::path::Path;

pub(super) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // A failed directory fsync does not undo a completed rename.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
