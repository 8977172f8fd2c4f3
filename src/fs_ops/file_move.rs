//! File move.
//! Attempts an atomic rename; across filesystems falls back to a metadata-preserving
//! copy followed by removal of the source.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::atomic::try_atomic_move;
use super::copy::copy_preserving;
use super::helpers::io_error_with_help_io;
use super::util::is_cross_device;

/// How a move was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMethod {
    Rename,
    CopyThenRemove,
}

/// Move `src` to `dest` (which must not exist yet).
///
/// If the copy succeeds but the source cannot be removed, the error is returned
/// and both files exist; the destination is complete.
pub fn move_preserving(src: &Path, dest: &Path) -> io::Result<MoveMethod> {
    match try_atomic_move(src, dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "renamed");
            Ok(MoveMethod::Rename)
        }
        Err(e) if is_cross_device(&e) => {
            warn!(src = %src.display(), "cross-filesystem move; copying then removing source");
            copy_preserving(src, dest)?;
            fs::remove_file(src).map_err(io_error_with_help_io("remove original file", src))?;
            Ok(MoveMethod::CopyThenRemove)
        }
        Err(e) => Err(io_error_with_help_io("move", src)(e)),
    }
}
