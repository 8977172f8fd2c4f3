//! Copy into the destination without ever exposing a partial file:
//! - free-space check against the source size
//! - stream into a temp file in the destination directory (fsynced)
//! - rename temp -> dest, then copy timestamps/permissions onto the result

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help_io;
use super::space::ensure_space_for_copy;
use super::{io_copy, metadata, util};

/// Copy `src` to `dest` (which must not exist yet) and preserve metadata.
/// Returns the number of bytes copied. On failure no temp file is left behind.
pub fn copy_preserving(src: &Path, dest: &Path) -> io::Result<u64> {
    let dest_dir = dest.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("destination has no parent: {}", dest.display()),
        )
    })?;

    let src_meta = fs::metadata(src).map_err(io_error_with_help_io("stat source", src))?;
    ensure_space_for_copy(dest_dir, src_meta.len())?;

    let tmp_path = util::unique_temp_path(dest_dir);
    let bytes = match io_copy::copy_streaming(src, &tmp_path) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_error_with_help_io("copy to temporary file", &tmp_path)(e));
        }
    };

    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help_io("rename temporary file into place", dest)(e));
    }

    metadata::preserve_metadata(src, dest, &src_meta);
    debug!(src = %src.display(), dest = %dest.display(), bytes, "copied");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copy_keeps_source_and_leaves_no_temp() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.mp4");
        let out = td.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(&src, b"video").unwrap();

        let dest = out.join("a.mp4");
        assert_eq!(copy_preserving(&src, &dest).unwrap(), 5);
        assert_eq!(fs::read(&dest).unwrap(), b"video");
        assert!(src.exists());
        let names: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().file_name()).collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn missing_source_names_the_path() {
        let td = tempdir().unwrap();
        let src = td.path().join("gone.mp4");
        let err = copy_preserving(&src, &td.path().join("x.mp4")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("gone.mp4"));
    }
}
