//! Streaming copy into a freshly created file.
//!
//! - The destination is opened with `create_new`, so an existing file is never clobbered.
//! - Buffered I/O with 1 MiB buffers; the destination is fsynced before returning.
//! - The source is read once from start to EOF. Growth during the copy is not included.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst` and return the number of bytes written.
/// Callers sync the parent directory after the final rename.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn copies_bytes() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("clip.mp4");
        let dst = dir.path().join("clip.out");
        fs::write(&src, b"frames").unwrap();
        assert_eq!(copy_streaming(&src, &dst).unwrap(), 6);
        assert_eq!(fs::read(&dst).unwrap(), b"frames");
    }

    #[test]
    fn empty_file_ok() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("empty.txt");
        let dst = dir.path().join("empty.out");
        File::create(&src).unwrap();
        assert_eq!(copy_streaming(&src, &dst).unwrap(), 0);
        assert_eq!(fs::metadata(&dst).unwrap().len(), 0);
    }

    #[test]
    fn refuses_existing_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.pdf");
        let dst = dir.path().join("b.pdf");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();
        let err = copy_streaming(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&dst).unwrap(), b"old");
    }

    #[test]
    fn crosses_buffer_boundaries() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("big.bin");
        let dst = dir.path().join("big.out");
        let data: Vec<u8> = (0..2 * BUF_SIZE + 123).map(|i| (i % 251) as u8).collect();
        fs::write(&src, &data).unwrap();
        assert_eq!(copy_streaming(&src, &dst).unwrap() as usize, data.len());
        assert_eq!(fs::read(&dst).unwrap(), data);
    }
}
