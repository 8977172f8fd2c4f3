//! Free-space probe used before copying a file.

use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::ffi::OsStrExt;
#[cfg(windows)]
use std::os::windows::ffi::OsStrExt;

/// Headroom kept free on the destination filesystem.
const CUSHION: u64 = 4 * 1024 * 1024;

fn format_bytes(n: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    let f = n as f64;
    if f >= GB {
        format!("{:.1} GiB", f / GB)
    } else if f >= MB {
        format!("{:.1} MiB", f / MB)
    } else if f >= KB {
        format!("{:.1} KiB", f / KB)
    } else {
        format!("{n} B")
    }
}

/// Fail with `StorageFull` when `dst_dir` cannot take `required` bytes plus a small cushion.
/// A probe that itself fails is treated as "enough space"; the copy surfaces the real error.
pub fn ensure_space_for_copy(dst_dir: &Path, required: u64) -> io::Result<()> {
    let free = match free_space_bytes(dst_dir) {
        Ok(free) => free,
        Err(e) => {
            tracing::debug!(dir = %dst_dir.display(), error = %e, "free space probe failed");
            return Ok(());
        }
    };
    if free < required.saturating_add(CUSHION) {
        return Err(io::Error::new(
            io::ErrorKind::StorageFull,
            format!(
                "not enough free space in '{}': need ~{}, free {}",
                dst_dir.display(),
                format_bytes(required),
                format_bytes(free)
            ),
        ));
    }
    Ok(())
}

#[cfg(unix)]
pub fn free_space_bytes(path: &Path) -> io::Result<u64> {
    let cpath = std::ffi::CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))?;
    let mut s: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(cpath.as_ptr(), &mut s) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok((s.f_bavail as u64).saturating_mul(s.f_frsize as u64))
}

#[cfg(windows)]
pub fn free_space_bytes(path: &Path) -> io::Result<u64> {
    use std::iter::once;
    use windows_sys::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;
    let wide: Vec<u16> = path.as_os_str().encode_wide().chain(once(0)).collect();
    let mut free_avail: u64 = 0;
    let ok = unsafe {
        GetDiskFreeSpaceExW(
            wide.as_ptr(),
            &mut free_avail,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
        )
    };
    if ok == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(free_avail)
}
