//! Filesystem operations used by the executor.
//!
//! Everything here returns `io::Result`; messages are enriched with the operation,
//! the path involved and a platform hint so the executor can log them verbatim.

mod atomic;
mod copy;
mod duplicate;
mod file_move;
mod helpers;
mod io_copy;
mod metadata;
mod space;
mod util;

pub use copy::copy_preserving;
pub use duplicate::resolve_destination;
pub use file_move::{MoveMethod, move_preserving};
pub use helpers::io_error_with_help_io;
pub use space::{ensure_space_for_copy, free_space_bytes};
pub(crate) use util::unique_temp_path;
