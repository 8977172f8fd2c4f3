//! Core library for `file_falcon`.
//!
//! Sorts files from a source tree into `destination/<category>/` by extension
//! category and, optionally, a filename keyword.
//!
//! - [`config::OperationConfig`] is the validated description of one run.
//! - [`matcher::matches`] decides whether a filename is selected.
//! - [`executor::preview`] lists the matches; [`executor::execute`] copies or moves
//!   them with collision-safe renaming.
//! - Status lines flow through a [`report::Reporter`].

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod executor;
pub mod fs_ops;
pub mod matcher;
pub mod output;
pub mod platform;
pub mod report;

pub use catalog::ExtensionCatalog;
pub use config::{
    LogLevel, MatchType, Mode, OperationConfig, OperationType, Settings, default_config_path,
    default_log_path, path_has_symlink_ancestor,
};
pub use errors::{ErrorKind, FalconError, Result};
pub use executor::{Outcome, PreviewMap, RunStatus, execute, preview};
pub use report::{ConsoleReporter, LogCapture, LogKind, LogLine, Reporter, TracingReporter};

/// Common imports for embedding the organizer.
pub mod prelude {
    pub use crate::catalog::ExtensionCatalog;
    pub use crate::config::{MatchType, Mode, OperationConfig, OperationType};
    pub use crate::errors::{FalconError, Result as FalconResult};
    pub use crate::executor::{Outcome, RunStatus, execute, preview};
    pub use crate::matcher::matches;
    pub use crate::report::{LogCapture, LogKind, Reporter};
}
