//! Config module.
//! Provides the validated OperationConfig, persisted Settings, default paths and
//! XML loading.

pub mod operation;
pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use operation::OperationConfig;
pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{LogLevel, MatchType, Mode, OperationType, Settings};
pub use xml::{LoadResult, create_template_config, load_or_init, load_settings_from_xml_path};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "FILE_FALCON_CONFIG";

/// Category used when neither settings nor CLI name one.
pub const DEFAULT_CATEGORY: &str = "Video Basic";
