//! XML settings support.
//! - Loads persisted defaults from config.xml (quick_xml + serde).
//! - Creates a commented template if the default file is missing
//!   (never when FILE_FALCON_CONFIG is set).
//!
//! Notes:
//! - This module only reads/writes the settings file; directory validation happens
//!   when an OperationConfig is built.
//! - Unknown elements are rejected so typos surface instead of being ignored.

use anyhow::{Context, Result, anyhow};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{LogLevel, Settings};
use super::{CONFIG_ENV, DEFAULT_CATEGORY};
use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source_folder: Option<String>,
    dest_folder: Option<String>,
    mode: Option<String>,
    category: Option<String>,
    /// Whitespace or comma separated list, e.g. ".mp4 .avi"
    selected_types: Option<String>,
    keyword: Option<String>,
    match_type: Option<String>,
    operation_type: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

/// Outcome of looking for the settings file at startup.
#[derive(Debug)]
pub enum LoadResult {
    Loaded(Settings),
    /// No file existed at the default location; a template was written there.
    CreatedTemplate(PathBuf, Settings),
    /// No file and no template (env override pointed nowhere, or creation failed).
    Defaults(Settings),
}

impl LoadResult {
    pub fn into_settings(self) -> Settings {
        match self {
            LoadResult::Loaded(s) | LoadResult::CreatedTemplate(_, s) | LoadResult::Defaults(s) => s,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

fn parse_field<T: std::str::FromStr<Err = String>>(
    value: Option<&str>,
    field: &str,
) -> Result<Option<T>> {
    non_empty(value)
        .map(|v| v.parse::<T>().map_err(|e| anyhow!("{field}: {e}")))
        .transpose()
}

// Map XmlConfig -> Settings, falling back to defaults for absent fields.
fn xml_to_settings(parsed: XmlConfig) -> Result<Settings> {
    let mut s = Settings::default();

    s.source = non_empty(parsed.source_folder.as_deref()).map(PathBuf::from);
    s.dest = non_empty(parsed.dest_folder.as_deref()).map(PathBuf::from);
    if let Some(mode) = parse_field(parsed.mode.as_deref(), "mode")? {
        s.mode = mode;
    }
    s.category = non_empty(parsed.category.as_deref())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();
    if let Some(list) = non_empty(parsed.selected_types.as_deref()) {
        s.selected_types = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    }
    // Keywords may legitimately contain surrounding spaces; keep them verbatim.
    s.keyword = parsed.keyword.unwrap_or_default();
    if let Some(mt) = parse_field(parsed.match_type.as_deref(), "match_type")? {
        s.match_type = mt;
    }
    if let Some(op) = parse_field(parsed.operation_type.as_deref(), "operation_type")? {
        s.operation_type = op;
    }
    if let Some(lvl) = parse_field::<LogLevel>(parsed.log_level.as_deref(), "log_level")? {
        s.log_level = lvl;
    }
    if let Some(lf) = non_empty(parsed.log_file.as_deref()) {
        s.log_file = Some(PathBuf::from(lf));
    }

    Ok(s)
}

/// Load Settings from a specific XML file path.
pub fn load_settings_from_xml_path(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_settings(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Resolve the settings file and load it.
///
/// - Existing file: parsed (errors propagate; a broken file should stop the run).
/// - Missing default file: template written, defaults returned.
/// - Missing file named by FILE_FALCON_CONFIG: defaults returned, nothing written.
pub fn load_or_init() -> Result<LoadResult> {
    let Some(path) = default_config_path() else {
        debug!("no config location could be determined; using defaults");
        return Ok(LoadResult::Defaults(Settings::default()));
    };

    if path.exists() {
        debug!(path = %path.display(), "loading settings");
        return load_settings_from_xml_path(&path).map(LoadResult::Loaded);
    }

    if env::var_os(CONFIG_ENV).is_some() {
        debug!(path = %path.display(), "{} points to a missing file; using defaults", CONFIG_ENV);
        return Ok(LoadResult::Defaults(Settings::default()));
    }

    match create_template_config(&path) {
        Ok(()) => Ok(LoadResult::CreatedTemplate(path, Settings::default())),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not create template config");
            Ok(LoadResult::Defaults(Settings::default()))
        }
    }
}

/// Create default template config file and parent directory (best-effort permissions).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        return Err(anyhow!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        let _ = set_dir_mode_0700(parent);
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "/path/to/file_falcon.log".into());

    let content = format!(
        "<!--\n  file_falcon settings (XML). Every element is optional; CLI flags override them.\n\n    source_folder    -> folder to scan (recursively)\n    dest_folder      -> folder that receives <dest_folder>/<category>/\n    mode             -> basic | advanced\n    category         -> catalog category, e.g. Video Basic (see `file_falcon categories`)\n    selected_types   -> extensions, e.g. .mp4 .avi (empty = whole category)\n    keyword          -> advanced mode keyword (empty = extension only)\n    match_type       -> contains | exact\n    operation_type   -> copy | move\n    log_level        -> quiet | normal | info | debug\n    log_file         -> path to log file (optional)\n-->\n<config>\n  <source_folder></source_folder>\n  <dest_folder></dest_folder>\n  <mode>basic</mode>\n  <category>{}</category>\n  <selected_types></selected_types>\n  <keyword></keyword>\n  <match_type>contains</match_type>\n  <operation_type>copy</operation_type>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n</config>\n",
        DEFAULT_CATEGORY, suggested_log
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}
