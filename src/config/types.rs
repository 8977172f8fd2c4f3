//! Core configuration types.
//! - Mode, MatchType and OperationType are the user-facing choices of a run.
//! - Settings holds persisted defaults (XML) that CLI flags override.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;
use super::DEFAULT_CATEGORY;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Basic filters by extension only; Advanced adds keyword filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Basic,
    Advanced,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Basic => "Basic",
            Mode::Advanced => "Advanced",
        })
    }
}

impl FromStr for Mode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Mode::Basic),
            "advanced" => Ok(Mode::Advanced),
            _ => Err(format!("invalid mode: '{s}' (expected basic or advanced)")),
        }
    }
}

/// How an Advanced-mode keyword is compared with a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchType {
    /// Keyword is a substring of the whole filename.
    #[default]
    Contains,
    /// Keyword equals the filename stem.
    ExactMatch,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchType::Contains => "Contains",
            MatchType::ExactMatch => "Exact Match",
        })
    }
}

impl FromStr for MatchType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "contains" => Ok(MatchType::Contains),
            "exact" | "exactmatch" => Ok(MatchType::ExactMatch),
            _ => Err(format!("invalid match type: '{s}' (expected contains or exact)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationType {
    /// Duplicate into the destination; the original stays.
    #[default]
    Copy,
    /// Relocate into the destination; the original is removed.
    Move,
}

impl OperationType {
    /// Lowercase verb used in log lines ("copy" / "move").
    pub fn verb(&self) -> &'static str {
        match self {
            OperationType::Copy => "copy",
            OperationType::Move => "move",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperationType::Copy => "Copy",
            OperationType::Move => "Move",
        })
    }
}

impl FromStr for OperationType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copy" => Ok(OperationType::Copy),
            "move" => Ok(OperationType::Move),
            _ => Err(format!("invalid operation: '{s}' (expected copy or move)")),
        }
    }
}

/// Persisted user defaults. Unset paths must be supplied on the command line.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: Option<PathBuf>,
    pub dest: Option<PathBuf>,
    pub mode: Mode,
    pub category: String,
    /// Empty means "every extension of the category".
    pub selected_types: Vec<String>,
    pub keyword: String,
    pub match_type: MatchType,
    pub operation_type: OperationType,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: None,
            dest: None,
            mode: Mode::Basic,
            category: DEFAULT_CATEGORY.to_string(),
            selected_types: Vec::new(),
            keyword: String::new(),
            match_type: MatchType::Contains,
            operation_type: OperationType::Copy,
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path(),
        }
    }
}
