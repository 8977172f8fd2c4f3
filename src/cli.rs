//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Run options override the settings file; unset flags leave settings untouched.
//! - --debug is a shorthand for --log-level debug.
//! - --keyword implies advanced mode unless --mode is given.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::{LogLevel, MatchType, Mode, OperationType, Settings};

/// Sort files into category folders by extension and keyword.
/// CLI flags override values from the settings file.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy or move files into category folders by extension and keyword"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// One of: quiet, normal, info, debug.
    #[arg(long, global = true, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, global = true, help = "Emit logs and status lines as structured JSON on stderr")]
    pub json: bool,

    /// Append logs to this file in addition to stderr.
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Print where the settings file is looked up (or FILE_FALCON_CONFIG if set), then exit.
    #[arg(long, help = "Print the settings file location and exit")]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the files that would be processed; changes nothing.
    Preview(RunArgs),
    /// Copy or move the matching files into DEST/CATEGORY.
    Execute {
        #[command(flatten)]
        run: RunArgs,
        /// Do not ask for confirmation before moving files.
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// List the built-in categories and their extensions.
    Categories,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RunArgs {
    /// Folder to scan recursively.
    #[arg(short = 's', long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Folder that receives DEST/CATEGORY.
    #[arg(short = 'd', long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// Category name; also the folder created under DEST.
    #[arg(short = 'c', long, value_name = "NAME")]
    pub category: Option<String>,

    /// Extensions to select, comma separated (default: every extension of the category).
    #[arg(short = 't', long, value_name = "EXT,...", value_delimiter = ',')]
    pub types: Vec<String>,

    /// basic (extension only) or advanced (extension + keyword).
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Filename keyword for advanced mode.
    #[arg(short = 'k', long, value_name = "TEXT")]
    pub keyword: Option<String>,

    /// contains (substring of the filename) or exact (equals the stem).
    #[arg(long = "match", value_name = "HOW")]
    pub match_type: Option<MatchType>,

    /// copy or move.
    #[arg(long, value_name = "OP")]
    pub operation: Option<OperationType>,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use settings).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply global overrides (log level, log file) to loaded Settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(level) = self.effective_log_level() {
            settings.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            settings.log_file = Some(lf.clone());
        }
    }
}

impl RunArgs {
    /// Apply run overrides to loaded Settings. A new `--category` without `--types`
    /// selects the whole category rather than types saved for another one.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(s) = &self.source {
            settings.source = Some(s.clone());
        }
        if let Some(d) = &self.dest {
            settings.dest = Some(d.clone());
        }
        if let Some(c) = &self.category {
            settings.category = c.trim().to_string();
            settings.selected_types.clear();
        }
        let types: Vec<String> = self
            .types
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if !types.is_empty() {
            settings.selected_types = types;
        }
        if let Some(k) = &self.keyword {
            settings.keyword = k.clone();
        }
        match self.mode {
            Some(mode) => settings.mode = mode,
            None if self.keyword.as_deref().is_some_and(|k| !k.is_empty()) => {
                settings.mode = Mode::Advanced
            }
            None => {}
        }
        if let Some(mt) = self.match_type {
            settings.match_type = mt;
        }
        if let Some(op) = self.operation {
            settings.operation_type = op;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
