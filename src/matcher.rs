//! Filename matching.
//!
//! A file is selected when its extension is one of the configured types and, in
//! Advanced mode, the keyword test passes as well. Comparisons ignore ASCII and
//! Unicode case alike (both sides are lowercased).

use crate::config::{MatchType, Mode, OperationConfig};

/// Split a filename into `(stem, extension)`. The extension starts at the last
/// `.` that is not part of the leading dots, and keeps that dot:
/// `"a.MP4"` -> `("a", Some(".MP4"))`, `".bashrc"` -> `(".bashrc", None)`.
pub fn split_name(file_name: &str) -> (&str, Option<&str>) {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(i) => {
            let at = leading + i;
            (&file_name[..at], Some(&file_name[at..]))
        }
        None => (file_name, None),
    }
}

/// Lowercased extension including the dot, if any.
pub fn extension_of(file_name: &str) -> Option<String> {
    split_name(file_name).1.map(str::to_lowercase)
}

/// Decide whether `file_name` (a bare name, not a path) is selected by `config`.
pub fn matches(file_name: &str, config: &OperationConfig) -> bool {
    let Some(ext) = extension_of(file_name) else {
        return false;
    };
    if !config.selected_types().contains(&ext) {
        return false;
    }

    match config.mode() {
        Mode::Basic => true,
        Mode::Advanced => keyword_matches(file_name, config.keyword(), config.match_type()),
    }
}

fn keyword_matches(file_name: &str, keyword: &str, match_type: MatchType) -> bool {
    if keyword.is_empty() {
        return true;
    }
    let keyword = keyword.to_lowercase();
    match match_type {
        MatchType::Contains => file_name.to_lowercase().contains(&keyword),
        MatchType::ExactMatch => split_name(file_name).0.to_lowercase() == keyword,
    }
}
