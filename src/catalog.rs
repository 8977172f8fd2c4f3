//! Extension catalog.
//! Maps a category name (e.g. "Video Basic") to the set of extensions it recognizes.
//!
//! Notes:
//! - Extensions are stored lowercase with a leading dot and deduplicated.
//! - The built-in catalog is constructed once and shared; it is never mutated.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

const VIDEO_BASIC: &[&str] = &[
    ".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".3gp", ".webm", ".mpg", ".vob",
];

const VIDEO_ALL: &[&str] = &[
    ".flv", ".webm", ".vob", ".avi", ".wmv", ".m4p", ".m4v", ".mpg", ".mpeg", ".3gp", ".mov",
    ".mp4", ".mkv", ".ogg", ".ogv", ".mts", ".m2ts", ".ts", ".qt", ".yuv", ".rm", ".rmvb",
    ".asf", ".amv", ".mpv", ".mpe", ".m2v",
];

const IMAGE_BASIC: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".ico", ".jfif", ".webp", ".heic", ".svg",
];

// Raw and professional formats on top of IMAGE_BASIC.
const IMAGE_EXTRA: &[&str] = &[
    ".ai", ".eps", ".raw", ".indd", ".heif", ".pdf", ".psd", ".arw", ".cr2", ".nrw", ".k25",
    ".orf", ".raf", ".pef", ".x3f", ".srw", ".dng",
];

const TEXT: &[&str] = &[".doc", ".docx", ".txt", ".odt", ".rtf", ".pages", ".wpd"];
const JSON: &[&str] = &[".json", ".jsonl"];
const SPREADSHEET: &[&str] = &[".xls", ".xlsx", ".ods", ".numbers", ".csv", ".tsv"];
const PDF: &[&str] = &[".pdf"];
const PRESENTATIONS: &[&str] = &[".ppt", ".pptx", ".odp", ".key", ".pps"];
const LAYOUT: &[&str] = &[".indd", ".psd", ".ai", ".eps"];
const DATABASE: &[&str] = &[".db", ".sqlite", ".sqlite3", ".mdb", ".accdb"];
const DESIGN: &[&str] = &[".psd", ".ai", ".indd", ".xd", ".sketch", ".fig"];
const MARKUP: &[&str] = &[".html", ".htm", ".xml", ".svg", ".md", ".markdown"];

/// Normalize one user- or table-supplied extension: trim, lowercase, ensure a leading dot.
/// Returns None for empty input (or a bare ".").
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

/// Normalize a list of extensions into a deduplicated, sorted set.
pub fn normalize_extensions<I, S>(raw: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|e| normalize_extension(e.as_ref()))
        .collect()
}

/// Immutable category -> extensions table.
#[derive(Debug, Clone)]
pub struct ExtensionCatalog {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl ExtensionCatalog {
    /// Shared built-in catalog (constructed on first use).
    pub fn builtin() -> &'static ExtensionCatalog {
        static BUILTIN: OnceLock<ExtensionCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let image_all: Vec<&str> = IMAGE_BASIC.iter().chain(IMAGE_EXTRA).copied().collect();
            Self::from_entries([
                ("Video Basic", VIDEO_BASIC),
                ("Video All", VIDEO_ALL),
                ("Image Basic", IMAGE_BASIC),
                ("Image All", image_all.as_slice()),
                ("Text", TEXT),
                ("JSON", JSON),
                ("Spreadsheet", SPREADSHEET),
                ("PDF", PDF),
                ("Presentations", PRESENTATIONS),
                ("Layout", LAYOUT),
                ("Database", DATABASE),
                ("Design", DESIGN),
                ("Markup", MARKUP),
            ])
        })
    }

    /// Build a catalog from (name, extensions) pairs; extensions are normalized.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let categories = entries
            .into_iter()
            .map(|(name, exts)| (name.to_string(), normalize_extensions(exts.iter())))
            .collect();
        Self { categories }
    }

    /// Case-insensitive lookup. Returns the canonical category name with its extensions.
    pub fn get(&self, name: &str) -> Option<(&str, &BTreeSet<String>)> {
        let wanted = name.trim();
        self.categories
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(wanted))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Category names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
