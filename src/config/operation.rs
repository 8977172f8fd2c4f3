//! Validated description of a single organize run.
//!
//! An `OperationConfig` can only be obtained through [`OperationConfig::new`] (or
//! [`OperationConfig::for_category`]), which checks the directories and the type
//! selection up front. After construction it is read-only; the executor borrows it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::catalog::{normalize_extensions, ExtensionCatalog};
use crate::errors::{FalconError, Result};

use super::types::{MatchType, Mode, OperationType};
use super::validate::{ensure_category_name, ensure_readable, ensure_writable, existing_dir};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationConfig {
    source: PathBuf,
    dest: PathBuf,
    mode: Mode,
    category: String,
    selected_types: BTreeSet<String>,
    keyword: String,
    match_type: MatchType,
    operation_type: OperationType,
}

impl OperationConfig {
    /// Validate paths and selection; remaining options take their defaults
    /// (Basic mode, no keyword, Contains, Copy).
    ///
    /// - `source` must exist, be a directory, and be readable.
    /// - `dest` must exist, be a directory, and be writable.
    /// - `category` must be usable as a single folder name, and `dest/category` must
    ///   not be `source` itself.
    /// - `selected_types` must contain at least one extension after normalization.
    pub fn new<I, S>(
        source: impl AsRef<Path>,
        dest: impl AsRef<Path>,
        category: &str,
        selected_types: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = existing_dir(source.as_ref(), "source", FalconError::SourceNotFound)?;
        ensure_readable(&source, "source")?;
        let dest = existing_dir(dest.as_ref(), "destination", FalconError::DestNotFound)?;
        ensure_writable(&dest, "destination")?;

        ensure_category_name(category)?;
        let category_dir = dest.join(category.trim());
        if source == category_dir {
            error!("source is the category folder: {}", source.display());
            return Err(FalconError::SourceIsCategoryFolder(source));
        }
        let selected_types = normalize_extensions(selected_types);
        if selected_types.is_empty() {
            return Err(FalconError::NoTypesSelected);
        }

        debug!(
            source = %source.display(),
            dest = %dest.display(),
            category,
            types = selected_types.len(),
            "operation config validated"
        );

        Ok(Self {
            source,
            dest,
            mode: Mode::Basic,
            category: category.trim().to_string(),
            selected_types,
            keyword: String::new(),
            match_type: MatchType::Contains,
            operation_type: OperationType::Copy,
        })
    }

    /// Like [`OperationConfig::new`], but an empty `selected_types` means "every
    /// extension of the category" as listed in `catalog`. A category found in the
    /// catalog is stored under its canonical spelling.
    pub fn for_category(
        source: impl AsRef<Path>,
        dest: impl AsRef<Path>,
        catalog: &ExtensionCatalog,
        category: &str,
        selected_types: &[String],
    ) -> Result<Self> {
        let known = catalog.get(category);
        let name = known.map(|(n, _)| n).unwrap_or(category);
        if selected_types.is_empty() {
            let (_, exts) = known.ok_or_else(|| FalconError::UnknownCategory(category.to_string()))?;
            Self::new(source, dest, name, exts)
        } else {
            Self::new(source, dest, name, selected_types)
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>, match_type: MatchType) -> Self {
        self.keyword = keyword.into();
        self.match_type = match_type;
        self
    }

    pub fn with_operation(mut self, operation_type: OperationType) -> Self {
        self.operation_type = operation_type;
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Lowercase extensions with a leading dot.
    pub fn selected_types(&self) -> &BTreeSet<String> {
        &self.selected_types
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// `dest/category`: where matched files land.
    pub fn category_dir(&self) -> PathBuf {
        self.dest.join(&self.category)
    }
}
