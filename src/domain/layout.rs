//! Scaffold layout: the ordered list of files a run guarantees.
//!
//! The built-in layout ships as a TOML manifest compiled into the binary.
//! Entries are relative, forward-slash separated file paths; order is the
//! processing and reporting order.

use serde::Deserialize;

use crate::domain::AppError;

const LAYOUT_SCHEMA_VERSION: u32 = 1;

static BUILTIN_LAYOUT: &str = include_str!("../assets/layout.toml");

#[derive(Debug, Deserialize)]
struct LayoutManifest {
    schema_version: u32,
    #[serde(default)]
    groups: Vec<LayoutGroup>,
}

#[derive(Debug, Deserialize)]
struct LayoutGroup {
    name: String,
    paths: Vec<String>,
}

/// Ordered, validated list of relative file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    entries: Vec<String>,
}

impl Layout {
    /// Build a layout from explicit entries, validating each one.
    ///
    /// Duplicates are kept; a repeated entry is simply found on its second visit.
    pub fn new<I, S>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        for entry in &entries {
            validate_entry(entry)?;
        }
        Ok(Self { entries })
    }

    /// The layout compiled into the binary.
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_toml(BUILTIN_LAYOUT)
    }

    /// Parse a layout manifest, flattening its groups in declaration order.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let manifest: LayoutManifest =
            toml::from_str(content).map_err(|e| AppError::layout_error(e.to_string()))?;

        if manifest.schema_version != LAYOUT_SCHEMA_VERSION {
            return Err(AppError::layout_error(format!(
                "unsupported schema version: {} (expected {})",
                manifest.schema_version, LAYOUT_SCHEMA_VERSION
            )));
        }

        let mut entries = Vec::new();
        for group in manifest.groups {
            if group.paths.is_empty() {
                return Err(AppError::layout_error(format!("group '{}' has no paths", group.name)));
            }
            entries.extend(group.paths);
        }

        Self::new(entries)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Entries must be relative file paths that stay inside the target root.
fn validate_entry(entry: &str) -> Result<(), AppError> {
    if entry.is_empty() {
        return Err(AppError::layout_error("empty path"));
    }
    if entry.starts_with('/') || entry.contains('\\') {
        return Err(AppError::layout_error(format!(
            "'{}' must be relative and forward-slash separated",
            entry
        )));
    }
    for segment in entry.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(AppError::layout_error(format!(
                "'{}' contains an empty, '.' or '..' segment",
                entry
            )));
        }
    }
    Ok(())
}
