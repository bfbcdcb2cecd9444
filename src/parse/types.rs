//! Types for one workflow template: where its files live and what its
//! properties say.

use std::path::{Path, PathBuf};

use serde_json::Value;

// =============================================================================
// WORKFLOW ITEM
// =============================================================================

/// One definition file discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowItem {
    /// Path of the definition file. Used as the item's identity in reports.
    pub id: PathBuf,
    pub properties_path: PathBuf,
    /// Folder containing the definition.
    pub directory: PathBuf,
}

impl WorkflowItem {
    /// Build an item for `file_name` inside `directory`. The properties file is
    /// `<directory>/<properties_dir>/<stem>.properties.json`.
    pub fn new(directory: &Path, file_name: &Path, properties_dir: &str) -> Self {
        let id = directory.join(file_name);
        let stem = file_name
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let properties_path = directory
            .join(properties_dir)
            .join(format!("{}.properties.json", stem));

        WorkflowItem {
            id,
            properties_path,
            directory: directory.to_path_buf(),
        }
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// Lenient view over a parsed properties document.
///
/// A field holding the wrong JSON type reads as absent here; schema validation
/// is what reports the type mismatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowProperties {
    pub name: Option<String>,
    pub description: Option<String>,
    pub creator: Option<String>,
    pub icon_name: Option<String>,
    /// `None` when missing, null, or not an array.
    pub categories: Option<Vec<Value>>,
}

impl WorkflowProperties {
    pub fn from_value(value: &Value) -> Self {
        let string = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);

        WorkflowProperties {
            name: string("name"),
            description: string("description"),
            creator: string("creator"),
            icon_name: string("iconName"),
            categories: value.get("categories").and_then(Value::as_array).cloned(),
        }
    }

    /// The name that takes part in the uniqueness check, if it is non-blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// First entry of `categories`, rendered as text.
    pub fn primary_category(&self) -> Option<String> {
        let first = self.categories.as_ref()?.first()?;
        Some(match first {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
