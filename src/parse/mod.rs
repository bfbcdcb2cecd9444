//! Parse phase: definition YAML and properties JSON → values.
//!
//! Failures here are per-item findings, not fatal errors.

pub mod types;

pub use types::*;

use std::path::Path;

use serde_json::Value;

use crate::error::ItemError;

/// Check that a definition file is readable, well-formed YAML. Its contents
/// beyond that are not inspected.
pub fn parse_definition(path: &Path) -> Result<(), ItemError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ItemError::parse(
            "P001",
            format!("failed to read definition {}: {}", path.display(), e),
        )
    })?;
    serde_yaml::from_str::<serde_yaml::Value>(&text).map_err(|e| {
        ItemError::parse(
            "P001",
            format!("definition {} is not valid YAML: {}", path.display(), e),
        )
    })?;
    Ok(())
}

/// Read and parse a properties file as JSON.
pub fn parse_properties(path: &Path) -> Result<Value, ItemError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ItemError::parse(
            "P002",
            format!("failed to read properties {}: {}", path.display(), e),
        )
    })?;
    serde_json::from_str(&text).map_err(|e| {
        ItemError::parse(
            "P002",
            format!("properties {} is not valid JSON: {}", path.display(), e),
        )
    })
}

/// Parse both files of an item. Stops at the first failure.
pub fn parse_item(item: &WorkflowItem) -> Result<Value, ItemError> {
    parse_definition(&item.id)?;
    parse_properties(&item.properties_path)
}
