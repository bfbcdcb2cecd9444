//! Corpus scan: enumerate definitions across all configured folders, evaluate
//! each, and flag display names that were already used by an earlier item.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::Settings;
use crate::error::{CheckError, ItemError};
use crate::parse::types::WorkflowItem;
use crate::validate::RuleSet;

const DEFINITION_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// One invalid template in the final report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowWithErrors {
    pub id: PathBuf,
    pub name: Option<String>,
    pub errors: Vec<ItemError>,
}

/// List the definition files directly inside `folder`, ordered by file name.
/// Only regular files count; symlinks and subdirectories are skipped.
pub fn discover(folder: &Path, settings: &Settings) -> Result<Vec<WorkflowItem>, CheckError> {
    let read_dir_err = |source| CheckError::ReadDir {
        path: folder.to_path_buf(),
        source,
    };

    let mut file_names = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        if !entry.file_type().map_err(read_dir_err)?.is_file() {
            continue;
        }
        let path = entry.path();
        let is_definition = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| DEFINITION_EXTENSIONS.contains(&e));
        if is_definition {
            file_names.push(PathBuf::from(entry.file_name()));
        }
    }
    file_names.sort();

    Ok(file_names
        .iter()
        .map(|name| WorkflowItem::new(folder, name, &settings.properties_dir))
        .collect())
}

/// Validate every template under the configured folders. Returns only the
/// templates that have errors, in folder order then file-name order.
pub fn scan(settings: &Settings) -> Result<Vec<WorkflowWithErrors>, CheckError> {
    for folder in &settings.folders {
        settings.category_for(folder)?;
    }

    let rules = RuleSet::new(settings)?;
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for folder in &settings.folders {
        let items = discover(folder, settings)?;
        info!(folder = %folder.display(), templates = items.len(), "scanning folder");

        for item in items {
            let mut evaluation = rules.evaluate(&item)?;

            if let Some(name) = &evaluation.name {
                if !seen_names.insert(name.clone()) {
                    evaluation.errors.push(ItemError::duplicate_name(name));
                }
            }

            if !evaluation.errors.is_empty() {
                result.push(WorkflowWithErrors {
                    id: item.id,
                    name: evaluation.name,
                    errors: evaluation.errors,
                });
            }
        }
    }

    Ok(result)
}
