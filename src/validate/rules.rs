//! Per-item content rules beyond the schema: icon resolution (I001) and
//! directory/category consistency (C001, C002).

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::DirectoryCategory;
use crate::error::ItemError;
use crate::parse::types::{WorkflowItem, WorkflowProperties};

/// Built-in icon reference: `octicon <identifier>`.
static OCTICON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^octicon\s+(.*)$").expect("octicon pattern is valid"));

pub fn i001_icon_resolves(
    properties: &WorkflowProperties,
    icons_dir: &Path,
    errors: &mut Vec<ItemError>,
) {
    let Some(icon_name) = properties.icon_name.as_deref() else {
        return;
    };

    let found = match OCTICON.captures(icon_name) {
        Some(caps) => {
            let identifier = caps.get(1).map_or("", |m| m.as_str());
            identifier.split('.').next().is_some_and(|id| !id.is_empty())
        }
        None => icons_dir.join(format!("{}.svg", icon_name)).exists(),
    };

    if !found {
        errors.push(ItemError::icon(icon_name));
    }
}

pub fn c001_c002_primary_category_matches(
    item: &WorkflowItem,
    properties: &WorkflowProperties,
    directory_category: &DirectoryCategory,
    errors: &mut Vec<ItemError>,
) {
    let Some(primary) = properties.primary_category() else {
        errors.push(ItemError::category(
            "C001",
            "categories cannot be null or empty",
        ));
        return;
    };

    if primary.to_lowercase() != directory_category.category.to_lowercase() {
        let directory = item
            .directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| item.directory.display().to_string());
        errors.push(ItemError::category(
            "C002",
            format!(
                "the first category for workflows in the {} directory must be {}, found {}",
                directory, directory_category.category, primary
            ),
        ));
    }
}
