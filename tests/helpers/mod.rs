#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;
use template_validator::config::{DirectoryCategory, Settings};
use template_validator::parse::WorkflowItem;

pub const DEFINITION: &str = "on: push\njobs:\n  build:\n    runs-on: ubuntu-latest\n";

// =============================================================================
// Corpus builder
// =============================================================================

/// A template repository laid out in a temp dir: one folder per mapped
/// directory, each with a `properties/` subfolder, plus an `icons/` folder.
pub struct Corpus {
    pub dir: TempDir,
    pub settings: Settings,
}

impl Corpus {
    /// `folders` are `(directory name, category)` pairs, scanned in order.
    pub fn new(folders: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = dir.path();

        for (name, _) in folders {
            fs::create_dir_all(root.join(name).join("properties")).expect("create folder");
        }
        fs::create_dir_all(root.join("icons")).expect("create icons dir");

        let settings = Settings {
            folders: folders.iter().map(|(name, _)| root.join(name)).collect(),
            allowed_categories: folders.iter().map(|(_, c)| (*c).to_string()).collect(),
            directory_category_map: folders
                .iter()
                .map(|(name, category)| DirectoryCategory {
                    name: (*name).into(),
                    category: (*category).into(),
                })
                .collect(),
            icons_dir: root.join("icons"),
            properties_dir: "properties".into(),
            exempt_file: "blank.yml".into(),
        };

        Corpus { dir, settings }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn folder(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `<folder>/<file>` and its properties file. Returns the item.
    pub fn add_template(&self, folder: &str, file: &str, properties: &str) -> WorkflowItem {
        self.add_raw(folder, file, DEFINITION, Some(properties))
    }

    pub fn add_raw(
        &self,
        folder: &str,
        file: &str,
        definition: &str,
        properties: Option<&str>,
    ) -> WorkflowItem {
        let folder = self.folder(folder);
        fs::write(folder.join(file), definition).expect("write definition");
        let item = WorkflowItem::new(&folder, Path::new(file), "properties");
        if let Some(properties) = properties {
            fs::write(&item.properties_path, properties).expect("write properties");
        }
        item
    }

    pub fn add_icon(&self, name: &str) {
        fs::write(
            self.root().join("icons").join(format!("{}.svg", name)),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"/>",
        )
        .expect("write icon");
    }
}

// =============================================================================
// Properties builders
// =============================================================================

pub fn properties_value(name: &str, icon: &str, categories: Value) -> Value {
    json!({
        "name": name,
        "description": "d",
        "iconName": icon,
        "categories": categories
    })
}

pub fn properties(name: &str, icon: &str, categories: Value) -> String {
    properties_value(name, icon, categories).to_string()
}
