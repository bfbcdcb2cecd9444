//! Run settings: which folders to scan and how folders map to categories.
//!
//! Loaded once per run from a JSON or YAML file, immutable afterwards.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::CheckError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryCategory {
    /// Trailing path of the directory, e.g. `ci` or `code-scanning`.
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub folders: Vec<PathBuf>,
    pub allowed_categories: Vec<String>,
    #[serde(alias = "folder_category_map")]
    pub directory_category_map: Vec<DirectoryCategory>,
    #[serde(default = "default_icons_dir")]
    pub icons_dir: PathBuf,
    #[serde(default = "default_properties_dir")]
    pub properties_dir: String,
    /// Definitions whose path ends with this are not held to the category rule.
    #[serde(default = "default_exempt_file")]
    pub exempt_file: String,
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from("icons")
}

fn default_properties_dir() -> String {
    "properties".into()
}

fn default_exempt_file() -> String {
    "blank.yml".into()
}

impl Settings {
    /// Read settings from `path`. YAML is used for `.yml`/`.yaml`, JSON for
    /// anything else. Relative folders and the icon directory are resolved
    /// against the directory holding the settings file.
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        let text = std::fs::read_to_string(path).map_err(|source| CheckError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yml") | Some("yaml")
        );
        let settings: Settings = if is_yaml {
            serde_yaml::from_str(&text).map_err(|e| CheckError::SettingsParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&text).map_err(|e| CheckError::SettingsParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let settings = settings.relative_to(base);
        settings.check()?;
        Ok(settings)
    }

    /// Resolve relative paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for folder in &mut self.folders {
            if folder.is_relative() {
                *folder = base.join(&*folder);
            }
        }
        if self.icons_dir.is_relative() {
            self.icons_dir = base.join(&self.icons_dir);
        }
        self
    }

    pub fn check(&self) -> Result<(), CheckError> {
        if self.folders.is_empty() {
            return Err(CheckError::InvalidSettings(
                "at least one workflow folder must be configured".into(),
            ));
        }
        if self.properties_dir.trim().is_empty() {
            return Err(CheckError::InvalidSettings(
                "properties_dir must not be empty".into(),
            ));
        }

        for entry in &self.directory_category_map {
            let allowed = self
                .allowed_categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&entry.category));
            if !allowed {
                warn!(
                    directory = %entry.name,
                    category = %entry.category,
                    "mapped category is not in allowed_categories"
                );
            }
        }
        Ok(())
    }

    /// The category assigned to `directory`. Exactly one map entry must match.
    pub fn category_for(&self, directory: &Path) -> Result<&DirectoryCategory, CheckError> {
        let mut matches = self
            .directory_category_map
            .iter()
            .filter(|entry| directory.ends_with(&entry.name));

        let Some(first) = matches.next() else {
            return Err(CheckError::UnmappedDirectory(directory.to_path_buf()));
        };

        let rest: Vec<&DirectoryCategory> = matches.collect();
        if !rest.is_empty() {
            let names = std::iter::once(first)
                .chain(rest)
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(CheckError::AmbiguousDirectory {
                path: directory.to_path_buf(),
                names,
            });
        }
        Ok(first)
    }
}
