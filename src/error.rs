//! Error types shared by every phase of a validation run.
//!
//! `ItemError` is a finding about one workflow template and always ends up in
//! the report. `CheckError` is a misconfiguration that aborts the whole run.

use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Parse,
    Schema,
    Icon,
    Category,
    DuplicateName,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "Parse"),
            ErrorKind::Schema => write!(f, "Schema"),
            ErrorKind::Icon => write!(f, "Icon"),
            ErrorKind::Category => write!(f, "Category"),
            ErrorKind::DuplicateName => write!(f, "Duplicate name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemError {
    pub code: &'static str,
    pub kind: ErrorKind,
    pub message: String,
}

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ItemError {
    pub fn parse(code: &'static str, message: impl Into<String>) -> Self {
        ItemError {
            code,
            kind: ErrorKind::Parse,
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        ItemError {
            code: "S001",
            kind: ErrorKind::Schema,
            message: message.into(),
        }
    }

    pub fn icon(icon_name: &str) -> Self {
        ItemError {
            code: "I001",
            kind: ErrorKind::Icon,
            message: format!("no icon named {} found", icon_name),
        }
    }

    pub fn category(code: &'static str, message: impl Into<String>) -> Self {
        ItemError {
            code,
            kind: ErrorKind::Category,
            message: message.into(),
        }
    }

    pub fn duplicate_name(name: &str) -> Self {
        ItemError {
            code: "D001",
            kind: ErrorKind::DuplicateName,
            message: format!("workflow template name \"{}\" already exists", name),
        }
    }
}

/// Fatal errors. Any of these means the run itself is misconfigured, so no
/// report is produced.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("failed to read settings file {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to list workflow folder {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory {0} has no entry in the directory category map")]
    UnmappedDirectory(PathBuf),

    #[error("directory {path} matches more than one category map entry: {names}")]
    AmbiguousDirectory { path: PathBuf, names: String },

    #[error("failed to compile the properties schema: {0}")]
    Schema(String),
}
