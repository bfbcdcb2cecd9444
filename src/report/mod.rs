//! Rendering of the aggregate report for CI logs, terminals, or tooling.

pub mod writer;

use crate::error::CheckError;
use crate::scan::WorkflowWithErrors;
use writer::ReportWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// GitHub Actions workflow commands (groups and error annotations)
    Github,
    /// Plain text for terminals
    Text,
    /// JSON array of invalid templates
    Json,
}

pub const SUCCESS_MESSAGE: &str = "Found no workflow templates with errors";

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub items: Vec<WorkflowWithErrors>,
}

impl Report {
    pub fn new(items: Vec<WorkflowWithErrors>) -> Self {
        Self { items }
    }

    pub fn is_success(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Found {} workflow templates with errors", self.items.len())
    }

    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Github => Ok(self.render_github()),
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => {
                let mut json = serde_json::to_string_pretty(&self.items)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    fn render_github(&self) -> String {
        let mut w = ReportWriter::new();
        if self.is_success() {
            w.line(SUCCESS_MESSAGE);
            return w.finish();
        }

        w.command("group", &[], &format!("{}:", self.summary()));
        for item in &self.items {
            let id = item.id.display().to_string();
            let errors = item
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            w.command(
                "error",
                &[("file", id.as_str())],
                &format!("Errors in {} - {}", id, errors),
            );
        }
        w.command("endgroup", &[], "");
        w.command("error", &[], &self.summary());
        w.finish()
    }

    fn render_text(&self) -> String {
        let mut w = ReportWriter::new();
        if self.is_success() {
            w.line(SUCCESS_MESSAGE);
            return w.finish();
        }

        w.line(&format!("{}:", self.summary()));
        for item in &self.items {
            match &item.name {
                Some(name) => w.line(&format!("{} ({})", item.id.display(), name)),
                None => w.line(&item.id.display().to_string()),
            }
            w.indent();
            for error in &item.errors {
                w.line(&format!("[{}] {}", error.code, error.message));
            }
            w.dedent();
        }
        w.finish()
    }
}

/// Render a fatal error that stopped the run before a report existed.
pub fn render_fatal(error: &CheckError, format: ReportFormat) -> String {
    let message = format!("Unhandled error while validating workflow templates: {}", error);
    let mut w = ReportWriter::new();
    match format {
        ReportFormat::Github => w.command("error", &[], &message),
        ReportFormat::Text => w.line(&message),
        ReportFormat::Json => {
            w.line(&serde_json::json!({ "fatal": message }).to_string());
        }
    }
    w.finish()
}
