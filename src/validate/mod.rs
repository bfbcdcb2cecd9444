//! Rule evaluation for a single workflow template.
//!
//! Every rule runs and all findings are collected, except that a parse
//! failure ends evaluation of the item.

pub mod rules;
pub mod schema;

use tracing::debug;

use crate::config::Settings;
use crate::error::{CheckError, ItemError};
use crate::parse::types::{WorkflowItem, WorkflowProperties};
use crate::parse::parse_item;
use schema::PropertiesSchema;

/// Outcome of evaluating one item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Non-blank display name, if the properties carry one.
    pub name: Option<String>,
    pub errors: Vec<ItemError>,
}

/// Settings plus the compiled schema; shared by every item of a run.
pub struct RuleSet<'a> {
    settings: &'a Settings,
    schema: PropertiesSchema,
}

impl<'a> RuleSet<'a> {
    pub fn new(settings: &'a Settings) -> Result<Self, CheckError> {
        Ok(Self {
            settings,
            schema: PropertiesSchema::new()?,
        })
    }

    /// Evaluate one item. Content problems land in `Evaluation::errors`; only
    /// a directory with no (or an ambiguous) category mapping is an `Err`.
    pub fn evaluate(&self, item: &WorkflowItem) -> Result<Evaluation, CheckError> {
        let directory_category = self.settings.category_for(&item.directory)?;
        let mut evaluation = Evaluation::default();

        let value = match parse_item(item) {
            Ok(value) => value,
            Err(error) => {
                debug!(item = %item.id.display(), %error, "parse failed");
                evaluation.errors.push(error);
                return Ok(evaluation);
            }
        };

        let properties = WorkflowProperties::from_value(&value);
        evaluation.name = properties.display_name().map(str::to_owned);

        evaluation.errors.extend(self.schema.validate(&value));
        rules::i001_icon_resolves(&properties, &self.settings.icons_dir, &mut evaluation.errors);

        if self.is_exempt(item) {
            debug!(item = %item.id.display(), "exempt from category rule");
        } else {
            rules::c001_c002_primary_category_matches(
                item,
                &properties,
                directory_category,
                &mut evaluation.errors,
            );
        }

        debug!(
            item = %item.id.display(),
            errors = evaluation.errors.len(),
            "evaluated"
        );
        Ok(evaluation)
    }

    fn is_exempt(&self, item: &WorkflowItem) -> bool {
        item.id
            .to_string_lossy()
            .ends_with(self.settings.exempt_file.as_str())
    }
}

/// Evaluate a single item with a freshly compiled rule set.
pub fn evaluate(item: &WorkflowItem, settings: &Settings) -> Result<Evaluation, CheckError> {
    RuleSet::new(settings)?.evaluate(item)
}
