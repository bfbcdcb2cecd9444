//! Fixed JSON schema for properties files (S001).

use jsonschema::{Draft, Validator};
use serde_json::{Value, json};

use crate::error::{CheckError, ItemError};

fn properties_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "description", "iconName", "categories"],
        "properties": {
            "name": { "type": "string", "minLength": 1 },
            "description": { "type": "string" },
            "creator": { "type": "string" },
            "iconName": { "type": "string" },
            "categories": {
                "anyOf": [
                    { "type": "array", "items": { "type": "string" } },
                    { "type": "null" }
                ]
            }
        }
    })
}

/// Compiled properties schema. Build once per run.
pub struct PropertiesSchema {
    validator: Validator,
}

impl PropertiesSchema {
    pub fn new() -> Result<Self, CheckError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(&properties_schema())
            .map_err(|e| CheckError::Schema(e.to_string()))?;
        Ok(Self { validator })
    }

    /// All schema violations in `properties`, one error each.
    pub fn validate(&self, properties: &Value) -> Vec<ItemError> {
        self.validator
            .iter_errors(properties)
            .map(|err| {
                let location = err.instance_path.to_string();
                let location = if location.is_empty() { "/".to_string() } else { location };
                ItemError::schema(format!("properties at {}: {}", location, err))
            })
            .collect()
    }
}
