//! Validator: turns extracted model output into a `ResumeProfile`, or a
//! diagnostic explaining why it cannot.
//!
//! Two stages, all-or-nothing:
//! 1. Parse the text as JSON (`ValidationError::Parse`, with line/column).
//! 2. Walk the parsed value against the profile shape
//!    (`ValidationError::Schema`, with a field path like `education[1].school`).
//!
//! Cross-item id uniqueness is NOT enforced: duplicates are logged and accepted.

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::models::profile::ResumeProfile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Model output is not valid JSON (line {line}, column {column}): {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Model output does not match the resume schema at `{path}`: {message}")]
    Schema { path: String, message: String },
}

impl ValidationError {
    fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(e: serde_json::Error) -> Self {
        let full = e.to_string();
        let position = format!(" at line {} column {}", e.line(), e.column());
        ValidationError::Parse {
            line: e.line(),
            column: e.column(),
            message: full.strip_suffix(&position).unwrap_or(&full).to_string(),
        }
    }
}

/// Parses and validates extracted model output as a `ResumeProfile`.
pub fn validate_profile(text: &str) -> Result<ResumeProfile, ValidationError> {
    let value: Value = serde_json::from_str(text)?;

    check_profile(&value)?;

    // The walk above mirrors the serde shape, so this only fails if the two drift apart.
    let profile: ResumeProfile = serde_json::from_value(value)
        .map_err(|e| ValidationError::schema("$", e.to_string()))?;

    let duplicates = duplicate_ids(&profile);
    if !duplicates.is_empty() {
        warn!("Model output reuses item ids: {}", duplicates.join(", "));
    }

    Ok(profile)
}

/// Ids that appear more than once within the same list, as `list:id`.
pub fn duplicate_ids(profile: &ResumeProfile) -> Vec<String> {
    let mut duplicates = Vec::new();
    let lists: [(&str, Vec<&str>); 3] = [
        (
            "education",
            profile.education.iter().map(|e| e.id.as_str()).collect(),
        ),
        (
            "experience",
            profile.experience.iter().map(|e| e.id.as_str()).collect(),
        ),
        (
            "skills",
            profile.skills.iter().map(|s| s.id.as_str()).collect(),
        ),
    ];

    for (list, ids) in lists {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                duplicates.push(format!("{list}:{id}"));
            }
        }
    }
    duplicates
}

fn check_profile(value: &Value) -> Result<(), ValidationError> {
    let root = Object::new(value, String::new())?;

    for field in ["fullName", "email", "phone", "location", "summary"] {
        root.required_str(field)?;
    }
    for field in ["linkedIn", "website"] {
        root.optional_str(field)?;
    }

    for (index, item) in root.required_list("education")?.iter().enumerate() {
        let item = Object::new(item, root.indexed("education", index))?;
        item.id()?;
        for field in ["school", "degree", "fieldOfStudy", "startDate", "endDate"] {
            item.required_str(field)?;
        }
        for field in ["location", "gpa", "description"] {
            item.optional_str(field)?;
        }
        item.required_bool("current")?;
    }

    for (index, item) in root.required_list("experience")?.iter().enumerate() {
        let item = Object::new(item, root.indexed("experience", index))?;
        item.id()?;
        for field in ["company", "jobTitle", "startDate", "endDate"] {
            item.required_str(field)?;
        }
        for field in ["location", "description"] {
            item.optional_str(field)?;
        }
        item.required_bool("current")?;
        for (bullet_index, bullet) in item.required_list("bullets")?.iter().enumerate() {
            if !bullet.is_string() {
                return Err(ValidationError::schema(
                    item.indexed("bullets", bullet_index),
                    format!("expected a string, found {}", describe(bullet)),
                ));
            }
        }
    }

    for (index, item) in root.required_list("skills")?.iter().enumerate() {
        let item = Object::new(item, root.indexed("skills", index))?;
        item.id()?;
        item.required_str("name")?;
        item.required_str("category")?;
        item.optional_str("level")?;
    }

    Ok(())
}

/// A JSON object plus the path that led to it, for error reporting.
struct Object<'a> {
    fields: &'a Map<String, Value>,
    path: String,
}

impl<'a> Object<'a> {
    fn new(value: &'a Value, path: String) -> Result<Self, ValidationError> {
        match value.as_object() {
            Some(fields) => Ok(Self { fields, path }),
            None => {
                let shown = if path.is_empty() { "$".to_string() } else { path };
                Err(ValidationError::schema(
                    shown,
                    format!("expected an object, found {}", describe(value)),
                ))
            }
        }
    }

    fn field_path(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path, field)
        }
    }

    fn indexed(&self, field: &str, index: usize) -> String {
        format!("{}[{}]", self.field_path(field), index)
    }

    fn get(&self, field: &str) -> Result<&'a Value, ValidationError> {
        self.fields
            .get(field)
            .ok_or_else(|| ValidationError::schema(self.field_path(field), "missing required field"))
    }

    fn mismatch(&self, field: &str, expected: &str, found: &Value) -> ValidationError {
        ValidationError::schema(
            self.field_path(field),
            format!("expected {expected}, found {}", describe(found)),
        )
    }

    fn required_str(&self, field: &str) -> Result<&'a str, ValidationError> {
        let value = self.get(field)?;
        value
            .as_str()
            .ok_or_else(|| self.mismatch(field, "a string", value))
    }

    /// Absent and `null` are both accepted and read as "".
    fn optional_str(&self, field: &str) -> Result<(), ValidationError> {
        match self.fields.get(field) {
            None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
            Some(other) => Err(self.mismatch(field, "a string", other)),
        }
    }

    fn required_bool(&self, field: &str) -> Result<bool, ValidationError> {
        let value = self.get(field)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(field, "a boolean", value))
    }

    fn required_list(&self, field: &str) -> Result<&'a [Value], ValidationError> {
        let value = self.get(field)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.mismatch(field, "an array", value))
    }

    fn id(&self) -> Result<&'a str, ValidationError> {
        let id = self.required_str("id")?;
        if id.trim().is_empty() {
            return Err(ValidationError::schema(
                self.field_path("id"),
                "id must not be empty",
            ));
        }
        Ok(id)
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
