//! Structured resume profile: the only artifact the completion service must
//! return in a machine-readable shape.
//!
//! Field names follow the camelCase JSON the frontend renders. Optional
//! strings are plain `String`s that default to empty when absent or `null`,
//! so a profile serializes back into exactly the shape it was validated from.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub location: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub gpa: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub description: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub job_title: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub description: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: String,
    pub name: String,
    /// Free-form grouping label, e.g. "Frontend" or "Soft Skills".
    pub category: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "linkedIn", default, deserialize_with = "empty_if_null")]
    pub linked_in: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub website: String,
    pub summary: String,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<SkillItem>,
}

/// Treats an explicit JSON `null` the same as a missing optional string.
pub(crate) fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
