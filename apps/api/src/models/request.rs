use serde::{Deserialize, Serialize};

use crate::models::profile::{empty_if_null, ResumeProfile};

/// Free-text career profile supplied by the caller. Never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub location: String,
    #[serde(rename = "linkedIn", default, deserialize_with = "empty_if_null")]
    pub linked_in: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub website: String,
    pub education: String,
    pub skills: String,
    pub experience: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub summary: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub job_target: String,
}

/// Input envelope shared by all three generation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRequest {
    pub student_info: StudentInfo,
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResumeResponse {
    pub fn ok(resume: ResumeProfile) -> Self {
        Self {
            success: true,
            resume: Some(resume),
            error: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverLetterResponse {
    pub success: bool,
    pub cover_letter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub success: bool,
    pub advice: String,
}
