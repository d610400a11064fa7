//! Artifact pipeline: the shared core behind all three generation endpoints.
//!
//! Flow: build_prompt → CompletionClient::complete → (extract_json →
//!       validate_profile, resume only) → Artifact.
//!
//! Nothing is retried and nothing is substituted on failure: any error from
//! the completion service or the validator ends the request.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::prompt_builder::build_prompt;
use crate::generation::prompts::{ADVICE_SYSTEM, COVER_LETTER_SYSTEM, RESUME_SYSTEM};
use crate::generation::validator::validate_profile;
use crate::llm_client::extract::extract_json;
use crate::llm_client::{CompletionClient, LlmError};
use crate::models::profile::ResumeProfile;
use crate::models::request::{AdviceResponse, CoverLetterResponse, ResumeRequest, ResumeResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Resume,
    CoverLetter,
    Advice,
}

impl ArtifactKind {
    pub fn system_prompt(self) -> &'static str {
        match self {
            ArtifactKind::Resume => RESUME_SYSTEM,
            ArtifactKind::CoverLetter => COVER_LETTER_SYSTEM,
            ArtifactKind::Advice => ADVICE_SYSTEM,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Resume => "resume",
            ArtifactKind::CoverLetter => "cover_letter",
            ArtifactKind::Advice => "advice",
        }
    }
}

/// A generated artifact, ready to be sent back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Resume(ResumeProfile),
    CoverLetter(String),
    Advice(String),
}

impl IntoResponse for Artifact {
    fn into_response(self) -> Response {
        match self {
            Artifact::Resume(profile) => Json(ResumeResponse::ok(profile)).into_response(),
            Artifact::CoverLetter(cover_letter) => Json(CoverLetterResponse {
                success: true,
                cover_letter,
            })
            .into_response(),
            Artifact::Advice(advice) => Json(AdviceResponse {
                success: true,
                advice,
            })
            .into_response(),
        }
    }
}

/// Generates one artifact of `kind` for `request`.
pub async fn generate(
    client: &dyn CompletionClient,
    kind: ArtifactKind,
    request: &ResumeRequest,
) -> Result<Artifact, AppError> {
    let generation_id = Uuid::new_v4();
    let span = info_span!("generate", artifact = kind.label(), %generation_id);

    run(client, kind, request).instrument(span).await
}

async fn run(
    client: &dyn CompletionClient,
    kind: ArtifactKind,
    request: &ResumeRequest,
) -> Result<Artifact, AppError> {
    let prompt = build_prompt(kind, request);
    let reply = client.complete(kind.system_prompt(), &prompt).await?;

    // Only the resume reply is extracted and validated; the others are prose.
    match kind {
        ArtifactKind::Resume => {
            let profile = validate_profile(extract_json(&reply))?;
            info!(
                "Validated profile: {} education, {} experience, {} skills",
                profile.education.len(),
                profile.experience.len(),
                profile.skills.len()
            );
            Ok(Artifact::Resume(profile))
        }
        ArtifactKind::CoverLetter => prose(reply).map(Artifact::CoverLetter),
        ArtifactKind::Advice => prose(reply).map(Artifact::Advice),
    }
}

fn prose(reply: String) -> Result<String, AppError> {
    if reply.trim().is_empty() {
        return Err(LlmError::EmptyContent.into());
    }
    info!("Generated {} characters of prose", reply.len());
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::validator::ValidationError;
    use crate::models::fixtures::{
        fenced_profile_reply, request_1, request_2, StubClient, PROFILE_JSON,
    };

    #[tokio::test]
    async fn test_resume_happy_path_matches_stub_payload() {
        let client = StubClient::replying(fenced_profile_reply());
        let artifact = generate(&client, ArtifactKind::Resume, &request_1())
            .await
            .unwrap();

        let expected: ResumeProfile = serde_json::from_str(PROFILE_JSON).unwrap();
        assert_eq!(artifact, Artifact::Resume(expected));
    }

    #[tokio::test]
    async fn test_resume_uses_resume_system_role_and_prompt() {
        let client = StubClient::replying(PROFILE_JSON);
        generate(&client, ArtifactKind::Resume, &request_2())
            .await
            .unwrap();

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, RESUME_SYSTEM);
        assert!(calls[0].1.contains("John Doe"));
        assert!(calls[0].1.contains("interface ResumeProfile"));
    }

    #[tokio::test]
    async fn test_service_error_surfaces_without_profile() {
        let client = StubClient::failing("Rate limit reached for gpt-4o-mini");
        let err = generate(&client, ArtifactKind::Resume, &request_1())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(LlmError::Api { status: 429, .. })));
        assert!(err.to_string().contains("Rate limit reached"));
        assert_eq!(client.call_count(), 1, "failures must not be retried");
    }

    #[tokio::test]
    async fn test_unparseable_resume_reply_is_parse_error() {
        let client = StubClient::replying("I'm sorry, I can't produce JSON for this.");
        let err = generate(&client, ArtifactKind::Resume, &request_1())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidOutput(ValidationError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_incomplete_resume_reply_is_schema_error() {
        let client = StubClient::replying("```json\n{\"fullName\": \"Jane Doe\"}\n```");
        let err = generate(&client, ArtifactKind::Resume, &request_1())
            .await
            .unwrap_err();
        match err {
            AppError::InvalidOutput(ValidationError::Schema { path, .. }) => {
                assert_eq!(path, "email")
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cover_letter_returns_raw_text_unvalidated() {
        let letter = "Dear Hiring Manager,\n\nI am writing to apply... ```not json```";
        let client = StubClient::replying(letter);
        let artifact = generate(&client, ArtifactKind::CoverLetter, &request_1())
            .await
            .unwrap();

        assert_eq!(artifact, Artifact::CoverLetter(letter.to_string()));
        assert_eq!(client.calls.lock().unwrap()[0].0, COVER_LETTER_SYSTEM);
    }

    #[tokio::test]
    async fn test_advice_returns_raw_text() {
        let client = StubClient::replying("Advice:\n- Quantify your hackathon result");
        let artifact = generate(&client, ArtifactKind::Advice, &request_1())
            .await
            .unwrap();

        assert_eq!(
            artifact,
            Artifact::Advice("Advice:\n- Quantify your hackathon result".to_string())
        );
        assert_eq!(client.calls.lock().unwrap()[0].0, ADVICE_SYSTEM);
    }

    #[tokio::test]
    async fn test_blank_prose_is_empty_content_error() {
        let client = StubClient::replying("   \n");
        let err = generate(&client, ArtifactKind::Advice, &request_1())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_each_kind_maps_to_its_own_artifact() {
        for (kind, reply) in [
            (ArtifactKind::CoverLetter, "Dear Hiring Manager,"),
            (ArtifactKind::Advice, "- Lead with your ML internship"),
        ] {
            let client = StubClient::replying(reply);
            let artifact = generate(&client, kind, &request_2()).await.unwrap();
            let expected = match kind {
                ArtifactKind::CoverLetter => Artifact::CoverLetter(reply.to_string()),
                ArtifactKind::Advice => Artifact::Advice(reply.to_string()),
                ArtifactKind::Resume => unreachable!(),
            };
            assert_eq!(artifact, expected, "{}", kind.label());
        }
    }

    #[tokio::test]
    async fn test_blank_cover_letter_is_empty_content_error() {
        let client = StubClient::replying("");
        let err = generate(&client, ArtifactKind::CoverLetter, &request_2())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
    }
}
