//! Prompt Builder: renders the user instruction for each artifact.
//!
//! Values are interpolated verbatim, with no escaping. Substitution is a single
//! pass over the template, so a student value that happens to contain
//! `{job_description}` is copied through literally and never expanded.

use crate::generation::pipeline::ArtifactKind;
use crate::generation::prompts::{
    ADVICE_PROMPT_TEMPLATE, COVER_LETTER_PROMPT_TEMPLATE, RESUME_INTERFACE,
    RESUME_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{
    GROUNDING_INSTRUCTION, IMPACT_INSTRUCTION, JSON_ONLY_INSTRUCTION,
};
use crate::models::request::ResumeRequest;

/// Builds the user instruction for `kind` from the inbound request.
pub fn build_prompt(kind: ArtifactKind, request: &ResumeRequest) -> String {
    let student = &request.student_info;
    let mut vars: Vec<(&str, &str)> = vec![
        ("name", student.name.as_str()),
        ("email", student.email.as_str()),
        ("phone", student.phone.as_str()),
        ("education", student.education.as_str()),
        ("skills", student.skills.as_str()),
        ("experience", student.experience.as_str()),
        ("job_description", request.job_description.as_str()),
        ("grounding_instruction", GROUNDING_INSTRUCTION),
        ("impact_instruction", IMPACT_INSTRUCTION),
    ];

    let template = match kind {
        ArtifactKind::Resume => {
            vars.extend([
                ("location", student.location.as_str()),
                ("linkedin", student.linked_in.as_str()),
                ("website", student.website.as_str()),
                ("summary", student.summary.as_str()),
                ("job_target", student.job_target.as_str()),
                ("interface", RESUME_INTERFACE),
                ("json_only_instruction", JSON_ONLY_INSTRUCTION),
            ]);
            RESUME_PROMPT_TEMPLATE
        }
        ArtifactKind::CoverLetter => COVER_LETTER_PROMPT_TEMPLATE,
        ArtifactKind::Advice => ADVICE_PROMPT_TEMPLATE,
    };

    render(template, &vars)
}

/// Replaces every `{key}` in `template` whose key is in `vars`. Unknown
/// `{...}` sequences are left untouched.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (close, *value))
        });

        match substitution {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
