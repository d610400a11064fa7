// Shared prompt fragments used by more than one generator.
// Artifact-specific templates live in generation::prompts.

/// Keeps every artifact grounded in what the student actually supplied.
pub const GROUNDING_INSTRUCTION: &str = "Only use the information provided by the student. \
    Do not add extra experiences, projects, education, skills, or certifications.";

/// Shared tone guidance for resume and cover-letter writing.
pub const IMPACT_INSTRUCTION: &str = "Highlight accomplishments and achievements using strong \
    action verbs and quantifiable data and statistics.";

/// Structured-output rules for prompts whose reply is validated as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with a single valid JSON object only. \
    Do NOT include any text, headings, or explanations outside the JSON object. \
    Do NOT use markdown code fences.";
