//! Recovers a JSON payload from raw completion text.
//!
//! Models often wrap structured output in a fenced code block even when told
//! not to. Only three shapes are recognized; anything else is returned as-is
//! and fails later as a parse error.

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// The fencing convention found in a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    /// "```json" ... "```"
    TaggedJson,
    /// "```" ... "```"
    Bare,
    Unfenced,
}

impl Fence {
    pub fn detect(text: &str) -> Self {
        if text.contains(JSON_FENCE) {
            Fence::TaggedJson
        } else if text.contains(FENCE) {
            Fence::Bare
        } else {
            Fence::Unfenced
        }
    }
}

/// Returns the trimmed payload inside the first fenced block, or the whole
/// trimmed text when there is no fence. An unterminated fence yields
/// everything after the opening marker.
pub fn extract_json(text: &str) -> &str {
    let payload = match Fence::detect(text) {
        Fence::TaggedJson => fenced_body(text, JSON_FENCE),
        Fence::Bare => fenced_body(text, FENCE),
        Fence::Unfenced => text,
    };
    payload.trim()
}

fn fenced_body<'a>(text: &'a str, opener: &str) -> &'a str {
    let Some(start) = text.find(opener) else {
        return text;
    };
    let body = &text[start + opener.len()..];
    match body.find(FENCE) {
        Some(end) => &body[..end],
        None => body,
    }
}
