//! Follow-up question generation: a second completion call conditioned on
//! the exchange that just completed, plus the parsing of its output.

use crate::client::{CompletionBackend, CompletionRequest};
use crate::error::CompletionError;

const FOLLOW_UP_SYSTEM_PROMPT: &str = "Generate 3 short, relevant follow-up questions about ski safety for the same resort mentioned in the conversation. If no resort was specified, make the questions general. Return only the questions, one per line.";

/// Ask the provider for up to three follow-up questions for the exchange
/// `(question, answer)`. The answer passed in is the formatted one, so the
/// provider sees exactly what the user saw.
pub async fn suggest_follow_ups(
    backend: &dyn CompletionBackend,
    question: &str,
    answer: &str,
) -> Result<Vec<String>, CompletionError> {
    let request = CompletionRequest {
        system_prompt: FOLLOW_UP_SYSTEM_PROMPT.to_string(),
        user_content: format!(
            "Previous question: \"{question}\"\n\nPrevious response: \"{answer}\""
        ),
        temperature: 0.3,
        max_tokens: 100,
    };

    let raw = backend.complete(&request).await?;
    Ok(parse_follow_ups(&raw))
}

/// Split raw provider output into follow-up questions.
///
/// Lines that are blank after trimming are dropped; at most the first three
/// survivors are kept, in original order and verbatim. Fewer than three
/// usable lines yield fewer questions, never padding.
pub fn parse_follow_ups(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(3)
        .map(str::to_string)
        .collect()
}
