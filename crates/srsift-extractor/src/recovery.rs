//! Lenient recovery of a JSON value from raw LLM output
//!
//! Models are asked for bare JSON but often wrap it in prose or markdown
//! fences. Recovery tries a direct parse first, then falls back to the
//! outermost `{`...`}` span. It never returns an error: anything it cannot
//! parse becomes an [`ExtractionResult::Failure`] carrying the raw reply.

use crate::types::{ExtractionResult, FailureReason};
use serde_json::Value;
use tracing::{debug, warn};

/// Turn an untrusted model reply into an [`ExtractionResult`]
///
/// Any syntactically valid JSON value is accepted; there is no schema check.
///
/// # Examples
///
/// ```
/// use srsift_extractor::{recover, ExtractionResult};
/// use serde_json::json;
///
/// let result = recover("Sure! Here you go: { \"a\": 1 } Hope that helps.");
/// assert_eq!(result, ExtractionResult::Success(json!({"a": 1})));
/// ```
pub fn recover(response: &str) -> ExtractionResult {
    let result = recover_inner(response);
    if let ExtractionResult::Failure { reason, .. } = &result {
        warn!(
            "Could not recover JSON from model response ({} chars): {}",
            response.chars().count(),
            reason
        );
    }
    result
}

fn recover_inner(response: &str) -> ExtractionResult {
    let trimmed = response.trim();

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => {
            debug!("Model response parsed directly");
            return ExtractionResult::Success(value);
        }
        Err(e) => debug!("Direct parse failed ({}), trying brace recovery", e),
    }

    // Lossy: also removes newlines and tabs inside string values.
    let cleaned: String = trimmed.chars().filter(|c| *c != '\n' && *c != '\t').collect();

    let span = match outermost_brace_span(&cleaned) {
        Some(span) => span,
        None => {
            debug!("No {{...}} span in model response");
            return ExtractionResult::failure(FailureReason::NoValidJsonFound, response);
        }
    };

    match serde_json::from_str::<Value>(span) {
        Ok(value) => {
            debug!("Recovered JSON from a {}-char brace span", span.chars().count());
            ExtractionResult::Success(value)
        }
        Err(e) => {
            debug!("Brace span did not parse: {}", e);
            ExtractionResult::failure(FailureReason::CleanupParseFailed, response)
        }
    }
}

/// Slice from the first `{` through the last `}`, if the first precedes the last
///
/// Nested or repeated objects are not disambiguated: the widest span wins.
fn outermost_brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}
