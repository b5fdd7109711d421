//! Result and report types for extraction

use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Why the recovery engine could not produce a structured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// The reply contained no `{`...`}` span to try
    NoValidJsonFound,

    /// A brace span was found but did not parse after cleanup
    CleanupParseFailed,
}

impl FailureReason {
    /// Stable message written to the `error` field of a failure record
    pub fn message(&self) -> &'static str {
        match self {
            FailureReason::NoValidJsonFound => "No valid JSON object found in model response",
            FailureReason::CleanupParseFailed => "Failed to parse JSON after cleanup",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl FromStr for FailureReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [FailureReason::NoValidJsonFound, FailureReason::CleanupParseFailed]
            .into_iter()
            .find(|reason| reason.message() == s)
            .ok_or_else(|| format!("Unknown failure reason: {}", s))
    }
}

/// Outcome of interpreting one model reply
///
/// Always one of the two variants; the recovery engine never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    /// The reply (or a slice of it) parsed as JSON
    Success(Value),

    /// Nothing parseable was found
    Failure {
        /// What went wrong
        reason: FailureReason,
        /// The reply exactly as the model returned it
        raw_response: String,
    },
}

impl ExtractionResult {
    /// Build a failure record
    pub fn failure(reason: FailureReason, raw_response: impl Into<String>) -> Self {
        ExtractionResult::Failure {
            reason,
            raw_response: raw_response.into(),
        }
    }

    /// True for [`ExtractionResult::Success`]
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success(_))
    }

    /// The parsed value, if any
    pub fn value(&self) -> Option<&Value> {
        match self {
            ExtractionResult::Success(value) => Some(value),
            ExtractionResult::Failure { .. } => None,
        }
    }

    /// The failure reason, if any
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            ExtractionResult::Success(_) => None,
            ExtractionResult::Failure { reason, .. } => Some(*reason),
        }
    }

    /// JSON form written to disk
    ///
    /// Successes are written as the value itself; failures as
    /// `{"error": <message>, "raw_response": <text>}`.
    pub fn to_json(&self) -> Value {
        match self {
            ExtractionResult::Success(value) => value.clone(),
            ExtractionResult::Failure { reason, raw_response } => serde_json::json!({
                "error": reason.message(),
                "raw_response": raw_response,
            }),
        }
    }

    /// Inverse of [`ExtractionResult::to_json`]
    ///
    /// An object with exactly `error` and `raw_response` string fields, where
    /// `error` is a known reason message, reads back as a failure. Everything
    /// else is a success.
    pub fn from_json(value: Value) -> Self {
        if let Some(obj) = value.as_object() {
            if obj.len() == 2 {
                let reason = obj
                    .get("error")
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse::<FailureReason>().ok());
                let raw = obj.get("raw_response").and_then(Value::as_str);
                if let (Some(reason), Some(raw)) = (reason, raw) {
                    return ExtractionResult::failure(reason, raw);
                }
            }
        }
        ExtractionResult::Success(value)
    }
}

/// Everything a pipeline run reports back to its caller
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// The persisted result
    pub result: ExtractionResult,

    /// Metadata about the run
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction run
#[derive(Debug, Clone)]
pub struct ExtractionMetadata {
    /// Document that was read
    pub source: PathBuf,

    /// Artifact that was written
    pub output: PathBuf,

    /// Name of the LLM model used
    pub model_name: String,

    /// Name of the prompt template used
    pub template: String,

    /// Number of chunks the document was split into
    pub chunk_count: usize,

    /// Rendered prompt length in characters
    pub prompt_chars: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
