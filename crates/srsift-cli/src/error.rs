//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction pipeline error
    #[error(transparent)]
    Extractor(#[from] srsift_extractor::ExtractorError),

    /// Model provider could not be set up
    #[error("LLM provider error: {0}")]
    Llm(#[from] srsift_llm::LlmError),

    /// Rendering the written artifact failed
    #[error(transparent)]
    Sink(#[from] srsift_extractor::SinkError),
}
