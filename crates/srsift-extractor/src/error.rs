//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
///
/// A malformed model reply is not an error: it becomes
/// [`ExtractionResult::Failure`](crate::ExtractionResult::Failure).
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Source document could not be loaded
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Result could not be persisted
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// Prompt template problem
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised while reading a source document
#[derive(Error, Debug)]
pub enum SourceError {
    /// Path does not exist
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File type the loader cannot read
    #[error("Unsupported document format '{extension}' for {}; convert it to .docx or plain text", .path.display())]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
        /// Lower-cased file extension
        extension: String,
    },

    /// Word document could not be parsed
    #[error("Failed to parse Word document {}: {message}", .path.display())]
    Docx {
        /// Path being parsed
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// I/O or encoding failure
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

/// Errors raised while writing or reading back an extraction artifact
#[derive(Error, Debug)]
pub enum SinkError {
    /// Artifact could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Artifact could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Artifact path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors in prompt template handling
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromptError {
    /// No template registered under this name
    #[error("Unknown prompt template '{0}'")]
    UnknownTemplate(String),

    /// Template lacks the document placeholder
    #[error("Template '{0}' has no {{document_text}} placeholder")]
    MissingPlaceholder(String),

    /// Template has the placeholder more than once
    #[error("Template '{0}' has more than one {{document_text}} placeholder")]
    DuplicatePlaceholder(String),
}
