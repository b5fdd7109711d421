//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::RawDocument;
use std::future::Future;
use std::path::Path;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (srsift-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Send one prompt and return the model's raw text reply
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Name of the model behind this provider, for run metadata
    fn model_name(&self) -> &str;
}

/// Trait for reading source documents
///
/// Implemented by the application layer (srsift-extractor)
pub trait DocumentSource {
    /// Error type for load operations
    type Error;

    /// Load the document at `path`
    fn load(&self, path: &Path) -> Result<RawDocument, Self::Error>;
}
