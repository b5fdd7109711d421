//! srsift Domain Layer
//!
//! Core value types and boundary traits for the extraction pipeline.
//! It has ZERO external dependencies and defines the concepts every other
//! crate in the workspace builds on.
//!
//! ## Key Concepts
//!
//! - **RawDocument**: source text plus the path it was read from
//! - **TextChunk**: a bounded, ordered slice of a document
//! - **PromptContext**: the rendered prompt sent to the model, created once per request
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure implementations (HTTP model clients, file readers) live in other crates
//! - Trait definitions for every external interaction

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod prompt;
pub mod traits;

// Re-exports for convenience
pub use document::{RawDocument, TextChunk};
pub use prompt::PromptContext;
