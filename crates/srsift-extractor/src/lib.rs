//! srsift Extractor
//!
//! Turns a requirements document into a structured JSON description using an LLM.
//!
//! # Overview
//!
//! The model is *asked*, not forced, to return JSON. Everything here is built
//! around that: the prompt contract states the expected shape, and the
//! recovery engine salvages a JSON value from whatever text comes back, or
//! records a typed failure alongside the raw reply.
//!
//! # Architecture
//!
//! ```text
//! Document → Chunker → PromptBuilder → LLM → recover() → persist()
//! ```
//!
//! # Key Features
//!
//! - **Recursive chunking** with configurable size and overlap
//! - **Named prompt templates**, extendable from TOML configuration
//! - **Lenient recovery**: direct parse, then outermost `{`...`}` span
//! - **Stable artifacts**: indented JSON that reads back into the same result
//!
//! # Example Usage
//!
//! ```no_run
//! use srsift_extractor::{Extractor, ExtractorConfig, FileSource};
//! use srsift_llm::MockProvider;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"UI_Components": ["Dashboard"]}"#);
//! let extractor = Extractor::new(llm, FileSource::new(), ExtractorConfig::default())?;
//!
//! let report = extractor
//!     .run(Path::new("srd.docx"), Path::new("extracted_data.json"))
//!     .await?;
//!
//! println!("Chunks: {}", report.metadata.chunk_count);
//! println!("Success: {}", report.result.is_success());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod prompt;
mod chunking;
mod recovery;
mod source;
mod sink;
mod extractor;


pub use error::{ExtractorError, PromptError, SinkError, SourceError};
pub use config::ExtractorConfig;
pub use types::{ExtractionMetadata, ExtractionReport, ExtractionResult, FailureReason};
pub use prompt::{
    join_chunks, PromptBuilder, PromptTemplate, TemplateRegistry, CHUNK_SEPARATOR,
    DEFAULT_TEMPLATE, PLACEHOLDER,
};
pub use chunking::TextChunker;
pub use recovery::recover;
pub use source::FileSource;
pub use sink::{load as load_result, persist as persist_result, render as render_result};
pub use extractor::Extractor;
