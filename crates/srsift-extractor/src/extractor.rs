//! Core Extractor implementation

use crate::chunking::TextChunker;
use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, SourceError};
use crate::prompt::{PromptBuilder, TemplateRegistry};
use crate::recovery::recover;
use crate::sink;
use crate::types::{ExtractionMetadata, ExtractionReport, ExtractionResult};
use srsift_domain::traits::{DocumentSource, LlmProvider};
use srsift_domain::TextChunk;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs one document through chunking, prompting, the model and recovery
///
/// Every step runs in sequence; configuration is fixed at construction.
pub struct Extractor<L, D>
where
    L: LlmProvider,
    D: DocumentSource<Error = SourceError>,
{
    llm_provider: L,
    source: D,
    config: ExtractorConfig,
    chunker: TextChunker,
    prompt_builder: PromptBuilder,
}

impl<L, D> Extractor<L, D>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
    D: DocumentSource<Error = SourceError>,
{
    /// Create a new Extractor
    ///
    /// Fails if the configuration is invalid or names a template that does
    /// not exist.
    pub fn new(llm_provider: L, source: D, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let mut registry = TemplateRegistry::with_builtins();
        for (name, text) in &config.templates {
            registry.register(name.clone(), text.clone())?;
        }
        let template = registry.get(&config.template)?;

        Ok(Self {
            llm_provider,
            source,
            chunker: TextChunker::from_config(&config),
            prompt_builder: PromptBuilder::new(template),
            config,
        })
    }

    /// The configuration this extractor was built with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Send already-chunked text to the model and recover its reply
    ///
    /// Only provider failures are errors; an unparseable reply is a
    /// [`ExtractionResult::Failure`].
    pub async fn extract_text(&self, chunks: &[TextChunk]) -> Result<ExtractionResult, ExtractorError> {
        let (result, _) = self.extract_chunks(chunks).await?;
        Ok(result)
    }

    /// Load `input`, extract, and write the result to `output`
    pub async fn run(&self, input: &Path, output: &Path) -> Result<ExtractionReport, ExtractorError> {
        let start_time = Instant::now();

        info!("Starting extraction for {}", input.display());

        let document = self.source.load(input)?;
        if document.is_blank() {
            warn!("{} contains no text", input.display());
        }

        let chunks = self.chunker.split(&document);
        info!("Split document into {} chunks", chunks.len());

        let (result, prompt_chars) = self.extract_chunks(&chunks).await?;
        sink::persist(&result, output)?;

        let metadata = ExtractionMetadata {
            source: input.to_path_buf(),
            output: output.to_path_buf(),
            model_name: self.llm_provider.model_name().to_string(),
            template: self.prompt_builder.template().name().to_string(),
            chunk_count: chunks.len(),
            prompt_chars,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete: {} in {} ms",
            if result.is_success() { "success" } else { "failure record" },
            metadata.processing_time_ms
        );

        Ok(ExtractionReport { result, metadata })
    }

    /// Prompt, generate and recover; also returns the prompt length in chars
    async fn extract_chunks(
        &self,
        chunks: &[TextChunk],
    ) -> Result<(ExtractionResult, usize), ExtractorError> {
        let prompt = self.prompt_builder.build(chunks);
        let prompt_chars = prompt.char_len();
        debug!("Prompt length: {} chars", prompt_chars);

        let response = self.call_llm(prompt.as_str()).await?;
        debug!("LLM response length: {} chars", response.chars().count());

        Ok((recover(&response), prompt_chars))
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: &str) -> Result<String, ExtractorError> {
        self.llm_provider
            .generate(prompt)
            .await
            .map_err(|e| ExtractorError::Llm(e.to_string()))
    }
}
