//! The extract command.

use crate::cli::Cli;
use crate::error::Result;
use crate::output::Formatter;
use srsift_domain::traits::LlmProvider;
use srsift_extractor::{ExtractionReport, Extractor, ExtractorConfig, FileSource};
use tracing::info;

/// Run the pipeline with `llm` and print the outcome.
pub async fn execute_extract<L>(
    cli: &Cli,
    config: ExtractorConfig,
    llm: L,
    formatter: &Formatter,
) -> Result<ExtractionReport>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    info!("Using model {}", llm.model_name());

    let extractor = Extractor::new(llm, FileSource::new(), config)?;
    let report = extractor.run(&cli.input, &cli.output).await?;

    println!("{}", formatter.report(&report));
    if cli.print {
        println!("{}", formatter.format_result(&report.result)?);
    }

    Ok(report)
}
