//! srsift - Extract structured requirements from a document with an LLM.

use clap::Parser;
use srsift_cli::commands;
use srsift_cli::{logging, Cli, Formatter, Settings};
use srsift_llm::GroqProvider;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> srsift_cli::Result<()> {
    // Load .env before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Credentials are checked before the document is touched
    let settings = Settings::resolve(&cli)?;
    let formatter = Formatter::new(!cli.no_color);

    let provider = GroqProvider::new(settings.groq)?;
    commands::execute_extract(&cli, settings.extractor, provider, &formatter).await?;

    Ok(())
}
