//! Run configuration: config file, CLI overrides and credentials.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use srsift_extractor::ExtractorConfig;
use srsift_llm::GroqConfig;
use tracing::debug;

/// Everything a run needs before it touches the document.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Chunking and template settings
    pub extractor: ExtractorConfig,

    /// Model connection settings
    pub groq: GroqConfig,
}

impl Settings {
    /// Resolve settings from the CLI and the process environment.
    ///
    /// Call after `.env` has been loaded.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    /// Resolve settings using `lookup` for environment variables.
    ///
    /// Precedence is CLI flag, then config file, then built-in default. A
    /// missing API key fails here, before any document is read.
    pub fn resolve_with<F>(cli: &Cli, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut extractor = match &cli.config {
            Some(path) => ExtractorConfig::from_file(path).map_err(CliError::Config)?,
            None => ExtractorConfig::default(),
        };
        if let Some(template) = &cli.template {
            extractor.template = template.clone();
        }
        extractor.validate().map_err(CliError::Config)?;

        let mut groq = GroqConfig::from_lookup(lookup).map_err(|e| CliError::Config(e.to_string()))?;
        if let Some(model) = &cli.model {
            groq = groq.with_model(model.clone());
        }
        if let Some(timeout_secs) = cli.timeout {
            if timeout_secs == 0 {
                return Err(CliError::Config("timeout must be at least 1 second".to_string()));
            }
            groq = groq.with_timeout_secs(timeout_secs);
        }

        debug!(
            "Resolved settings: template={}, chunk_size={}, chunk_overlap={}, model={}, timeout={}s",
            extractor.template, extractor.chunk_size, extractor.chunk_overlap, groq.model, groq.timeout_secs
        );

        Ok(Self { extractor, groq })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn with_key(key: &str) -> Option<String> {
        match key {
            "GROQ_API_KEY" => Some("gsk_test".to_string()),
            _ => None,
        }
    }

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["srsift"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve_with(&parse(&["-m", "llama3-8b-8192"]), with_key).unwrap();
        assert_eq!(settings.extractor, ExtractorConfig::default());
        assert_eq!(settings.groq.api_key, "gsk_test");
        assert_eq!(settings.groq.model, "llama3-8b-8192");
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = Settings::resolve_with(&parse(&[]), |_| None);
        match result {
            Err(CliError::Config(message)) => assert!(message.contains("GROQ_API_KEY")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_api_key_is_config_error() {
        let result = Settings::resolve_with(&parse(&[]), |key| {
            (key == "GROQ_API_KEY").then(|| "   ".to_string())
        });
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_endpoint_override() {
        let settings = Settings::resolve_with(&parse(&[]), |key| match key {
            "GROQ_API_KEY" => Some("gsk_test".to_string()),
            "GROQ_API_BASE" => Some("http://localhost:8080/v1/".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.groq.endpoint, "http://localhost:8080/v1");
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chunk_size = 500\nchunk_overlap = 50\ntemplate = \"srs-compact\"").unwrap();
        let path = file.path().to_str().unwrap();

        let from_file = Settings::resolve_with(&parse(&["-c", path]), with_key).unwrap();
        assert_eq!(from_file.extractor.chunk_size, 500);
        assert_eq!(from_file.extractor.chunk_overlap, 50);
        assert_eq!(from_file.extractor.template, "srs-compact");

        let overridden =
            Settings::resolve_with(&parse(&["-c", path, "-t", "srs-analysis"]), with_key).unwrap();
        assert_eq!(overridden.extractor.chunk_size, 500);
        assert_eq!(overridden.extractor.template, "srs-analysis");
    }

    #[test]
    fn test_invalid_chunking_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chunk_size = 100\nchunk_overlap = 100").unwrap();

        let result = Settings::resolve_with(&parse(&["-c", file.path().to_str().unwrap()]), with_key);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_timeout_override() {
        let default = Settings::resolve_with(&parse(&[]), with_key).unwrap();
        assert_eq!(default.groq.timeout_secs, srsift_llm::groq::DEFAULT_TIMEOUT_SECS);

        let settings = Settings::resolve_with(&parse(&["--timeout", "15"]), with_key).unwrap();
        assert_eq!(settings.groq.timeout_secs, 15);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Settings::resolve_with(&parse(&["--timeout", "0"]), with_key);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let result = Settings::resolve_with(&parse(&["-c", "/nonexistent/srsift.toml"]), with_key);
        match result {
            Err(CliError::Config(message)) => assert!(message.contains("/nonexistent/srsift.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chunk_size = \"big\"").unwrap();

        let result = Settings::resolve_with(&parse(&["-c", file.path().to_str().unwrap()]), with_key);
        match result {
            Err(CliError::Config(message)) => assert!(message.contains("Failed to parse TOML")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
