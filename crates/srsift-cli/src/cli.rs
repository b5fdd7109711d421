//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// srsift - Extract structured requirements from a document with an LLM.
#[derive(Debug, Parser)]
#[command(name = "srsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source document (.docx or plain UTF-8 text)
    #[arg(short, long, default_value = "srd.docx")]
    pub input: PathBuf,

    /// Where to write the extracted JSON
    #[arg(short, long, default_value = "extracted_data.json")]
    pub output: PathBuf,

    /// Prompt template name (overrides the config file)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Model identifier
    #[arg(short, long, env = "GROQ_MODEL")]
    pub model: Option<String>,

    /// Model request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Extractor configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the written JSON to stdout
    #[arg(long)]
    pub print: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["srsift"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("srd.docx"));
        assert_eq!(cli.output, PathBuf::from("extracted_data.json"));
        assert!(cli.template.is_none());
        assert!(cli.config.is_none());
        assert!(cli.timeout.is_none());
        assert!(!cli.print);
        assert!(!cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "srsift",
            "-i",
            "docs/lms.txt",
            "-o",
            "out/lms.json",
            "-t",
            "srs-compact",
            "-m",
            "llama3-70b-8192",
            "-c",
            "srsift.toml",
            "--timeout",
            "30",
            "--print",
            "--no-color",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.input, PathBuf::from("docs/lms.txt"));
        assert_eq!(cli.output, PathBuf::from("out/lms.json"));
        assert_eq!(cli.template.as_deref(), Some("srs-compact"));
        assert_eq!(cli.model.as_deref(), Some("llama3-70b-8192"));
        assert_eq!(cli.config, Some(PathBuf::from("srsift.toml")));
        assert_eq!(cli.timeout, Some(30));
        assert!(cli.print && cli.no_color && cli.verbose);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["srsift", "--retries", "3"]).is_err());
    }
}
