//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use srsift_extractor::{render_result, ExtractionReport, ExtractionResult};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Status lines for a finished run.
    ///
    /// A failure record is still a written artifact, so it is reported as a
    /// warning rather than an error.
    pub fn report(&self, report: &ExtractionReport) -> String {
        let meta = &report.metadata;
        let headline = match &report.result {
            ExtractionResult::Success(_) => {
                self.success(&format!("Extracted data saved to {}", meta.output.display()))
            }
            ExtractionResult::Failure { reason, .. } => self.warning(&format!(
                "{}; raw response saved to {}",
                reason,
                meta.output.display()
            )),
        };

        let details = self.info(&format!(
            "{} chunk(s) from {}, model {}, template {}, {} ms",
            meta.chunk_count,
            meta.source.display(),
            meta.model_name,
            meta.template,
            meta.processing_time_ms
        ));

        format!("{}\n{}", headline, details)
    }

    /// The artifact exactly as written to disk.
    pub fn format_result(&self, result: &ExtractionResult) -> Result<String> {
        let rendered = render_result(result)?;
        Ok(rendered.trim_end().to_string())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
