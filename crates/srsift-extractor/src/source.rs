//! Loading source documents from disk
//!
//! `.docx` files are unpacked and their paragraph text extracted; every other
//! extension is read as UTF-8 text.

use crate::error::SourceError;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use srsift_domain::traits::DocumentSource;
use srsift_domain::RawDocument;
use std::path::Path;
use tracing::{debug, info};

/// Extensions the loader refuses outright
const UNSUPPORTED_EXTENSIONS: &[&str] = &["doc", "pdf", "odt", "rtf"];

/// Separator between Word paragraphs in the extracted text
const PARAGRAPH_SEPARATOR: &str = "\n";

/// Reads Word (`.docx`) and UTF-8 text documents from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    /// Create a new file source
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for FileSource {
    type Error = SourceError;

    fn load(&self, path: &Path) -> Result<RawDocument, Self::Error> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let content = match extension.as_deref() {
            Some("docx") => read_docx_text(path)?,
            Some(ext) if UNSUPPORTED_EXTENSIONS.contains(&ext) => {
                return Err(SourceError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension: ext.to_string(),
                });
            }
            _ => std::fs::read_to_string(path).map_err(|source| SourceError::Read {
                path: path.to_path_buf(),
                source,
            })?,
        };

        let document = RawDocument::new(path, content);
        info!(
            "Loaded {} ({} chars)",
            path.display(),
            document.char_count()
        );
        Ok(document)
    }
}

/// Paragraph text of a Word document, one paragraph per line
///
/// Blank paragraphs are skipped. Tables, images and headers are ignored.
fn read_docx_text(path: &Path) -> Result<String, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let docx = docx_rs::read_docx(&bytes).map_err(|e| SourceError::Docx {
        path: path.to_path_buf(),
        message: format!("{:?}", e),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    debug!("{}: {} non-empty paragraphs", path.display(), paragraphs.len());
    Ok(paragraphs.join(PARAGRAPH_SEPARATOR))
}

/// Concatenated text of every run in a paragraph
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_docx(path: &Path, paragraphs: &[&[&str]]) {
        let mut docx = Docx::new();
        for runs in paragraphs {
            let mut paragraph = Paragraph::new();
            for text in *runs {
                paragraph = paragraph.add_run(Run::new().add_text(*text));
            }
            docx = docx.add_paragraph(paragraph);
        }
        let file = std::fs::File::create(path).unwrap();
        docx.build().pack(file).unwrap();
    }

    #[test]
    fn test_load_text_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Leave Management System\n\nManagers approve leave.").unwrap();

        let doc = FileSource::new().load(file.path()).unwrap();
        assert_eq!(doc.source(), file.path());
        assert_eq!(doc.content(), "Leave Management System\n\nManagers approve leave.");
    }

    #[test]
    fn test_load_docx_paragraphs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("srd.docx");
        write_docx(
            &path,
            &[
                &["Leave Management System"],
                &[],
                &["Managers ", "approve", " leave."],
                &["Primary colour: #FF5733"],
            ],
        );

        let doc = FileSource::new().load(&path).unwrap();
        assert_eq!(doc.source(), path.as_path());
        assert_eq!(
            doc.content(),
            "Leave Management System\nManagers approve leave.\nPrimary colour: #FF5733"
        );
    }

    #[test]
    fn test_docx_extension_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("SRD.DOCX");
        write_docx(&path, &[&["Dashboard"]]);

        let doc = FileSource::new().load(&path).unwrap();
        assert_eq!(doc.content(), "Dashboard");
    }

    #[test]
    fn test_corrupt_docx() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("srd.docx");
        std::fs::write(&path, b"PK\x03\x04 not really a zip").unwrap();

        let result = FileSource::new().load(&path);
        assert!(matches!(result, Err(SourceError::Docx { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = FileSource::new().load(Path::new("/nonexistent/srd.docx"));
        match result {
            Err(SourceError::NotFound(path)) => assert_eq!(path, Path::new("/nonexistent/srd.docx")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_legacy_doc_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("srd.DOC");
        std::fs::write(&path, b"\xd0\xcf\x11\xe0").unwrap();

        match FileSource::new().load(&path) {
            Err(SourceError::UnsupportedFormat { extension, .. }) => assert_eq!(extension, "doc"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let result = FileSource::new().load(file.path());
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = FileSource::new().load(dir.path());
        assert!(matches!(result, Err(SourceError::Read { .. })));
    }
}
