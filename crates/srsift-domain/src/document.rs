//! Source documents and the chunks cut from them

use std::fmt;
use std::path::{Path, PathBuf};

/// A loaded source document
///
/// Immutable once constructed: the content is only exposed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    source: PathBuf,
    content: String,
}

impl RawDocument {
    /// Create a document from its source path and text
    ///
    /// # Examples
    ///
    /// ```
    /// use srsift_domain::RawDocument;
    ///
    /// let doc = RawDocument::new("srd.txt", "Login screen with two buttons.");
    /// assert_eq!(doc.source().to_str(), Some("srd.txt"));
    /// assert_eq!(doc.char_count(), 30);
    /// ```
    pub fn new(source: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }

    /// Path the document was read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Full document text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length of the content in characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// True when the document holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// One ordered segment of a [`RawDocument`]
///
/// Neighbouring chunks may overlap. `index` is the zero-based position in
/// the sequence the chunker produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    /// Position in the chunk sequence
    pub index: usize,

    /// Chunk text
    pub content: String,
}

impl TextChunk {
    /// Create a new chunk
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
        }
    }

    /// Length of the chunk in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

impl fmt::Display for TextChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
