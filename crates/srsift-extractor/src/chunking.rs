//! Recursive character chunking for large documents

use crate::config::ExtractorConfig;
use srsift_domain::{RawDocument, TextChunk};
use std::collections::VecDeque;

/// Separators tried in order, coarsest first
const SEPARATORS: &[&str] = &["\n\n", "\n", " ", ""];

/// Splits text into overlapping chunks of bounded size
///
/// Text is split on the coarsest separator it contains; pieces that are still
/// too large are split again with the next separator, down to single
/// characters. Small pieces are then merged back into chunks of at most
/// `chunk_size` characters, each re-using up to `chunk_overlap` characters of
/// trailing pieces from the previous chunk.
pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextChunker {
    /// Create a new text chunker
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            chunk_overlap,
        }
    }

    /// Chunker matching the extractor configuration
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Split a document into ordered chunks
    pub fn split(&self, document: &RawDocument) -> Vec<TextChunk> {
        self.chunk(document.content())
            .into_iter()
            .enumerate()
            .map(|(index, content)| TextChunk::new(index, content))
            .collect()
    }

    /// Chunk the given text
    ///
    /// Chunks are trimmed; blank input yields no chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        self.split_recursive(text, SEPARATORS)
    }

    fn split_recursive(&self, text: &str, separators: &[&str]) -> Vec<String> {
        let (separator, finer) = pick_separator(text, separators);

        let pieces: Vec<&str> = if separator.is_empty() {
            text.char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect()
        } else {
            text.split(separator).filter(|p| !p.is_empty()).collect()
        };

        let mut chunks = Vec::new();
        let mut pending: Vec<&str> = Vec::new();

        for piece in pieces {
            if char_len(piece) <= self.chunk_size {
                pending.push(piece);
                continue;
            }

            if !pending.is_empty() {
                chunks.extend(self.merge(&pending, separator));
                pending.clear();
            }

            // Oversized piece: go one separator finer
            chunks.extend(self.split_recursive(piece, finer));
        }

        if !pending.is_empty() {
            chunks.extend(self.merge(&pending, separator));
        }

        chunks
    }

    /// Combine pieces until they reach the size limit, carrying overlap forward
    fn merge(&self, pieces: &[&str], separator: &str) -> Vec<String> {
        let sep_len = char_len(separator);
        let mut chunks = Vec::new();
        let mut window: VecDeque<&str> = VecDeque::new();
        let mut total = 0;

        for &piece in pieces {
            let len = char_len(piece);
            let joiner = if window.is_empty() { 0 } else { sep_len };

            if !window.is_empty() && total + joiner + len > self.chunk_size {
                push_joined(&mut chunks, &window, separator);

                while !window.is_empty()
                    && (total > self.chunk_overlap || total + sep_len + len > self.chunk_size)
                {
                    if let Some(front) = window.pop_front() {
                        total -= char_len(front) + if window.is_empty() { 0 } else { sep_len };
                    }
                }
            }

            total += len + if window.is_empty() { 0 } else { sep_len };
            window.push_back(piece);
        }

        push_joined(&mut chunks, &window, separator);
        chunks
    }
}

fn pick_separator<'a, 's>(text: &str, separators: &'a [&'s str]) -> (&'s str, &'a [&'s str]) {
    for (i, &separator) in separators.iter().enumerate() {
        if separator.is_empty() || text.contains(separator) {
            return (separator, &separators[i + 1..]);
        }
    }
    ("", &[])
}

fn push_joined(chunks: &mut Vec<String>, window: &VecDeque<&str>, separator: &str) {
    let joined = window.iter().copied().collect::<Vec<_>>().join(separator);
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
