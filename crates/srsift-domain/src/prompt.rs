//! The rendered prompt handed to a model

use std::fmt;

/// A fully rendered prompt
///
/// Built once per extraction request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext(String);

impl PromptContext {
    /// Wrap an already-rendered prompt string
    pub fn new(rendered: impl Into<String>) -> Self {
        Self(rendered.into())
    }

    /// Borrow the prompt text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prompt length in characters
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume the context and return the prompt text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PromptContext {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
