//! LLM prompt templates for structured SRS extraction

use crate::error::PromptError;
use srsift_domain::{PromptContext, TextChunk};
use std::collections::BTreeMap;

/// Marker replaced by the concatenated document text
pub const PLACEHOLDER: &str = "{document_text}";

/// Template used when none is configured
pub const DEFAULT_TEMPLATE: &str = "srs-analysis";

/// Separator placed between chunks
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// A validated template, pre-split around its placeholder
///
/// Rendering is a single splice, so text inserted at the placeholder is
/// never scanned for further placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    name: String,
    head: String,
    tail: String,
}

impl PromptTemplate {
    /// Validate `text` and split it at its single placeholder
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, PromptError> {
        let name = name.into();
        let (head, tail) = match text.split_once(PLACEHOLDER) {
            Some(parts) => parts,
            None => return Err(PromptError::MissingPlaceholder(name)),
        };
        if tail.contains(PLACEHOLDER) {
            return Err(PromptError::DuplicatePlaceholder(name));
        }

        Ok(Self {
            head: head.to_string(),
            tail: tail.to_string(),
            name,
        })
    }

    /// Template name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `document_text` at the placeholder
    pub fn render(&self, document_text: &str) -> PromptContext {
        let mut prompt =
            String::with_capacity(self.head.len() + document_text.len() + self.tail.len());
        prompt.push_str(&self.head);
        prompt.push_str(document_text);
        prompt.push_str(&self.tail);
        PromptContext::new(prompt)
    }
}

/// Named prompt templates
///
/// Starts with the built-in templates; configuration may add more or
/// replace a built-in by reusing its name.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, String>,
}

impl TemplateRegistry {
    /// Registry holding only the built-in templates
    pub fn with_builtins() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect();
        Self { templates }
    }

    /// Add or replace a template
    pub fn register(&mut self, name: impl Into<String>, text: impl Into<String>) -> Result<(), PromptError> {
        let name = name.into();
        let text = text.into();
        PromptTemplate::parse(name.clone(), &text)?;
        self.templates.insert(name, text);
        Ok(())
    }

    /// Look up and validate a template by name
    pub fn get(&self, name: &str) -> Result<PromptTemplate, PromptError> {
        let text = self
            .templates
            .get(name)
            .ok_or_else(|| PromptError::UnknownTemplate(name.to_string()))?;
        PromptTemplate::parse(name, text)
    }

    /// Registered template names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Builds prompts for the LLM from document chunks
pub struct PromptBuilder {
    template: PromptTemplate,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    /// Join chunks in order and render them into the template
    pub fn build(&self, chunks: &[TextChunk]) -> PromptContext {
        self.template.render(&join_chunks(chunks))
    }

    /// Template this builder renders
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }
}

/// Concatenate chunk contents in order, separated by a blank line
pub fn join_chunks(chunks: &[TextChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.content.as_str())
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("srs-analysis", SRS_ANALYSIS_TEMPLATE),
    ("srs-compact", SRS_COMPACT_TEMPLATE),
];

const SRS_ANALYSIS_TEMPLATE: &str = r##"You are an AI specializing in Software Requirements Specification (SRS) analysis.

Extract the following structured information from the given document:
- *UI Components* (e.g., buttons, modals, navigation bars, tiles).
- *State Management Requirements* (e.g., session handling, API integration).
- *API Endpoints* (including method, headers, parameters, response).
- *User Roles & Permissions* (e.g., General Users vs. Managers).
- *Styling & Branding Guidelines* (if applicable).

The response *must* be in *valid JSON format*.

Example JSON output:
json
{
    "UI_Components": ["Dashboard", "Leave Request Form", "Pods Management"],
    "State_Management": ["NgRx", "Session Storage"],
    "API_Endpoints": [
        {
            "endpoint": "/api/lms/leaves/apply",
            "method": "POST",
            "headers": { "Authorization": "Bearer <token>" },
            "request_body": { "start_date": "YYYY-MM-DD", "end_date": "YYYY-MM-DD", "reason": "string" },
            "response": { "message": "Success", "status": "pending" }
        }
    ],
    "User_Roles": {
        "General_User": ["Apply for leave", "View leave balance"],
        "Manager": ["Approve/reject leave", "View team reports"]
    },
    "Styling": {
        "Primary_Color": "#FF5733",
        "Font": "Roboto"
    }
}

Extract and return the details in this JSON format.

Context: {document_text}

*Strictly output only JSON. Do not add any extra text.*
"##;

const SRS_COMPACT_TEMPLATE: &str = r#"Analyze the Software Requirements Specification below and return a single JSON object with the keys
"UI_Components" (array of strings), "State_Management" (array of strings),
"API_Endpoints" (array of objects with "endpoint", "method", "headers", "request_body", "response"),
"User_Roles" (object mapping role name to an array of permissions) and
"Styling" (object of design tokens such as "Primary_Color" and "Font").

Document:
{document_text}

Return ONLY the JSON object: no markdown code blocks, no explanations, no text before or after it.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(parts: &[&str]) -> Vec<TextChunk> {
        parts
            .iter()
            .enumerate()
            .map(|(i, p)| TextChunk::new(i, *p))
            .collect()
    }

    #[test]
    fn test_builtins_are_valid() {
        let registry = TemplateRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["srs-analysis", "srs-compact"]);
        for name in registry.names() {
            assert!(registry.get(name).is_ok(), "{} should parse", name);
        }
    }

    #[test]
    fn test_chunks_joined_in_order_with_blank_line() {
        let builder = PromptBuilder::new(TemplateRegistry::default().get(DEFAULT_TEMPLATE).unwrap());
        let prompt = builder.build(&chunks(&["A", "B", "C"]));

        assert!(prompt.as_str().contains("Context: A\n\nB\n\nC\n"));
        assert!(prompt.as_str().starts_with("You are an AI specializing"));
        assert!(prompt.as_str().ends_with("Do not add any extra text.*\n"));
    }

    #[test]
    fn test_default_prompt_carries_full_example() {
        let builder = PromptBuilder::new(TemplateRegistry::default().get(DEFAULT_TEMPLATE).unwrap());
        let prompt = builder.build(&chunks(&["Leave portal"]));
        let prompt = prompt.as_str();

        assert!(prompt.contains("\"Primary_Color\": \"#FF5733\""));
        assert!(prompt.contains("Example JSON output:\njson\n{\n    \"UI_Components\""));
        assert!(prompt.contains(
            "    \"Styling\": {\n        \"Primary_Color\": \"#FF5733\",\n        \"Font\": \"Roboto\"\n    }\n}\n\nExtract and return the details in this JSON format."
        ));
        assert!(prompt.contains("\"endpoint\": \"/api/lms/leaves/apply\""));
        assert!(prompt.contains("Context: Leave portal\n"));
    }

    #[test]
    fn test_prompt_includes_instructions() {
        let builder = PromptBuilder::new(TemplateRegistry::default().get("srs-analysis").unwrap());
        let prompt = builder.build(&chunks(&["Login page"]));
        assert!(prompt.as_str().contains("\"API_Endpoints\""));
        assert!(prompt.as_str().contains("\"User_Roles\""));
        assert!(prompt.as_str().contains("Strictly output only JSON"));
        assert!(!prompt.as_str().contains(PLACEHOLDER));
    }

    #[test]
    fn test_chunk_text_cannot_inject_placeholder() {
        let template = PromptTemplate::parse("t", "<<{document_text}>>").unwrap();
        let builder = PromptBuilder::new(template);
        let prompt = builder.build(&chunks(&["literal {document_text} and {{braces}}"]));
        assert_eq!(prompt.as_str(), "<<literal {document_text} and {{braces}}>>");
    }

    #[test]
    fn test_empty_chunk_list() {
        let template = PromptTemplate::parse("t", "[{document_text}]").unwrap();
        assert_eq!(PromptBuilder::new(template).build(&[]).as_str(), "[]");
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let mut registry = TemplateRegistry::with_builtins();
        let err = registry.register("bad", "Return JSON.").unwrap_err();
        assert_eq!(err, PromptError::MissingPlaceholder("bad".to_string()));
        assert!(registry.get("bad").is_err());
    }

    #[test]
    fn test_duplicate_placeholder_rejected() {
        let err = PromptTemplate::parse("twice", "{document_text} / {document_text}").unwrap_err();
        assert_eq!(err, PromptError::DuplicatePlaceholder("twice".to_string()));
    }

    #[test]
    fn test_unknown_template() {
        let registry = TemplateRegistry::default();
        assert_eq!(
            registry.get("nope").unwrap_err(),
            PromptError::UnknownTemplate("nope".to_string())
        );
    }

    #[test]
    fn test_register_replaces_builtin() {
        let mut registry = TemplateRegistry::with_builtins();
        registry.register("srs-compact", "JSON please: {document_text}").unwrap();

        let template = registry.get("srs-compact").unwrap();
        assert_eq!(template.name(), "srs-compact");
        assert_eq!(template.render("x").as_str(), "JSON please: x");
        assert_eq!(registry.names().len(), 2);
    }

    #[test]
    fn test_large_context_passes_through_unchanged() {
        let big = "word ".repeat(50_000);
        let template = PromptTemplate::parse("t", "{document_text}").unwrap();
        assert_eq!(template.render(&big).as_str(), big);
    }
}
