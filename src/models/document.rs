// file: src/models/document.rs
// description: document payload submitted for sentiment analysis
// reference: https://cloud.google.com/natural-language/docs/reference/rest/v1/documents

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    PlainText,
    Html,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::PlainText => write!(f, "PLAIN_TEXT"),
            DocumentType::Html => write!(f, "HTML"),
        }
    }
}

/// Text plus its content type, in the shape the API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// ISO-639-1 hint; the service auto-detects when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Document {
    pub fn new(content: impl Into<String>, doc_type: DocumentType) -> Self {
        Self {
            content: content.into(),
            doc_type,
            language: None,
        }
    }

    pub fn plain_text(content: impl Into<String>) -> Self {
        Self::new(content, DocumentType::PlainText)
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self::new(content, DocumentType::Html)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
