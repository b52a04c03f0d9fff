// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod sentiment;

pub use document::{Document, DocumentType};
pub use sentiment::{Polarity, SentenceSentiment, SentimentAnalysis, SentimentResult};
