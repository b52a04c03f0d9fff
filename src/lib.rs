// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analyzer;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod utils;

pub use analyzer::SentimentAnalyzer;
pub use client::{Credentials, LanguageServiceClient, SentimentService, ServiceAccountKey};
pub use config::{Config, CredentialsConfig, ServiceConfig};
pub use error::{Result, SentimentError};
pub use models::{
    Document, DocumentType, Polarity, SentenceSentiment, SentimentAnalysis, SentimentResult,
};
pub use utils::{OperationTimer, Validator};
