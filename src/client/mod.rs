// file: src/client/mod.rs
// description: service boundary for sentiment analysis and its Google implementation
// reference: internal module structure

pub mod credentials;
pub mod language;

#[cfg(test)]
pub(crate) mod test_server;

pub use credentials::{Credentials, ServiceAccountKey};
pub use language::LanguageServiceClient;

use crate::error::Result;
use crate::models::{Document, SentimentAnalysis};
use async_trait::async_trait;

/// Anything that can score a document.
///
/// `LanguageServiceClient` talks to the real API; tests plug in fakes.
#[async_trait]
pub trait SentimentService: Send + Sync {
    async fn analyze_sentiment(&self, document: &Document) -> Result<SentimentAnalysis>;
}

#[async_trait]
impl<S: SentimentService + ?Sized> SentimentService for Box<S> {
    async fn analyze_sentiment(&self, document: &Document) -> Result<SentimentAnalysis> {
        (**self).analyze_sentiment(document).await
    }
}
