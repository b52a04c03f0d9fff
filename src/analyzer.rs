// file: src/analyzer.rs
// description: sentiment request invoker over an injected analysis service

use crate::client::SentimentService;
use crate::error::Result;
use crate::models::{Document, SentimentAnalysis, SentimentResult};
use crate::utils::{OperationTimer, Validator};
use std::time::Duration;

const DEFAULT_SLOW_REQUEST: Duration = Duration::from_secs(2);

pub struct SentimentAnalyzer<S> {
    service: S,
    slow_request: Duration,
}

impl<S: SentimentService> SentimentAnalyzer<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            slow_request: DEFAULT_SLOW_REQUEST,
        }
    }

    pub fn with_slow_request_threshold(mut self, threshold: Duration) -> Self {
        self.slow_request = threshold;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Scores `text` as a plain-text document.
    ///
    /// Empty or whitespace-only text fails with `SentimentError::EmptyInput`
    /// and never reaches the service. Service errors are returned as-is.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResult> {
        let analysis = self.analyze_document(Document::plain_text(text)).await?;
        Ok(analysis.document_sentiment)
    }

    pub async fn analyze_document(&self, document: Document) -> Result<SentimentAnalysis> {
        Validator::validate_text_not_empty(&document.content)?;

        let timer = OperationTimer::new("analyze_sentiment");
        let result = self.service.analyze_sentiment(&document).await;
        timer.warn_if_slow(self.slow_request, "Natural Language API call");
        timer.finish();

        result
    }
}
