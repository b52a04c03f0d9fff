// file: src/client/language.rs
// description: Google Cloud Natural Language REST client for document sentiment
// reference: https://cloud.google.com/natural-language/docs/reference/rest/v1/documents/analyzeSentiment

use crate::client::SentimentService;
use crate::client::credentials::Credentials;
use crate::config::ServiceConfig;
use crate::error::{Result, SentimentError};
use crate::models::{Document, SentenceSentiment, SentimentAnalysis, SentimentResult};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const ANALYZE_SENTIMENT_PATH: &str = "/v1/documents:analyzeSentiment";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeSentimentRequest<'a> {
    document: &'a Document,
    encoding_type: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeSentimentResponse {
    #[serde(default)]
    document_sentiment: SentimentResult,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    sentences: Vec<SentenceData>,
}

#[derive(Debug, Deserialize)]
struct SentenceData {
    #[serde(default)]
    text: TextSpan,
    #[serde(default)]
    sentiment: SentimentResult,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextSpan {
    #[serde(default)]
    content: String,
    #[serde(default)]
    begin_offset: i32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl From<AnalyzeSentimentResponse> for SentimentAnalysis {
    fn from(response: AnalyzeSentimentResponse) -> Self {
        SentimentAnalysis {
            document_sentiment: response.document_sentiment,
            language: response.language.filter(|l| !l.is_empty()),
            sentences: response
                .sentences
                .into_iter()
                .map(|s| SentenceSentiment {
                    text: s.text.content,
                    begin_offset: s.text.begin_offset,
                    sentiment: s.sentiment,
                })
                .collect(),
        }
    }
}

#[derive(Clone)]
enum Authorization {
    ApiKey(String),
    Bearer(String),
}

#[derive(Clone)]
pub struct LanguageServiceClient {
    client: Client,
    endpoint: String,
    auth: Authorization,
}

impl LanguageServiceClient {
    /// Builds the HTTP client and turns `credentials` into request
    /// authorization. Service accounts are exchanged for a token here, once.
    pub async fn connect(config: &ServiceConfig, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SentimentError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        info!("Using credentials: {}", credentials.describe());

        let auth = match credentials {
            Credentials::ApiKey(key) => Authorization::ApiKey(key),
            Credentials::AccessToken(token) => Authorization::Bearer(token),
            Credentials::ServiceAccount(key) => {
                Authorization::Bearer(key.fetch_access_token(&client).await?)
            }
        };

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            auth,
        })
    }

    fn analyze_url(&self) -> String {
        format!("{}{}", self.endpoint, ANALYZE_SENTIMENT_PATH)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Authorization::ApiKey(key) => request.query(&[("key", key)]),
            Authorization::Bearer(token) => request.bearer_auth(token),
        }
    }
}

/// Maps a non-2xx reply to an error carrying the provider's own message.
fn service_error(status: StatusCode, body: &str) -> SentimentError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) if !envelope.error.message.is_empty() => {
                format!("{} ({})", envelope.error.message, code)
            }
            Some(code) => code,
            None => envelope.error.message,
        },
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => body.trim().to_string(),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SentimentError::Credentials(message),
        _ => SentimentError::Service {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl SentimentService for LanguageServiceClient {
    async fn analyze_sentiment(&self, document: &Document) -> Result<SentimentAnalysis> {
        let request = AnalyzeSentimentRequest {
            document,
            encoding_type: "UTF8",
        };

        debug!(
            "Requesting {} sentiment for {} bytes",
            document.doc_type,
            document.content.len()
        );

        let response = self
            .authorize(self.client.post(self.analyze_url()))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                SentimentError::Transport(format!(
                    "Failed to send Natural Language API request: {}",
                    e
                ))
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(service_error(status, &body));
        }

        let parsed: AnalyzeSentimentResponse = serde_json::from_str(&body)?;
        debug!(
            "Received document sentiment with {} sentence(s)",
            parsed.sentences.len()
        );

        Ok(parsed.into())
    }
}
