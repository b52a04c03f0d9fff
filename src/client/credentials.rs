// file: src/client/credentials.rs
// description: credential resolution and service account token exchange
// reference: https://developers.google.com/identity/protocols/oauth2/service-account

use crate::config::CredentialsConfig;
use crate::error::{Result, SentimentError};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CREDENTIALS_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const LANGUAGE_SCOPE: &str = "https://www.googleapis.com/auth/cloud-language";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The subset of a service account JSON key needed to mint an access token.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type")]
    pub key_type: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            SentimentError::Credentials(format!(
                "Cannot read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&raw).map_err(|e| match e {
            SentimentError::Credentials(msg) => {
                SentimentError::Credentials(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let key: ServiceAccountKey = serde_json::from_str(raw).map_err(|e| {
            SentimentError::Credentials(format!("Malformed service account key: {}", e))
        })?;

        if key.key_type != "service_account" {
            return Err(SentimentError::Credentials(format!(
                "Unsupported credential type '{}', expected 'service_account'",
                key.key_type
            )));
        }

        Ok(key)
    }

    fn claims(&self, issued_at: i64) -> AssertionClaims<'_> {
        AssertionClaims {
            iss: &self.client_email,
            scope: LANGUAGE_SCOPE,
            aud: &self.token_uri,
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        }
    }

    /// Signed RS256 JWT used as the `assertion` in the token request.
    pub fn sign_assertion(&self, issued_at: i64) -> Result<String> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.private_key_id.clone();

        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        Ok(encode(&header, &self.claims(issued_at), &key)?)
    }

    /// One-shot exchange of a signed assertion for an access token.
    pub async fn fetch_access_token(&self, http: &Client) -> Result<String> {
        let assertion = self.sign_assertion(Utc::now().timestamp())?;

        debug!(
            "Exchanging service account assertion for {} at {}",
            self.client_email, self.token_uri
        );

        let response = http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| {
                SentimentError::Transport(format!("Failed to reach token endpoint: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<TokenErrorResponse>(&body) {
                Ok(err) => match err.error_description {
                    Some(description) => format!("{}: {}", err.error, description),
                    None => err.error,
                },
                Err(_) => body,
            };
            return Err(SentimentError::Credentials(format!(
                "Token exchange failed with status {}: {}",
                status.as_u16(),
                message
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
            SentimentError::Credentials(format!("Malformed token response: {}", e))
        })?;

        Ok(token.access_token)
    }
}

#[derive(Clone)]
pub enum Credentials {
    ServiceAccount(ServiceAccountKey),
    AccessToken(String),
    ApiKey(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Credentials {
    /// Picks the first configured source: api key, access token, key file,
    /// then `env_path` (the caller's `GOOGLE_APPLICATION_CREDENTIALS` value).
    pub fn resolve(config: &CredentialsConfig, env_path: Option<PathBuf>) -> Result<Self> {
        if let Some(key) = non_empty(&config.api_key) {
            return Ok(Credentials::ApiKey(key.to_string()));
        }

        if let Some(token) = non_empty(&config.access_token) {
            return Ok(Credentials::AccessToken(token.to_string()));
        }

        let path = config
            .file
            .clone()
            .or(env_path)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                SentimentError::Credentials(format!(
                    "No credentials configured; set credentials.file, credentials.api_key or {}",
                    CREDENTIALS_ENV_VAR
                ))
            })?;

        ServiceAccountKey::from_file(&path).map(Credentials::ServiceAccount)
    }

    /// Reads the conventional environment variable without modifying it.
    pub fn env_path() -> Option<PathBuf> {
        std::env::var_os(CREDENTIALS_ENV_VAR).map(PathBuf::from)
    }

    /// Redacted description safe for logs.
    pub fn describe(&self) -> String {
        match self {
            Credentials::ServiceAccount(key) => match &key.project_id {
                Some(project) => format!("service account {} ({})", key.client_email, project),
                None => format!("service account {}", key.client_email),
            },
            Credentials::AccessToken(_) => "access token".to_string(),
            Credentials::ApiKey(key) => format!("api key ...{}", redact(key)),
        }
    }
}

fn redact(secret: &str) -> String {
    let tail: String = secret.chars().rev().take(4).collect();
    tail.chars().rev().collect()
}
