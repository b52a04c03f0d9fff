// file: src/models/sentiment.rs
// description: sentiment results returned by the analysis service

use serde::{Deserialize, Serialize};
use std::fmt;

const NEUTRAL_BAND: f32 = 0.25;

/// Score is polarity in roughly [-1.0, 1.0]; magnitude is unsigned
/// emotional strength (>= 0.0) and grows with text length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub magnitude: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Negative,
    Neutral,
    Positive,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
            Polarity::Positive => write!(f, "positive"),
        }
    }
}

impl SentimentResult {
    pub fn new(score: f32, magnitude: f32) -> Self {
        Self { score, magnitude }
    }

    /// Display-only bucketing of `score`.
    pub fn polarity(&self) -> Polarity {
        if self.score <= -NEUTRAL_BAND {
            Polarity::Negative
        } else if self.score >= NEUTRAL_BAND {
            Polarity::Positive
        } else {
            Polarity::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSentiment {
    pub text: String,
    /// Byte offset into the submitted content (UTF-8 encoding).
    pub begin_offset: i32,
    pub sentiment: SentimentResult,
}

/// Full service response: document-level sentiment plus per-sentence detail.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub document_sentiment: SentimentResult,
    pub language: Option<String>,
    pub sentences: Vec<SentenceSentiment>,
}
