// file: src/output.rs
// description: stdout rendering of sentiment results

use crate::error::Result;
use crate::models::{SentenceSentiment, SentimentAnalysis, SentimentResult};

pub fn render_text(text: &str, sentiment: &SentimentResult) -> String {
    format!(
        "Text: {}\nSentiment: {}, {}",
        text, sentiment.score, sentiment.magnitude
    )
}

pub fn render_sentences(sentences: &[SentenceSentiment]) -> String {
    sentences
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            format!(
                "{:>3}. [{}] {}, {} ({}): {}",
                idx + 1,
                s.begin_offset,
                s.sentiment.score,
                s.sentiment.magnitude,
                s.sentiment.polarity(),
                s.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(text: &str, analysis: &SentimentAnalysis, pretty: bool) -> Result<String> {
    let value = serde_json::json!({
        "text": text,
        "sentiment": analysis.document_sentiment,
        "language": analysis.language,
        "sentences": analysis.sentences,
    });

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(rendered)
}
