// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, SentimentError};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_text_not_empty(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(SentimentError::EmptyInput);
        }
        Ok(())
    }

    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            SentimentError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(SentimentError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SentimentError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_language_code(code: &str) -> Result<()> {
        let valid = !code.is_empty()
            && code.len() <= 8
            && code.chars().all(|c| c.is_ascii_alphabetic() || c == '-');
        if !valid {
            return Err(SentimentError::Validation(format!(
                "Invalid language code: {}",
                code
            )));
        }
        Ok(())
    }

    /// Char-boundary safe truncation for log previews.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((idx, _)) => format!("{}...", &text[..idx]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_text_not_empty() {
        assert!(Validator::validate_text_not_empty("content").is_ok());
        assert!(matches!(
            Validator::validate_text_not_empty(""),
            Err(SentimentError::EmptyInput)
        ));
        assert!(matches!(
            Validator::validate_text_not_empty("   \n"),
            Err(SentimentError::EmptyInput)
        ));
    }

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("review.txt");
        fs::write(&file_path, "test").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://language.googleapis.com").is_ok());
        assert!(Validator::validate_url("http://localhost:8080").is_ok());
        assert!(Validator::validate_url("language.googleapis.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_language_code() {
        assert!(Validator::validate_language_code("en").is_ok());
        assert!(Validator::validate_language_code("zh-Hant").is_ok());
        assert!(Validator::validate_language_code("").is_err());
        assert!(Validator::validate_language_code("en_US!").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("héllo wörld", 4), "héll...");
    }
}
