use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // local@domain.tld，各段不可含空白
        Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex")
    })
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PortfolioError::config(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortfolioError::config(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(PortfolioError::config(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PortfolioError::config(
            field_name,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

/// 去除前後空白後至少 `min_chars` 個字元；失敗時回傳 `message`
pub fn validate_min_trimmed_length(value: &str, min_chars: usize, message: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() < min_chars {
        return Err(PortfolioError::validation(message));
    }
    Ok(())
}

pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && email_pattern().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8001").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("api.timeout_seconds", 10, 1).is_ok());
        assert!(validate_positive_number("api.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_min_trimmed_length_counts_after_trim() {
        assert!(validate_min_trimmed_length("Al", 2, "name too short").is_ok());
        assert!(validate_min_trimmed_length("  A  ", 2, "name too short").is_err());
        assert!(validate_min_trimmed_length("   ", 2, "name too short").is_err());

        let err = validate_min_trimmed_length("", 2, "name too short").unwrap_err();
        assert_eq!(err.user_message(), "name too short");
    }

    #[test]
    fn test_min_trimmed_length_counts_chars_not_bytes() {
        // two characters, four bytes
        assert!(validate_min_trimmed_length("éé", 2, "name too short").is_ok());
        assert!(validate_min_trimmed_length("é", 2, "name too short").is_err());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
    }
}
