//! Validation helpers for URLs and JSON payloads.

use serde_json::Value;
use url::Url;

/// Outcome of validating a URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlValidation {
    /// Whether the URL is usable
    pub valid: bool,
    /// Human-readable reason when invalid
    pub error: Option<String>,
}

impl UrlValidation {
    const fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Validates a request URL.
///
/// Absolute URLs must use http or https. Relative paths (`/`, `./`,
/// `../`) are accepted because requests may be resolved against an
/// environment base URL later.
#[must_use]
pub fn validate_url(url: &str) -> UrlValidation {
    if url.trim().is_empty() {
        return UrlValidation::fail("URL must not be empty");
    }

    match Url::parse(url) {
        Ok(parsed) => {
            if matches!(parsed.scheme(), "http" | "https") {
                UrlValidation::ok()
            } else {
                UrlValidation::fail("URL must use HTTP or HTTPS")
            }
        }
        Err(_) => {
            if url.starts_with('/') || url.starts_with("./") || url.starts_with("../") {
                UrlValidation::ok()
            } else {
                UrlValidation::fail("URL is not valid")
            }
        }
    }
}

/// Outcome of validating a JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonValidation {
    /// Whether the text parses (blank text is considered valid)
    pub valid: bool,
    /// Parse error message when invalid
    pub error: Option<String>,
    /// The parsed value when present
    pub data: Option<Value>,
}

/// Validates a JSON text. Blank input is valid with no data.
#[must_use]
pub fn validate_json(text: &str) -> JsonValidation {
    if text.trim().is_empty() {
        return JsonValidation {
            valid: true,
            error: None,
            data: None,
        };
    }

    match serde_json::from_str::<Value>(text) {
        Ok(value) => JsonValidation {
            valid: true,
            error: None,
            data: Some(value),
        },
        Err(e) => JsonValidation {
            valid: false,
            error: Some(format!("Invalid JSON: {e}")),
            data: None,
        },
    }
}
