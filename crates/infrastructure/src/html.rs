//! HTML entity decoding.
//!
//! Postman's exporter HTML-escapes text fields, so a naively embedded
//! JSON body arrives as `{&quot;a&quot;:1}` and corrupts the payload.
//! Every user-visible string pulled out of a Postman import goes
//! through this decoder.

/// Decodes the common HTML entities Postman emits.
///
/// Handles `&quot;`, `&amp;`, `&lt;`, `&gt;`, `&#39;`, `&#x27;` and
/// `&#x2F;`. Text without entities passes through unchanged, so the
/// decoder is idempotent on already-decoded input.
#[must_use]
pub fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    text.replace("&quot;", "\"")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&#x2F;", "/")
}
