//! Native request types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A query parameter key-value pair.
///
/// Supports enable/disable without deletion for UI convenience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
    /// Whether this parameter is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl QueryParam {
    /// Creates a new enabled query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled query parameter.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: false,
        }
    }
}

/// A single saved HTTP request.
///
/// The method is kept as a plain string: requests arrive from formats
/// that allow arbitrary verbs and this layer does not validate them.
/// Headers are a name-to-value map with last-write-wins semantics on
/// duplicate names. The map is sorted by name, so the order headers
/// were written in is not preserved; exporters render headers in name
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Unique identifier, generated at import time
    pub id: String,
    /// Display name
    pub name: String,
    /// HTTP verb string
    pub method: String,
    /// Absolute or templated URL
    pub url: String,
    /// Header name to value
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Body as serialized text, regardless of original encoding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Ordered query parameters
    #[serde(default)]
    pub query_params: Vec<QueryParam>,
    /// Flat folder grouping tag; folders are not first-class entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

impl Request {
    /// Creates a new request with a fresh id and the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: crate::id::generate_request_id(),
            name: name.into(),
            method: "GET".to_string(),
            url: String::new(),
            headers: BTreeMap::new(),
            body: None,
            query_params: Vec::new(),
            folder_id: None,
        }
    }

    /// Returns an iterator over enabled query parameters.
    pub fn enabled_query_params(&self) -> impl Iterator<Item = &QueryParam> {
        self.query_params.iter().filter(|p| p.enabled)
    }
}
