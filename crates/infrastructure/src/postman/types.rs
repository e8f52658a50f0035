//! Postman Collection v2.1 type definitions.
//!
//! These types represent the wire format of a Postman Collection v2.1
//! JSON file. `#[serde(default)]` is used extensively to tolerate
//! format variations in the wild.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// The schema URL stamped on every exported collection.
pub const POSTMAN_SCHEMA_V21: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Root structure for Postman Collection v2.1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanCollection {
    pub info: PostmanInfo,
    #[serde(default)]
    pub item: Vec<PostmanItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<PostmanVariable>,
}

/// Collection metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

/// An item is either a request (has `request`) or a folder (has `item`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// If present, this item is a folder containing sub-items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<Self>>,
    /// If present, this item is a request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<PostmanRequest>,
}

impl PostmanItem {
    /// Returns true if this item is a folder (has sub-items).
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.item.is_some()
    }

    /// Returns true if this item is a request.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        self.request.is_some()
    }
}

/// Postman request definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanRequest {
    pub method: String,
    #[serde(default)]
    pub url: PostmanUrl,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<PostmanHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PostmanBody>,
}

/// URL can be either a simple string or a structured object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PostmanUrl {
    #[default]
    Empty,
    Simple(String),
    Structured(PostmanUrlStructured),
}

impl PostmanUrl {
    /// Resolves the URL to a string: a non-empty `raw` when available,
    /// otherwise synthesized from the host and path segments.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Simple(s) => s.clone(),
            Self::Structured(s) => s
                .raw
                .clone()
                .filter(|raw| !raw.is_empty())
                .unwrap_or_else(|| {
                    if s.host.is_empty() && s.path.is_empty() {
                        String::new()
                    } else {
                        format!("{}/{}", s.host.join("."), s.path.join("/"))
                    }
                }),
        }
    }

    /// Query parameters, present only on structured URLs.
    #[must_use]
    pub fn query_params(&self) -> &[PostmanQueryParam] {
        match self {
            Self::Structured(s) => &s.query,
            _ => &[],
        }
    }
}

/// Structured URL object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostmanUrlStructured {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<PostmanQueryParam>,
}

/// Query parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanQueryParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// Request header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanHeader {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanBody {
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urlencoded: Vec<PostmanFormParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formdata: Vec<PostmanFormParam>,
}

/// Form-data or urlencoded parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanFormParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Collection-level variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostmanVariable {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_collection() {
        let json = r#"{
            "info": {
                "name": "Test Collection",
                "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
            },
            "item": []
        }"#;

        let collection: PostmanCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.info.name, "Test Collection");
        assert!(collection.item.is_empty());
        assert!(collection.variable.is_empty());
    }

    #[test]
    fn test_parse_string_url() {
        let json = r#"{
            "info": {"name": "Test"},
            "item": [{
                "name": "Ping",
                "request": {"method": "GET", "url": "https://api.example.com/ping"}
            }]
        }"#;

        let collection: PostmanCollection = serde_json::from_str(json).unwrap();
        let request = collection.item[0].request.as_ref().unwrap();
        assert_eq!(request.url.resolve(), "https://api.example.com/ping");
    }

    #[test]
    fn test_resolve_structured_url_without_raw() {
        let url = PostmanUrl::Structured(PostmanUrlStructured {
            raw: None,
            host: vec!["api".into(), "example".into(), "com".into()],
            path: vec!["users".into(), "42".into()],
            ..Default::default()
        });

        assert_eq!(url.resolve(), "api.example.com/users/42");
    }

    #[test]
    fn test_resolve_empty_raw_falls_back_to_host_and_path() {
        let url = PostmanUrl::Structured(PostmanUrlStructured {
            raw: Some(String::new()),
            host: vec!["api".into(), "example".into(), "com".into()],
            path: vec!["users".into()],
            ..Default::default()
        });

        assert_eq!(url.resolve(), "api.example.com/users");
    }

    #[test]
    fn test_folder_vs_request() {
        let json = r#"{
            "info": {"name": "Test"},
            "item": [
                {"name": "Folder", "item": []},
                {"name": "Leaf", "request": {"method": "GET", "url": "https://x.test/"}}
            ]
        }"#;

        let collection: PostmanCollection = serde_json::from_str(json).unwrap();
        assert!(collection.item[0].is_folder());
        assert!(collection.item[1].is_request());
    }

    #[test]
    fn test_query_param_disabled_default() {
        let param: PostmanQueryParam = serde_json::from_str(r#"{"key": "page"}"#).unwrap();
        assert!(!param.disabled);
        assert!(param.value.is_none());
    }
}
