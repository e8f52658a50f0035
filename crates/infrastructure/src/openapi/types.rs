//! OpenAPI 3.0 type definitions.
//!
//! A pragmatic subset of the specification: `paths` keyed by path then
//! method, query parameters, and `application/json` request bodies.
//! Unknown fields are ignored on import.

#![allow(missing_docs)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root OpenAPI document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OpenApiDocument {
    #[serde(default)]
    pub openapi: String,
    #[serde(default)]
    pub info: ApiInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, PathItem>>,
}

/// API metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Server entry; only the URL is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub url: String,
}

/// The method keys an import traverses, matched case-insensitively.
const STANDARD_METHODS: [&str; 7] = ["get", "post", "put", "patch", "delete", "head", "options"];

/// Operations of one path, keyed by method name as written in the
/// document. The map is open: export stores any verb a request carries,
/// and import decides which keys it traverses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathItem {
    #[serde(flatten)]
    pub operations: BTreeMap<String, Operation>,
}

impl PathItem {
    /// Iterates operations under the standard HTTP method keys, matched
    /// case-insensitively. Yields the method uppercased. Keys outside
    /// the standard set (vendor extensions, exotic verbs) are skipped.
    pub fn operations(&self) -> impl Iterator<Item = (String, &Operation)> {
        self.operations.iter().filter_map(|(key, operation)| {
            let method = key.to_lowercase();
            STANDARD_METHODS
                .contains(&method.as_str())
                .then(|| (method.to_uppercase(), operation))
        })
    }

    /// Looks up one operation by method, case-insensitively.
    #[must_use]
    pub fn operation(&self, method: &str) -> Option<&Operation> {
        let method = method.to_lowercase();
        self.operations
            .iter()
            .find(|(key, _)| key.to_lowercase() == method)
            .map(|(_, operation)| operation)
    }

    /// Stores an operation under a lowercased method key. Any verb is
    /// accepted; the method string is not validated at this layer.
    pub fn set(&mut self, method: &str, operation: Operation) {
        self.operations.insert(method.to_lowercase(), operation);
    }
}

/// A single operation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: BTreeMap<String, Response>,
}

/// A declared parameter; only `in: query` is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// A schema stub: only the type tag is modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: String,
}

impl Schema {
    /// `{"type": "string"}`
    #[must_use]
    pub fn string() -> Self {
        Self {
            schema_type: "string".to_string(),
        }
    }

    /// `{"type": "object"}`
    #[must_use]
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
        }
    }
}

/// Request body keyed by media type.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RequestBody {
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,
}

/// Media type entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// Response entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<String, MediaType>>,
}
