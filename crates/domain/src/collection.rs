//! Collection types

use serde::{Deserialize, Serialize};

use crate::request::Request;

/// A named collection of requests.
///
/// `requests` keeps insertion/traversal order; the order is only
/// meaningful for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique identifier
    pub id: String,
    /// Collection name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Requests in this collection
    #[serde(default)]
    pub requests: Vec<Request>,
}

impl Collection {
    /// Creates a new empty collection with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: crate::id::generate_collection_id(),
            name: name.into(),
            description: None,
            requests: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Adds a request to the collection.
    pub fn add_request(&mut self, request: Request) {
        self.requests.push(request);
    }

    /// Returns the number of requests.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new("New Collection")
    }
}
