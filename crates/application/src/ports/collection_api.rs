//! Collection persistence port.

use async_trait::async_trait;
use relay_domain::{Collection, Request};
use serde::{Deserialize, Serialize};

use crate::ApplicationResult;

/// Payload for creating a collection in the external store.
///
/// Mirrors the backend's `POST /collections` body: the requests ride
/// inside a `data` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCollection {
    /// Collection name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workspace to attach the collection to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    /// Requests to store
    pub requests: Vec<Request>,
}

impl NewCollection {
    /// Builds a creation payload from a translated collection.
    #[must_use]
    pub fn from_collection(collection: &Collection, workspace_id: Option<&str>) -> Self {
        Self {
            name: collection.name.clone(),
            description: collection.description.clone(),
            workspace_id: workspace_id.map(ToString::to_string),
            requests: collection.requests.clone(),
        }
    }
}

/// Port for the external collection store.
///
/// Implementations persist collections either through the backend REST
/// API or a local fallback store. Calls are stateless; there is no
/// client-side locking or conflict detection, concurrent imports to
/// the same workspace can race.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    /// Persists one collection and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the collection or the
    /// transport fails.
    async fn create_collection(&self, payload: NewCollection) -> ApplicationResult<Collection>;

    /// Lists all collections in a workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or the response
    /// cannot be decoded.
    async fn list_collections(&self, workspace_id: &str) -> ApplicationResult<Vec<Collection>>;
}
