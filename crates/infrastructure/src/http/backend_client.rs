//! Backend collection API adapter using reqwest.
//!
//! Implements the `CollectionApi` port against the backend REST API:
//! `POST {base}/collections` and `GET {base}/collections?workspace_id=`,
//! bearer-token authenticated. The token is resolved per call; a
//! missing token fails before any network traffic.

use std::sync::Arc;

use async_trait::async_trait;
use relay_application::{
    ApplicationError, ApplicationResult, CollectionApi, NewCollection, TokenProvider,
};
use relay_domain::{Collection, Request, generate_collection_id};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `CollectionApi` implementation over the backend REST API.
pub struct HttpCollectionApi {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

/// Wire shape of the create-collection body: requests ride inside a
/// `data` envelope.
#[derive(Serialize)]
struct CreateCollectionBody {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workspace_id: Option<String>,
    data: DataEnvelope,
}

#[derive(Serialize)]
struct DataEnvelope {
    requests: Vec<Request>,
}

/// Wire shape of a collection record as the backend returns it.
/// `data` arrives either as an object or as a JSON-encoded string.
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionRecord {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

impl CollectionRecord {
    pub(crate) fn into_collection(self) -> Collection {
        Collection {
            id: self.id.unwrap_or_else(generate_collection_id),
            name: self.name,
            description: self.description,
            requests: parse_collection_data(self.data.as_ref()),
        }
    }
}

/// Extracts the request list from a record's `data` field, tolerating
/// the string-encoded variant some backend versions produce.
fn parse_collection_data(data: Option<&Value>) -> Vec<Request> {
    let Some(data) = data else {
        return Vec::new();
    };

    let object = match data {
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(parsed) => parsed,
            Err(_) => return Vec::new(),
        },
        other => other.clone(),
    };

    object
        .get("requests")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

impl HttpCollectionApi {
    /// Creates a new adapter for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
    ) -> ApplicationResult<Self> {
        let client = Client::builder()
            .user_agent("Relay/0.1.0")
            .build()
            .map_err(|e| ApplicationError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            tokens,
        })
    }

    async fn bearer(&self) -> ApplicationResult<String> {
        self.tokens
            .access_token()
            .await
            .ok_or(ApplicationError::NotAuthenticated)
    }

    async fn backend_error(response: reqwest::Response) -> ApplicationError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(ToString::to_string))
            .unwrap_or_else(|| {
                format!(
                    "Server error: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
            });

        ApplicationError::Backend {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl CollectionApi for HttpCollectionApi {
    async fn create_collection(&self, payload: NewCollection) -> ApplicationResult<Collection> {
        let token = self.bearer().await?;

        tracing::debug!(name = %payload.name, "creating collection via backend");

        let body = CreateCollectionBody {
            name: payload.name,
            description: payload.description,
            workspace_id: payload.workspace_id,
            data: DataEnvelope {
                requests: payload.requests,
            },
        };

        let response = self
            .client
            .post(format!("{}/collections", self.base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApplicationError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }

        let record: CollectionRecord = response
            .json()
            .await
            .map_err(|e| ApplicationError::Http(e.to_string()))?;

        Ok(record.into_collection())
    }

    async fn list_collections(&self, workspace_id: &str) -> ApplicationResult<Vec<Collection>> {
        let token = self.bearer().await?;

        let response = self
            .client
            .get(format!("{}/collections", self.base_url))
            .query(&[("workspace_id", workspace_id)])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApplicationError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| ApplicationError::Http(e.to_string()))?;

        // The endpoint returns either a bare array or a `{data: [...]}`
        // wrapper depending on backend version.
        let records = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        let collections = records
            .into_iter()
            .filter_map(|item| serde_json::from_value::<CollectionRecord>(item).ok())
            .map(CollectionRecord::into_collection)
            .collect();

        Ok(collections)
    }
}
