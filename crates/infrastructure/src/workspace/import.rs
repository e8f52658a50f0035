//! Bulk import into a workspace.

use std::path::Path;

use relay_application::{ApplicationError, ApplicationResult, CollectionApi, NewCollection};
use relay_domain::{Collection, Request, generate_collection_id};
use serde::Deserialize;
use serde_json::Value;
use tokio::fs;

use super::WorkspaceSync;
use crate::detect::FileFormat;
use crate::openapi::{OpenApiDocument, import_openapi};
use crate::postman::{PostmanCollection, import_postman};

/// Result of a bulk import. Partial success is expected: collections
/// that persisted and per-item failure messages are reported side by
/// side.
#[derive(Debug, Default)]
pub struct ImportOutcome {
    /// Collections that were successfully persisted, in input order
    pub collections: Vec<Collection>,
    /// Human-readable per-item failure messages, in input order
    pub errors: Vec<String>,
}

/// One element of a bulk-of-collections array: a pre-shaped record with
/// the requests inside a `data` envelope.
#[derive(Debug, Deserialize)]
struct BulkCollectionRecord {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    data: Option<BulkData>,
}

#[derive(Debug, Default, Deserialize)]
struct BulkData {
    #[serde(default)]
    requests: Vec<Request>,
}

impl From<BulkCollectionRecord> for Collection {
    fn from(record: BulkCollectionRecord) -> Self {
        Self {
            id: generate_collection_id(),
            name: record.name,
            description: record.description,
            requests: record.data.unwrap_or_default().requests,
        }
    }
}

impl<A: CollectionApi> WorkspaceSync<A> {
    /// Imports a file into a workspace.
    ///
    /// Only `.json` files are accepted; anything else fails the whole
    /// call with no partial result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file has the wrong extension, cannot be
    /// read, matches no recognized format, or the caller is not
    /// authenticated. Per-item persistence failures do not error; they
    /// are reported in the outcome.
    pub async fn import_file(
        &self,
        workspace_id: &str,
        path: &Path,
    ) -> ApplicationResult<ImportOutcome> {
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            return Err(ApplicationError::UnsupportedFormat);
        }

        let text = fs::read_to_string(path)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

        self.import_text(workspace_id, &text).await
    }

    /// Imports already-loaded file content into a workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the content matches no recognized format or
    /// the caller is not authenticated. Malformed JSON is reported as a
    /// single entry in the outcome's `errors`, not as an `Err`.
    pub async fn import_text(
        &self,
        workspace_id: &str,
        text: &str,
    ) -> ApplicationResult<ImportOutcome> {
        let mut outcome = ImportOutcome::default();

        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                outcome
                    .errors
                    .push(ApplicationError::Parse(e.to_string()).to_string());
                return Ok(outcome);
            }
        };

        match FileFormat::detect(&value) {
            FileFormat::Postman => {
                match serde_json::from_value::<PostmanCollection>(value) {
                    Ok(doc) => {
                        let imported = import_postman(&doc);
                        self.persist(workspace_id, imported.collection, &mut outcome)
                            .await?;
                    }
                    Err(e) => outcome
                        .errors
                        .push(ApplicationError::Parse(e.to_string()).to_string()),
                }
            }
            FileFormat::OpenApi => match serde_json::from_value::<OpenApiDocument>(value) {
                Ok(doc) => {
                    self.persist(workspace_id, import_openapi(&doc), &mut outcome)
                        .await?;
                }
                Err(e) => outcome
                    .errors
                    .push(ApplicationError::Parse(e.to_string()).to_string()),
            },
            FileFormat::BulkArray => {
                let Value::Array(elements) = value else {
                    return Err(ApplicationError::UnsupportedFormat);
                };
                self.import_bulk(workspace_id, elements, &mut outcome)
                    .await?;
            }
            FileFormat::Unknown => return Err(ApplicationError::UnsupportedFormat),
        }

        tracing::info!(
            workspace_id,
            imported = outcome.collections.len(),
            failed = outcome.errors.len(),
            "bulk import finished"
        );

        Ok(outcome)
    }

    /// Imports each array element independently; a bad element is
    /// recorded and its siblings continue.
    async fn import_bulk(
        &self,
        workspace_id: &str,
        elements: Vec<Value>,
        outcome: &mut ImportOutcome,
    ) -> ApplicationResult<()> {
        for (index, element) in elements.into_iter().enumerate() {
            match serde_json::from_value::<BulkCollectionRecord>(element) {
                Ok(record) => {
                    self.persist(workspace_id, record.into(), outcome).await?;
                }
                Err(e) => outcome
                    .errors
                    .push(format!("Invalid collection at index {index}: {e}")),
            }
        }
        Ok(())
    }

    /// Persists one collection. A backend failure falls back to the
    /// local store when one is configured; otherwise it is recorded in
    /// the outcome. A missing token with no fallback aborts the whole
    /// call.
    async fn persist(
        &self,
        workspace_id: &str,
        collection: Collection,
        outcome: &mut ImportOutcome,
    ) -> ApplicationResult<()> {
        let payload = NewCollection::from_collection(&collection, Some(workspace_id));

        match self.api().create_collection(payload.clone()).await {
            Ok(saved) => outcome.collections.push(saved),
            Err(ApplicationError::NotAuthenticated) if self.fallback().is_none() => {
                return Err(ApplicationError::NotAuthenticated);
            }
            Err(e) => {
                if let Some(fallback) = self.fallback() {
                    tracing::warn!(
                        name = %payload.name,
                        error = %e,
                        "backend rejected collection, saving to local store"
                    );
                    match fallback.create_collection(payload).await {
                        Ok(saved) => outcome.collections.push(saved),
                        Err(store_err) => outcome.errors.push(store_err.to_string()),
                    }
                } else {
                    outcome.errors.push(e.to_string());
                }
            }
        }

        Ok(())
    }
}
