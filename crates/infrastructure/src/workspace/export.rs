//! Bulk export from a workspace.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use relay_application::{ApplicationError, ApplicationResult, CollectionApi};
use relay_domain::Collection;
use tokio::fs;

use super::WorkspaceSync;
use crate::openapi::{OpenApiDocument, export_openapi};
use crate::openapi::types::ApiInfo;
use crate::postman::{POSTMAN_SCHEMA_V21, PostmanCollection, export_postman};
use crate::postman::types::PostmanInfo;

/// Target format for a workspace or collection export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceExportFormat {
    /// Postman Collection v2.1
    Postman,
    /// OpenAPI 3.0
    OpenApi,
    /// Raw native JSON
    Json,
}

/// A rendered export ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ExportFile {
    /// Suggested file name, including extension
    pub filename: String,
    /// Always `application/json`
    pub mime_type: &'static str,
    /// Serialized document
    pub content: String,
}

impl ExportFile {
    fn new(filename: String, content: String) -> Self {
        Self {
            filename,
            mime_type: "application/json",
            content,
        }
    }

    /// Writes the file into a directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn write_to(&self, dir: &Path) -> ApplicationResult<PathBuf> {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;
        Ok(path)
    }
}

const MERGED_NAME: &str = "Workspace Collections";

fn to_json<T: serde::Serialize>(value: &T) -> ApplicationResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| ApplicationError::Storage(e.to_string()))
}

impl<A: CollectionApi> WorkspaceSync<A> {
    /// Exports all collections in a workspace as one document.
    ///
    /// Postman output concatenates every collection's items into one
    /// flat list; OpenAPI output merges the path maps, later
    /// collections silently overwriting earlier ones on overlapping
    /// paths; JSON output is the raw collection array.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace cannot be listed or holds no
    /// collections.
    pub async fn export_collections(
        &self,
        workspace_id: &str,
        format: WorkspaceExportFormat,
    ) -> ApplicationResult<ExportFile> {
        let collections = self.api().list_collections(workspace_id).await?;
        if collections.is_empty() {
            return Err(ApplicationError::NotFound(format!(
                "no collections in workspace {workspace_id}"
            )));
        }

        let content = match format {
            WorkspaceExportFormat::Postman => to_json(&merge_postman(&collections))?,
            WorkspaceExportFormat::OpenApi => to_json(&merge_openapi(&collections))?,
            WorkspaceExportFormat::Json => to_json(&collections)?,
        };

        let filename = format!(
            "workspace-collections-{workspace_id}-{}.json",
            Utc::now().timestamp_millis()
        );

        tracing::info!(workspace_id, count = collections.len(), %filename, "exported workspace");

        Ok(ExportFile::new(filename, content))
    }
}

fn merge_postman(collections: &[Collection]) -> PostmanCollection {
    let mut items = Vec::new();
    for collection in collections {
        items.extend(export_postman(collection).item);
    }

    PostmanCollection {
        info: PostmanInfo {
            name: MERGED_NAME.to_string(),
            description: None,
            schema: Some(POSTMAN_SCHEMA_V21.to_string()),
        },
        item: items,
        variable: Vec::new(),
    }
}

fn merge_openapi(collections: &[Collection]) -> OpenApiDocument {
    let mut paths = BTreeMap::new();
    for collection in collections {
        if let Some(exported) = export_openapi(collection).paths {
            paths.extend(exported);
        }
    }

    OpenApiDocument {
        openapi: "3.0.0".to_string(),
        info: ApiInfo {
            title: Some(MERGED_NAME.to_string()),
            description: None,
            version: Some("1.0.0".to_string()),
        },
        servers: Vec::new(),
        paths: Some(paths),
    }
}

/// Renders a single collection as a downloadable file.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn export_collection_file(
    collection: &Collection,
    format: WorkspaceExportFormat,
) -> ApplicationResult<ExportFile> {
    let (filename, content) = match format {
        WorkspaceExportFormat::Postman => (
            format!("{}-postman.json", collection.name),
            to_json(&export_postman(collection))?,
        ),
        WorkspaceExportFormat::OpenApi => (
            format!("{}-openapi.json", collection.name),
            to_json(&export_openapi(collection))?,
        ),
        WorkspaceExportFormat::Json => {
            (format!("{}.json", collection.name), to_json(collection)?)
        }
    };

    Ok(ExportFile::new(filename, content))
}
