//! File-based collection store.
//!
//! Persists collections as JSON files under a root directory, one file
//! per collection, grouped by workspace. Used as a local fallback when
//! the backend API is unavailable.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relay_application::{ApplicationError, ApplicationResult, CollectionApi, NewCollection};
use relay_domain::{Collection, Request, generate_collection_id};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// `CollectionApi` implementation over a local directory.
pub struct FileCollectionStore {
    root: PathBuf,
}

/// On-disk record wrapping a collection with its save timestamp.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCollection {
    id: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    requests: Vec<Request>,
    saved_at: DateTime<Utc>,
}

impl From<StoredCollection> for Collection {
    fn from(stored: StoredCollection) -> Self {
        Self {
            id: stored.id,
            name: stored.name,
            description: stored.description,
            requests: stored.requests,
        }
    }
}

/// Reduces a collection name to a filesystem-safe slug. Alphanumerics
/// are kept, everything else collapses to single underscores.
fn sanitize_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('_');
            last_was_sep = true;
        }
    }
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        "collection".to_string()
    } else {
        slug.to_string()
    }
}

impl FileCollectionStore {
    /// Creates a store rooted at the given directory. The directory is
    /// created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn workspace_dir(&self, workspace_id: Option<&str>) -> PathBuf {
        self.root.join(workspace_id.unwrap_or("default"))
    }

    async fn read_record(path: &Path) -> Option<StoredCollection> {
        let bytes = fs::read(path).await.ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable collection file");
                None
            }
        }
    }
}

#[async_trait]
impl CollectionApi for FileCollectionStore {
    async fn create_collection(&self, payload: NewCollection) -> ApplicationResult<Collection> {
        let dir = self.workspace_dir(payload.workspace_id.as_deref());
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

        let record = StoredCollection {
            id: generate_collection_id(),
            name: payload.name,
            description: payload.description,
            requests: payload.requests,
            saved_at: Utc::now(),
        };

        // The id suffix keeps same-named collections from clobbering
        // each other.
        let file_name = format!("{}-{}.json", sanitize_name(&record.name), record.id);
        let path = dir.join(file_name);

        let bytes = serde_json::to_vec_pretty(&record)
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;
        fs::write(&path, bytes)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?;

        tracing::debug!(path = %path.display(), "saved collection to local store");

        Ok(record.into())
    }

    async fn list_collections(&self, workspace_id: &str) -> ApplicationResult<Vec<Collection>> {
        let dir = self.workspace_dir(Some(workspace_id));
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ApplicationError::Storage(e.to_string())),
        };

        let mut collections = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))?
        {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            if let Some(record) = Self::read_record(&path).await {
                collections.push(record.into());
            }
        }

        collections.sort_by(|a: &Collection, b: &Collection| a.name.cmp(&b.name));
        Ok(collections)
    }
}
