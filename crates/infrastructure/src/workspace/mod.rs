//! Workspace-scoped bulk import and export.
//!
//! The orchestrator ties the format codecs to a `CollectionApi` store:
//! it detects the format of an uploaded file, translates it into native
//! collections, persists them one by one with per-item error isolation,
//! and merges a workspace's collections back into a single downloadable
//! document.

mod export;
mod import;

pub use export::{ExportFile, WorkspaceExportFormat, export_collection_file};
pub use import::ImportOutcome;

use relay_application::CollectionApi;

use crate::persistence::FileCollectionStore;

/// Bulk import/export orchestrator for one collection store.
///
/// Stateless and reentrant; each call runs its items strictly
/// sequentially. There is no cancellation or client-side locking, so
/// concurrent imports into the same workspace can race.
pub struct WorkspaceSync<A> {
    api: A,
    fallback: Option<FileCollectionStore>,
}

impl<A: CollectionApi> WorkspaceSync<A> {
    /// Creates an orchestrator backed by the given store.
    pub const fn new(api: A) -> Self {
        Self {
            api,
            fallback: None,
        }
    }

    /// Adds a local fallback store. Collections whose backend call
    /// fails are written there instead and still count as imported.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FileCollectionStore) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub(crate) const fn api(&self) -> &A {
        &self.api
    }

    pub(crate) const fn fallback(&self) -> Option<&FileCollectionStore> {
        self.fallback.as_ref()
    }
}
