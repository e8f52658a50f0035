//! Relay Infrastructure - Format codecs and adapters
//!
//! This crate holds the interop engine proper: the Postman and OpenAPI
//! codecs, file-format detection, the workspace import/export
//! orchestrator, and the concrete `CollectionApi` adapters (backend
//! REST, filesystem fallback).

pub mod detect;
pub mod html;
pub mod http;
pub mod openapi;
pub mod persistence;
pub mod postman;
pub mod workspace;

pub use detect::FileFormat;
pub use html::decode_html_entities;
pub use http::HttpCollectionApi;
pub use openapi::{OpenApiDocument, export_openapi, import_openapi};
pub use persistence::FileCollectionStore;
pub use postman::{PostmanCollection, PostmanImport, export_postman, import_postman};
pub use workspace::{
    ExportFile, ImportOutcome, WorkspaceExportFormat, WorkspaceSync, export_collection_file,
};
