//! OpenAPI 3.0 codec.
//!
//! Translates between the native collection model and OpenAPI 3.0
//! JSON documents, in both directions.

pub mod export;
pub mod import;
pub mod types;

pub use export::export_openapi;
pub use import::import_openapi;
pub use types::OpenApiDocument;
