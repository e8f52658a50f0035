//! Postman Collection v2.1 codec.
//!
//! Translates between the native collection model and Postman
//! Collection v2.1 JSON, in both directions.

pub mod export;
pub mod import;
pub mod types;

pub use export::export_postman;
pub use import::{PostmanImport, import_postman};
pub use types::{POSTMAN_SCHEMA_V21, PostmanCollection, PostmanItem, PostmanVariable};
