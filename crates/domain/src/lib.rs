//! Relay Domain - Core business types
//!
//! This crate defines the domain model for the Relay interop engine.
//! All types here are pure Rust with no I/O dependencies.

pub mod collection;
pub mod diff;
pub mod id;
pub mod request;
pub mod validate;

pub use collection::Collection;
pub use diff::{DiffEntry, DiffKind, JsonHighlight, diff, format_diff, highlight_diff_in_json};
pub use id::{generate_collection_id, generate_folder_id, generate_request_id};
pub use request::{QueryParam, Request};
pub use validate::{JsonValidation, UrlValidation, validate_json, validate_url};
