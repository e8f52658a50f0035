//! Ports implemented by the infrastructure layer.

pub mod collection_api;
pub mod token_provider;

pub use collection_api::{CollectionApi, NewCollection};
pub use token_provider::TokenProvider;
