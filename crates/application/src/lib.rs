//! Relay Application - Ports and application errors
//!
//! This crate defines the ports that the infrastructure layer
//! implements: the external collection API and the access-token
//! provider. Import/export translation itself is pure and lives in the
//! infrastructure crate next to the wire formats.

pub mod error;
pub mod ports;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::token_provider::StaticToken;
pub use ports::{CollectionApi, NewCollection, TokenProvider};
