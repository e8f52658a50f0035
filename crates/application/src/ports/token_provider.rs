//! Access token port.

use async_trait::async_trait;

/// Port for obtaining the current access token.
///
/// The token source is opaque to this layer: a session store, a
/// keychain, or a static value in tests. `None` means the user is not
/// logged in, which is a hard failure for workspace-scoped operations.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the current bearer token, if any.
    async fn access_token(&self) -> Option<String>;
}

/// A fixed token, mainly for tests and single-user setups.
#[derive(Debug, Clone)]
pub struct StaticToken(pub Option<String>);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}
