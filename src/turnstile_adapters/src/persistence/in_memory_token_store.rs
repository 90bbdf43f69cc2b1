use std::sync::Arc;

use arc_swap::ArcSwapOption;

use turnstile_core::{AuthToken, AuthTokenStore};

/// Latest-wins in-memory token cache.
///
/// Clones share the same cell, so one handle can be given to the login use
/// case while another reads the token back elsewhere.
#[derive(Default, Clone)]
pub struct InMemoryTokenStore {
    token: Arc<ArcSwapOption<AuthToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently stored token, if any.
    pub fn current(&self) -> Option<AuthToken> {
        self.token.load_full().map(|token| (*token).clone())
    }
}

impl AuthTokenStore for InMemoryTokenStore {
    fn store_token(&self, token: AuthToken) {
        self.token.store(Some(Arc::new(token)));
        tracing::debug!("auth token cached");
    }
}
