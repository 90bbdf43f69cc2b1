use serde::{Deserialize, Serialize};

/// Opaque authentication token handed out by the remote endpoint.
///
/// The token is meaningful only to the endpoint that minted it; this crate
/// never inspects its contents. No `Display` impl: tokens must not end up
/// in log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for AuthToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for AuthToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}
