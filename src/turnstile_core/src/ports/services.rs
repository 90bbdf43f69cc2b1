use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{auth_token::AuthToken, logged_in_event::LoggedInEvent};

/// The remote call could not complete at all.
///
/// This is the only failure the endpoint signals out of band of
/// [`EndpointResult`]; every reachable-but-unhappy outcome is a status
/// variant instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("authentication endpoint unreachable")]
pub struct NetworkError;

/// Status reported by the authentication endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndpointStatus {
    Success,
    GeneralError,
    AuthError,
    ServerError,
}

impl EndpointStatus {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Structured response from the authentication endpoint.
///
/// The token field is meaningful only when the status is
/// [`EndpointStatus::Success`]; endpoints return it empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointResult {
    pub status: EndpointStatus,
    pub token: AuthToken,
}

impl EndpointResult {
    /// A successful authentication carrying the minted token.
    pub fn success(token: impl Into<AuthToken>) -> Self {
        Self {
            status: EndpointStatus::Success,
            token: token.into(),
        }
    }

    /// A reachable-but-failed authentication; no token.
    pub fn error(status: EndpointStatus) -> Self {
        Self {
            status,
            token: AuthToken::from(""),
        }
    }
}

/// Port trait for the remote authentication check.
///
/// Blocking by contract: the call returns only once the remote exchange has
/// completed or failed. Credentials are forwarded exactly as supplied by
/// the caller; validation is the endpoint's business.
pub trait AuthEndpoint: Send + Sync {
    fn authenticate(
        &self,
        username: Option<&str>,
        password: Option<&SecretString>,
    ) -> Result<EndpointResult, NetworkError>;
}

/// Port trait for announcing domain events.
///
/// Fire-and-forget: delivery guarantees, fan-out and threading are entirely
/// the implementation's concern.
pub trait EventPoster: Send + Sync {
    fn post_event(&self, event: LoggedInEvent);
}
