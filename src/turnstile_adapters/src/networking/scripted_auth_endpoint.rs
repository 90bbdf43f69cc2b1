use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use secrecy::SecretString;
use turnstile_core::{AuthEndpoint, EndpointResult, NetworkError};

/// Deterministic stand-in for the remote authentication endpoint.
///
/// Responses are served from a FIFO script; once the script runs dry the
/// fallback response is repeated. Credentials are accepted and ignored.
#[derive(Clone)]
pub struct ScriptedAuthEndpoint {
    script: Arc<Mutex<VecDeque<Result<EndpointResult, NetworkError>>>>,
    fallback: Result<EndpointResult, NetworkError>,
}

impl ScriptedAuthEndpoint {
    pub fn respond_with(fallback: Result<EndpointResult, NetworkError>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
        }
    }

    /// Queue a one-shot response served before the fallback.
    pub fn enqueue(&self, response: Result<EndpointResult, NetworkError>) {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }
}

impl AuthEndpoint for ScriptedAuthEndpoint {
    fn authenticate(
        &self,
        username: Option<&str>,
        _password: Option<&SecretString>,
    ) -> Result<EndpointResult, NetworkError> {
        tracing::debug!(?username, "scripted authentication exchange");
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
