use secrecy::SecretString;
use turnstile_core::{
    AuthEndpoint, AuthTokenStore, EventPoster, LoggedInEvent, NetworkError,
};

/// Outcome of the login use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Authenticated; the token was cached and the login announced
    Success,
    /// The endpoint was reached but rejected the attempt
    Failure,
    /// The endpoint could not be reached at all
    NetworkError,
}

/// Login use case - authenticates against the remote endpoint
///
/// On success the returned token is cached and a [`LoggedInEvent`] is
/// announced, in that order. On any other outcome neither collaborator is
/// touched.
pub struct LoginUseCase<A, S, P>
where
    A: AuthEndpoint,
    S: AuthTokenStore,
    P: EventPoster,
{
    endpoint: A,
    token_store: S,
    event_poster: P,
}

impl<A, S, P> LoginUseCase<A, S, P>
where
    A: AuthEndpoint,
    S: AuthTokenStore,
    P: EventPoster,
{
    pub fn new(endpoint: A, token_store: S, event_poster: P) -> Self {
        Self {
            endpoint,
            token_store,
            event_poster,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `username` - Username exactly as supplied by the caller
    /// * `password` - Password exactly as supplied by the caller
    ///
    /// # Returns
    /// The tri-state [`LoginOutcome`]; failures are values, never errors
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub fn execute(
        &self,
        username: Option<&str>,
        password: Option<&SecretString>,
    ) -> LoginOutcome {
        // Credentials go through verbatim; validating them is the
        // endpoint's business.
        let result = match self.endpoint.authenticate(username, password) {
            Ok(result) => result,
            Err(NetworkError) => return LoginOutcome::NetworkError,
        };

        if result.status.is_success() {
            // Cache before announcing: subscribers may read the token back.
            self.token_store.store_token(result.token);
            self.event_poster.post_event(LoggedInEvent);
            LoginOutcome::Success
        } else {
            LoginOutcome::Failure
        }
    }
}
