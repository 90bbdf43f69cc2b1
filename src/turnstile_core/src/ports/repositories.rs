use crate::domain::auth_token::AuthToken;

/// Port trait for the token cache.
///
/// Write-only from the caller's point of view: the login flow hands the
/// token over and never observes a result. Implementations that can fail
/// (or that want read access) expose that on their own inherent API.
pub trait AuthTokenStore: Send + Sync {
    fn store_token(&self, token: AuthToken);
}
