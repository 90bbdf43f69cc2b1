pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{auth_token::AuthToken, logged_in_event::LoggedInEvent};

pub use ports::{
    repositories::AuthTokenStore,
    services::{AuthEndpoint, EndpointResult, EndpointStatus, EventPoster, NetworkError},
};
