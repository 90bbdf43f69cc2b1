//! # Turnstile - Login Orchestration Library
//!
//! This is a facade crate that re-exports the public APIs of the login
//! orchestration components. Use this crate to get access to the whole
//! login flow in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `AuthToken`, `LoggedInEvent`, `EndpointResult`
//! - **Port traits**: `AuthEndpoint`, `AuthTokenStore`, `EventPoster`
//! - **Use cases**: `LoginUseCase`
//! - **Adapters**: `InMemoryTokenStore`, `InProcessEventBus`, `ScriptedAuthEndpoint`

// ============================================================================
// Core Domain Types & Ports
// ============================================================================

/// Core domain types and port traits
pub mod core {
    pub use turnstile_core::*;
}

// Re-export the core types at the root level
pub use turnstile_core::{
    AuthEndpoint, AuthToken, AuthTokenStore, EndpointResult, EndpointStatus, EventPoster,
    LoggedInEvent, NetworkError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use turnstile_application::*;
}

// Re-export use cases at root level
pub use turnstile_application::{LoginOutcome, LoginUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use turnstile_adapters::persistence::*;
    }

    /// Event bus implementations
    pub mod eventbus {
        pub use turnstile_adapters::eventbus::*;
    }

    /// Endpoint implementations
    pub mod networking {
        pub use turnstile_adapters::networking::*;
    }
}

// Re-export commonly used adapters at root level
pub use turnstile_adapters::{InMemoryTokenStore, InProcessEventBus, ScriptedAuthEndpoint};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export secrecy for working with passwords
pub use secrecy::{ExposeSecret, Secret, SecretString};
