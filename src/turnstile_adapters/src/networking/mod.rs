pub mod scripted_auth_endpoint;

pub use scripted_auth_endpoint::ScriptedAuthEndpoint;
