pub mod eventbus;
pub mod networking;
pub mod persistence;

pub use eventbus::InProcessEventBus;
pub use networking::ScriptedAuthEndpoint;
pub use persistence::InMemoryTokenStore;
