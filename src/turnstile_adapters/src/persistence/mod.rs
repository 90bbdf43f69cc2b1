pub mod in_memory_token_store;

pub use in_memory_token_store::InMemoryTokenStore;
