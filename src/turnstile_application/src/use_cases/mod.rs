pub mod login;

// Re-export for convenience
pub use login::{LoginOutcome, LoginUseCase};
