pub mod auth_token;
pub mod logged_in_event;
