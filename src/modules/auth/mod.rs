pub mod password;
pub mod store;
pub mod user_interface;

// Re-export the main types and functions
pub use password::{hash_password, verify_password};
pub use store::User;
pub use user_interface::{run_session, SessionState};
