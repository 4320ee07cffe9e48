// Handler modules
pub mod health;
pub mod hello;
pub mod users;

// Re-export handlers for convenience
pub use health::health;
pub use hello::{say_hello_get, say_hello_post};
pub use users::get_user;
