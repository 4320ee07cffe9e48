//! Wire-level data shapes

pub mod greeting;
pub mod user;

pub use greeting::{GreetingParams, GreetingPayload, SayHelloRequest};
pub use user::UserRecord;

use chrono::Local;

/// Server-local wall-clock time rendered as `YYYY-MM-DD HH:MM:SS`.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
