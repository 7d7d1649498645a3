pub mod base64;
pub mod retry;
pub mod url;
pub mod useragent;

// Re-export common utilities
pub use retry::{delay, retry_request, retry_request_default, retry_request_with};
pub use useragent::get_random_user_agent;
