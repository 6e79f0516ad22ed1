//! Blocking HTTP clients for the remote spell-check and web-search services.

pub mod spellcheck;
pub mod websearch;

// Re-export commonly used types
pub use spellcheck::*;
pub use websearch::*;

/// Header carrying the subscription key for both services.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Default request timeout for the blocking clients, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
