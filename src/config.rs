// Client configuration

use crate::types::SecureApiKey;
use std::fmt;
use std::time::Duration;

/// Per-request timeout for every API call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Environment variable read by [`crate::from_env`]
pub const API_KEY_ENV: &str = "MPH_API_KEY";

/// Supplies the credentials a client signs its requests with.
///
/// The client reads the key once per request and never modifies it.
pub trait MphConfiguration: Send + Sync {
    fn api_key(&self) -> &str;
}

/// A configuration holding nothing but a static API key
#[derive(Clone)]
pub struct MphDefaultConfiguration {
    api_key: SecureApiKey,
}

impl MphDefaultConfiguration {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecureApiKey::new(api_key),
        }
    }
}

impl MphConfiguration for MphDefaultConfiguration {
    fn api_key(&self) -> &str {
        self.api_key.as_str()
    }
}

impl fmt::Debug for MphDefaultConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MphDefaultConfiguration")
            .field("api_key", &self.api_key)
            .finish()
    }
}
