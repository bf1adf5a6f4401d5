//! Request URL composition.
//!
//! `{scheme}://{domain.}{base address}{action query}&api_key={key}`
//!
//! Pure string assembly. The action query is inserted verbatim, so callers
//! must hand in something that is already safe inside a query string.

use crate::domain::Domain;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_BASE_ADDRESS: &str = "miningpoolhub.com/index.php?page=api&";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    scheme: String,
    base_address: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
        }
    }
}

impl UrlBuilder {
    pub fn new(scheme: impl Into<String>, base_address: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            base_address: base_address.into(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    pub fn build(&self, domain: &Domain, action: &str, api_key: &str) -> String {
        format!(
            "{}://{}{}{}&api_key={}",
            self.scheme,
            domain.host_prefix(),
            self.base_address,
            action,
            api_key
        )
    }
}
