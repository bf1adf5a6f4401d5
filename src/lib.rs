//! # mph: a typed client for the MiningPoolHub web API
//!
//! Builds authenticated GET requests against
//! `https://{pool}.miningpoolhub.com/index.php?page=api&action=...`, sends them
//! on a tokio task, and decodes the JSON answer into a typed model.
//!
//! ## Key Features
//!
//! - One method per API action, each with its own response model
//! - Known pools as an enum, plus free-form custom sub-domains
//! - Cancellable operation handles
//! - Completions delivered serially on one callback context
//! - API keys redacted from debug output and error messages
//!
//! ## Basic Usage
//!
//! ```no_run
//! use mph::{MphClient, MphDomain, MphProvider, ProviderOperation};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = MphClient::new("your-api-key").with_domain(MphDomain::Ethereum);
//!     let (tx, rx) = tokio::sync::oneshot::channel();
//!
//!     let operation = client.get_pool_status(move |result| {
//!         let _ = tx.send(result);
//!     });
//!
//!     match rx.await {
//!         Ok(Ok(status)) => println!("pool hashrate: {}", status.status.data.hashrate),
//!         Ok(Err(e)) => eprintln!("request failed: {}", e),
//!         Err(_) => println!("cancelled: {}", operation.is_cancelled()),
//!     }
//! }
//! ```

pub mod types;
pub mod client;
pub mod config;
pub mod domain;
pub mod url_builder;
pub mod transport;
pub mod classifier;
pub mod mapper;
pub mod operation;
pub mod provider;
pub mod models;
pub mod serde_util;

// Re-export core components
pub use client::MphClient;
pub use config::{MphConfiguration, MphDefaultConfiguration, API_KEY_ENV, REQUEST_TIMEOUT};
pub use domain::{Domain, MphDomain};
pub use operation::{CallbackContext, CallbackQueue, Operation, OperationState, ProviderOperation};
pub use provider::MphProvider;
pub use transport::{HttpRequest, RawResponse, ReqwestTransport, Transport, TransportOutcome};
pub use url_builder::UrlBuilder;
pub use types::{
    sanitize_error_message, HttpMethod, MphError, MphResult, RequestDescriptor, SecureApiKey,
    TransportErrorKind,
};

pub mod prelude {
    //! Convenient imports for commonly used types and functions
    pub use crate::models::*;
    pub use crate::{
        from_env, new_client, Domain, MphClient, MphDomain, MphError, MphProvider, MphResult,
        ProviderOperation,
    };
}

// Entry point functions
pub fn new_client(api_key: impl Into<String>) -> MphClient {
    MphClient::new(api_key)
}

/// Build a client from the `MPH_API_KEY` environment variable
pub fn from_env() -> Result<MphClient, std::env::VarError> {
    std::env::var(API_KEY_ENV).map(MphClient::new)
}
