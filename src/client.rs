// Core Client Implementation

use crate::classifier::classify;
use crate::config::{MphConfiguration, MphDefaultConfiguration, REQUEST_TIMEOUT};
use crate::domain::{Domain, MphDomain};
use crate::mapper::map_response;
use crate::operation::{CallbackContext, CompletionGuard, Operation};
use crate::provider::MphProvider;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::transport_error;
use crate::url_builder::UrlBuilder;
use crate::types::*;
use serde::de::DeserializeOwned;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

/// Client for the MiningPoolHub web API.
///
/// Cloning is cheap and clones share the HTTP connection pool, the selected
/// domain and the callback context.
#[derive(Clone)]
pub struct MphClient {
    configuration: Arc<dyn MphConfiguration>,
    transport: Arc<dyn Transport>,
    url_builder: UrlBuilder,
    domain: Arc<RwLock<Domain>>,
    timeout: Duration,
    runtime: Option<Handle>,
    callback_context: Arc<OnceLock<CallbackContext>>,
}

impl MphClient {
    /// Create a new client with the specified API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_configuration(MphDefaultConfiguration::new(api_key))
    }

    /// Create a client around any configuration provider
    pub fn with_configuration(configuration: impl MphConfiguration + 'static) -> Self {
        Self {
            configuration: Arc::new(configuration),
            transport: Arc::new(ReqwestTransport::new()),
            url_builder: UrlBuilder::default(),
            domain: Arc::new(RwLock::new(Domain::default())),
            timeout: REQUEST_TIMEOUT,
            runtime: Handle::try_current().ok(),
            callback_context: Arc::new(OnceLock::new()),
        }
    }

    /// Run requests on this runtime instead of the one (if any) that was
    /// current when the client was created
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Deliver completions on the given context. Without this, a dedicated
    /// callback thread is started on first use.
    pub fn with_callback_context(self, context: CallbackContext) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(context);
        Self {
            callback_context: Arc::new(cell),
            ..self
        }
    }

    /// Replace the HTTP transport
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Point the client at another scheme and base address, e.g. a local
    /// test server: `with_endpoint("http", "127.0.0.1:1234/index.php?page=api&")`
    pub fn with_endpoint(mut self, scheme: impl Into<String>, base_address: impl Into<String>) -> Self {
        self.url_builder = UrlBuilder::new(scheme, base_address);
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start with a known pool selected
    pub fn with_domain(self, domain: MphDomain) -> Self {
        self.set_domain(domain);
        self
    }

    /// Select a known pool. Clears any custom domain.
    pub fn set_domain(&self, domain: MphDomain) {
        self.store_domain(Domain::Known(domain));
    }

    /// Select a free-form sub-domain. Replaces any known pool.
    pub fn set_custom_domain(&self, domain: impl Into<String>) {
        self.store_domain(Domain::Custom(domain.into()));
    }

    /// The domain the next request will use
    pub fn domain(&self) -> Domain {
        match self.domain.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store_domain(&self, domain: Domain) {
        match self.domain.write() {
            Ok(mut guard) => *guard = domain,
            Err(poisoned) => *poisoned.into_inner() = domain,
        }
    }

    /// The full URL for an action query such as `action=getpoolinfo&id=7`.
    /// The domain is read once, here.
    pub fn request_url(&self, action: &str) -> String {
        self.url_builder
            .build(&self.domain(), action, self.configuration.api_key())
    }

    pub fn callback_context(&self) -> CallbackContext {
        self.callback_context
            .get_or_init(CallbackContext::spawn)
            .clone()
    }

    fn http_request(&self, request: &RequestDescriptor) -> HttpRequest {
        HttpRequest {
            method: request.method,
            url: self.request_url(&request.query()),
            headers: request.headers.clone(),
            timeout: self.timeout,
        }
    }

    fn runtime(&self) -> Option<Handle> {
        self.runtime.clone().or_else(|| Handle::try_current().ok())
    }

    /// Run one request inline and return the decoded result.
    ///
    /// Same pipeline as the callback endpoints, without the callback context.
    pub async fn fetch<T: DeserializeOwned>(&self, request: RequestDescriptor) -> MphResult<T> {
        let http_request = self.http_request(&request);
        execute(self.transport.as_ref(), &request.action, http_request).await
    }
}

/// Transport, classify, map.
async fn execute<T: DeserializeOwned>(
    transport: &dyn Transport,
    action: &str,
    request: HttpRequest,
) -> MphResult<T> {
    let started = Instant::now();
    tracing::debug!(action, method = request.method.as_str(), "dispatching request");

    let outcome = transport.execute(request).await;
    let status = outcome.response.as_ref().map(|r| r.status);
    tracing::debug!(action, ?status, elapsed_ms = started.elapsed().as_millis() as u64, "request finished");

    let response = classify(outcome)?;
    map_response(&response.body)
}

impl MphProvider for MphClient {
    type Operation = Operation;

    fn request<T, F>(&self, request: RequestDescriptor, completion: F) -> Operation
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(MphResult<T>) + Send + 'static,
    {
        let operation = Operation::new(request.action.clone());
        let context = self.callback_context();
        let http_request = self.http_request(&request);
        operation.mark_dispatched();

        let Some(runtime) = self.runtime() else {
            let error = transport_error!(
                TransportErrorKind::NoRuntime,
                "no tokio runtime available to run the request"
            );
            context.complete(operation.shared(), Err(error), completion);
            return operation;
        };

        // Dropping the future unfinished (shut-down runtime, abort) still fails the operation
        let guard = CompletionGuard::new(context, operation.shared(), completion);
        let transport = self.transport.clone();
        let action = request.action;
        let task = runtime.spawn(async move {
            let result = execute::<T>(transport.as_ref(), &action, http_request).await;
            guard.finish(result);
        });
        operation.attach(task);

        operation
    }
}

impl std::fmt::Debug for MphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MphClient")
            .field("url_builder", &self.url_builder)
            .field("domain", &self.domain())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
