// Core types and errors

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// The result type used throughout the MiningPoolHub SDK
pub type MphResult<T> = Result<T, MphError>;

/// Convert reqwest::Error to our MphError
impl From<reqwest::Error> for MphError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest embeds the request URL (and with it the api key) in its errors
        let err = err.without_url();
        let kind = TransportErrorKind::from_reqwest(&err);
        let status = err.status().map(|s| s.as_u16()).unwrap_or(ABSENT_RESPONSE_STATUS);

        MphError::Transport {
            kind,
            status,
            message: sanitize_error_message(&err.to_string()),
            location: None,
            source: Some(Arc::new(err) as Arc<dyn std::error::Error + Send + Sync>),
        }
    }
}

/// Status reported when the transport produced no response at all
pub const ABSENT_RESPONSE_STATUS: u16 = 500;

/// A secure container for API keys that automatically zeroes memory when dropped
pub struct SecureApiKey {
    key: String,
}

impl SecureApiKey {
    /// Create a new secure API key
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Get a reference to the underlying key
    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl Deref for SecureApiKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.key
    }
}

// Overwrite the key before the allocation is released
impl Drop for SecureApiKey {
    fn drop(&mut self) {
        // Zero bytes are valid UTF-8, so the string stays well-formed
        unsafe {
            let bytes = self.key.as_bytes_mut();
            bytes.iter_mut().for_each(|b| *b = 0);
        }
    }
}

impl fmt::Debug for SecureApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureApiKey([REDACTED])")
    }
}

impl fmt::Display for SecureApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED API KEY]")
    }
}

impl Clone for SecureApiKey {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
        }
    }
}

/// Finer classification of a transport failure.
///
/// Every kind without a received response still reports status 500 through
/// [`MphError::status`]; the kind is what tells a timeout from a refused connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// The 20 second request budget ran out
    Timeout,
    /// No connection could be established (DNS, refused, reset, TLS)
    Connect,
    /// A response arrived with a status outside 200..300
    Status,
    /// The composed URL could not be parsed
    InvalidUrl,
    /// No async runtime was available to run the request
    NoRuntime,
    /// Anything else reported by the HTTP stack
    Other,
}

impl TransportErrorKind {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_status() {
            TransportErrorKind::Status
        } else if err.is_builder() {
            TransportErrorKind::InvalidUrl
        } else {
            TransportErrorKind::Other
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum MphError {
    #[error("Transport error ({status}): {message}")]
    Transport {
        kind: TransportErrorKind,
        status: u16,
        message: String,
        location: Option<String>,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to decode response into {type_name}: {message}")]
    Decode {
        type_name: String,
        message: String,
        /// Response text, when the body was valid UTF-8
        source_text: Option<String>,
        location: Option<String>,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },
}

impl MphError {
    pub fn transport<T: Into<String>>(
        kind: TransportErrorKind,
        status: Option<u16>,
        message: T,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
        location: Option<&str>,
    ) -> Self {
        let error = Self::Transport {
            kind,
            status: status.unwrap_or(ABSENT_RESPONSE_STATUS),
            message: sanitize_error_message(&message.into()),
            location: location.map(String::from),
            source: source.map(|e| Arc::new(e) as Arc<dyn std::error::Error + Send + Sync>),
        };

        if let Some(loc) = error.location() {
            log::error!("{} at {}", error, loc);
        } else {
            log::error!("{}", error);
        }

        error
    }

    pub fn decode<T: Into<String>>(
        type_name: &str,
        message: T,
        source_text: Option<String>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
        location: Option<&str>,
    ) -> Self {
        let error = Self::Decode {
            type_name: type_name.to_string(),
            message: message.into(),
            source_text,
            location: location.map(String::from),
            source: source.map(|e| Arc::new(e) as Arc<dyn std::error::Error + Send + Sync>),
        };

        if let Some(loc) = error.location() {
            log::error!("{} at {}", error, loc);
        } else {
            log::error!("{}", error);
        }

        error
    }

    /// Transport error for a response whose status fell outside 200..300
    pub fn status(status: u16) -> Self {
        Self::transport(
            TransportErrorKind::Status,
            Some(status),
            format!("HTTP status {}", status),
            None::<reqwest::Error>,
            None,
        )
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// HTTP status of a transport error; 500 when no response was received
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Decode { .. } => None,
        }
    }

    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            Self::Transport { kind, .. } => Some(*kind),
            Self::Decode { .. } => None,
        }
    }

    /// Name of the shape a decode error was aiming for
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Decode { type_name, .. } => Some(type_name),
            Self::Transport { .. } => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Transport { location, .. } => location.as_deref(),
            Self::Decode { location, .. } => location.as_deref(),
        }
    }

    pub fn source_error(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        match self {
            Self::Transport { source, .. } => source.as_ref().map(|s| s.as_ref()),
            Self::Decode { source, .. } => source.as_ref().map(|s| s.as_ref()),
        }
    }
}

/// Create a transport error carrying file and line location information
#[macro_export]
macro_rules! transport_error {
    ($kind:expr, $message:expr) => {
        $crate::MphError::transport($kind, None, $message, None::<reqwest::Error>, Some(concat!(file!(), ":", line!())))
    };
    ($kind:expr, $status:expr, $message:expr) => {
        $crate::MphError::transport($kind, $status, $message, None::<reqwest::Error>, Some(concat!(file!(), ":", line!())))
    };
}

/// Create a decode error carrying file and line location information
#[macro_export]
macro_rules! decode_error {
    ($type_name:expr, $message:expr) => {
        $crate::MphError::decode($type_name, $message, None, None::<serde_json::Error>, Some(concat!(file!(), ":", line!())))
    };
    ($type_name:expr, $message:expr, $source_text:expr, $source:expr) => {
        $crate::MphError::decode($type_name, $message, $source_text, Some($source), Some(concat!(file!(), ":", line!())))
    };
}

/// HTTP verbs the API understands. Every current endpoint uses GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One API call before it is turned into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub action: String,
    pub id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// A GET request for the given action name, e.g. `getblockstats`
    pub fn get(action: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            action: action.into(),
            id: None,
            headers: Vec::new(),
        }
    }

    /// Attach the optional `id` query parameter
    pub fn with_id(mut self, id: Option<&str>) -> Self {
        self.id = id.map(String::from);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// `action={name}` followed by `&id={id}` when an id is present.
    /// Nothing is URL-encoded.
    pub fn query(&self) -> String {
        match &self.id {
            Some(id) => format!("action={}&id={}", self.action, id),
            None => format!("action={}", self.action),
        }
    }
}

lazy_static! {
    static ref API_KEY_PARAM_REGEX: Regex = Regex::new(r"api_key=[^&\s)]*").unwrap();
    // MiningPoolHub keys are 64 hex characters
    static ref HEX_KEY_REGEX: Regex = Regex::new(r"\b[0-9a-fA-F]{32,}\b").unwrap();
}

/// Helper function to sanitize error messages to prevent leaking API keys
pub fn sanitize_error_message(message: &str) -> String {
    let sanitized = API_KEY_PARAM_REGEX.replace_all(message, "api_key=[REDACTED]");
    HEX_KEY_REGEX.replace_all(&sanitized, "[REDACTED]").into_owned()
}
