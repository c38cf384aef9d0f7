//! HTTP client for WooCommerce API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] descriptor into exactly one network round trip and
//! decodes the response.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::errors::{DecodeError, HttpError, HttpResponseError};
use crate::clients::http_request::{set_header, HttpRequest};
use crate::clients::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::config::WooConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the WooCommerce API.
///
/// The client handles:
/// - Default headers (User-Agent, Accept, cache bypass)
/// - URL construction with the `+`-safe query encoding
/// - Status checking and JSON decoding
///
/// Credentials are not stored here; they travel on each request
/// descriptor (see [`RestClient`](crate::RestClient)).
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The transport performing the round trip.
    transport: Arc<dyn Transport>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client backed by [`ReqwestTransport`].
    ///
    /// # Arguments
    ///
    /// * `config` - Optional configuration providing the `user_agent_prefix`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(config: Option<&WooConfig>) -> Result<Self, HttpError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Creates a new HTTP client using the given transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, config: Option<&WooConfig>) -> Self {
        let user_agent_prefix = config
            .and_then(WooConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WooCommerce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        // Responses are never served from a cache
        default_headers.insert("Cache-Control".to_string(), "no-cache".to_string());
        default_headers.insert("Pragma".to_string(), "no-cache".to_string());

        Self {
            transport,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends the request and returns the raw body of a 2xx response.
    ///
    /// Performs exactly one round trip. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The round trip does not complete (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn send(&self, request: &HttpRequest) -> Result<Vec<u8>, HttpError> {
        let url = request.url();

        // Request headers replace defaults regardless of name case
        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.headers {
            for (key, value) in extra {
                set_header(&mut headers, key.clone(), value.clone());
            }
        }

        tracing::debug!(method = request.method.as_str(), %url, "sending WooCommerce request");

        let response = self
            .transport
            .send(TransportRequest {
                method: request.method,
                url,
                headers,
                body: request.body.clone(),
            })
            .await?;

        if !response.is_success() {
            let error = HttpResponseError::from_body(response.status, &response.body);
            tracing::debug!(
                status = response.status,
                error_code = error.error_code.as_deref().unwrap_or(""),
                "WooCommerce request failed"
            );
            return Err(error.into());
        }

        Ok(response.body)
    }

    /// Sends the request and decodes the body into `T`.
    ///
    /// # Arguments
    ///
    /// * `request` - The request descriptor
    /// * `resource` - Name of the record type, used in decode errors
    ///
    /// # Errors
    ///
    /// Everything [`send`](Self::send) returns, plus [`HttpError::Decode`]
    /// when the body does not match `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        resource: &'static str,
    ) -> Result<T, HttpError> {
        let body = self.send(request).await?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::debug!(resource, error = %source, "failed to decode WooCommerce response");
            HttpError::Decode(DecodeError { resource, source })
        })
    }
}
