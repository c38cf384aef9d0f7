//! Network transport.
//!
//! The SDK never talks to a socket directly. [`HttpClient`](crate::clients::HttpClient)
//! hands a fully formed [`TransportRequest`] to a [`Transport`] and gets the
//! status and raw bytes back. [`ReqwestTransport`] is the default
//! implementation; tests and callers with special needs can plug in their own.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use futures::future::BoxFuture;

use crate::clients::http_request::HttpMethod;

/// A fully formed request, ready to be put on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL including the encoded query string.
    pub url: String,
    /// Every header to send.
    pub headers: HashMap<String, String>,
    /// The raw body, if any.
    pub body: Option<Vec<u8>>,
}

/// The raw result of a completed round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// The round trip could not be completed (DNS, connection, TLS, timeout).
#[derive(Debug)]
pub struct TransportError(Box<dyn Error + Send + Sync + 'static>);

impl TransportError {
    /// Wraps any error as a transport failure.
    pub fn new(error: impl Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for TransportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.0)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}

/// Performs one HTTP exchange.
///
/// Contract:
/// - sends exactly one request per call, no retries;
/// - returns `Ok` for any completed exchange, whatever the status code;
/// - returns `Err` only when no response was received.
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends the request and returns the status and raw body.
    fn send(&self, request: TransportRequest)
        -> BoxFuture<'_, Result<TransportResponse, TransportError>>;
}

/// [`Transport`] backed by a `reqwest` client using rustls.
///
/// `reqwest` keeps no response cache, so every call is a live fetch.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh rustls-backed client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Creates a transport around an existing `reqwest` client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Returns the underlying `reqwest` client.
    #[must_use]
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<TransportResponse, TransportError>> {
        Box::pin(async move {
            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&request.url),
                HttpMethod::Post => self.client.post(&request.url),
                HttpMethod::Put => self.client.put(&request.url),
            };

            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }

            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();

            Ok(TransportResponse { status, body })
        })
    }
}
