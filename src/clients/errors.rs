//! HTTP-specific error types for the WooCommerce API SDK.
//!
//! This module contains the error types a request can fail with once it
//! reaches the HTTP layer.
//!
//! # Error Handling
//!
//! - [`HttpError::Network`]: The round trip did not complete (DNS, connection, timeout)
//! - [`HttpError::Response`]: The server answered with a non-2xx status
//! - [`HttpError::Decode`]: The body did not match the declared response shape
//! - [`HttpError::InvalidRequest`]: The request body could not be built
//!
//! None of these are retried by the SDK. Retrying is the caller's decision.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::HttpError;
//!
//! match client.retrieve_order(727).execute(&client).await {
//!     Ok(order) => println!("Order {}", order.number),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Decode(e)) => println!("Unexpected {} payload: {}", e.resource, e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::clients::transport::TransportError;

/// Error returned when the API answers with a non-successful status.
///
/// WooCommerce error bodies look like
/// `{"code": "woocommerce_rest_invalid_id", "message": "Invalid ID.", "data": {"status": 404}}`.
/// The `code` member is kept in `error_code` and the human readable `message`
/// in `message`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::HttpResponseError;
///
/// let error = HttpResponseError::from_body(
///     404,
///     br#"{"code":"woocommerce_rest_shop_order_invalid_id","message":"Invalid ID.","data":{"status":404}}"#,
/// );
///
/// assert_eq!(error.code, 404);
/// assert_eq!(error.message, "Invalid ID.");
/// assert_eq!(error.error_code.as_deref(), Some("woocommerce_rest_shop_order_invalid_id"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message reported by the API, or the raw body.
    pub message: String,
    /// WooCommerce's machine readable error code, if present.
    pub error_code: Option<String>,
}

impl HttpResponseError {
    /// Builds the error from a status code and the raw response body.
    #[must_use]
    pub fn from_body(code: u16, body: &[u8]) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_slice(body).ok();

        let error_code = parsed
            .as_ref()
            .and_then(|v| v.get("code"))
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string);

        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(serde_json::Value::as_str)
            .map(ToString::to_string)
            .or_else(|| {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (!text.is_empty()).then_some(text)
            })
            .unwrap_or_else(|| format!("Request failed with status {code}"));

        Self {
            code,
            message,
            error_code,
        }
    }
}

/// Error returned when a response body does not match the declared shape.
///
/// Only required fields can produce this error. Fields decoded defensively
/// (metadata values, variation prices) fall back to defaults instead.
#[derive(Debug, Error)]
#[error("Failed to decode {resource} response: {source}")]
pub struct DecodeError {
    /// The record type that was being decoded (e.g., "Order").
    pub resource: &'static str,
    /// The underlying serde error.
    #[source]
    pub source: serde_json::Error,
}

/// Error returned when an HTTP request cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {reason}")]
    InvalidBody {
        /// The serializer's error message.
        reason: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Every request either returns its decoded value or exactly one of these.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request body could not be built.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
