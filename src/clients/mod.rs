//! HTTP client types for WooCommerce API communication.
//!
//! This module provides the foundational HTTP layer: immutable request
//! descriptors, query encoding, the pluggable network [`Transport`], and the
//! [`HttpClient`] that ties them together and decodes responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Performs one round trip per call and decodes JSON
//! - [`HttpRequest`]: An immutable description of a pending call
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT)
//! - [`Transport`]: The seam between the SDK and the network
//! - [`rest::RestClient`]: Higher-level client bound to a [`WooConfig`](crate::WooConfig)
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(None)?;
//! let request = HttpRequest::new(HttpMethod::Get, "https://shop.example.com/wp-json/wc/v3/orders")
//!     .with_query_param("per_page", "20");
//!
//! let orders: serde_json::Value = client.execute(&request, "Order").await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Every call performs exactly one round trip and reports
//! its outcome; callers decide whether to try again.

mod errors;
mod http_client;
mod http_request;
mod query;
pub mod rest;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use errors::{DecodeError, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use query::{append_query, encode_query};
pub use transport::{
    ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse,
};

// Re-export REST client types at the clients module level
pub use rest::RestClient;
