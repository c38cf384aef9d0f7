//! HTTP request descriptor for the WooCommerce API SDK.
//!
//! [`HttpRequest`] is an immutable description of one pending call. Every
//! `with_*` method returns a new descriptor and leaves the original
//! untouched, so a base request can be reused and branched freely.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::query::append_query;

/// HTTP methods used by the WooCommerce API client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// A request to be sent to the WooCommerce API.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::{HttpMethod, HttpRequest};
///
/// let base = HttpRequest::new(HttpMethod::Get, "https://example.com/wp-json/wc/v3/orders");
/// let first = base.with_query_param("page", "1");
/// let second = first.with_query_param("page", "2");
///
/// assert_eq!(base.query_param("page"), None);
/// assert_eq!(first.query_param("page"), Some("1"));
/// assert_eq!(second.query_param("page"), Some("2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL of the endpoint, without query string.
    pub endpoint: String,
    /// Headers to send with the request.
    pub headers: Option<HashMap<String, String>>,
    /// Query parameters to append to the URL.
    pub query: HashMap<String, String>,
    /// The raw request body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a descriptor with no headers, parameters or body.
    #[must_use]
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            headers: None,
            query: HashMap::new(),
            body: None,
        }
    }

    /// Returns a copy with one query parameter set, replacing any previous value.
    #[must_use]
    pub fn with_query_param(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut request = self.clone();
        request.query.insert(name.into(), value.into());
        request
    }

    /// Returns a copy with one header set, replacing any previous value.
    ///
    /// Header names compare case-insensitively.
    #[must_use]
    pub fn with_header(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut request = self.clone();
        set_header(
            request.headers.get_or_insert_with(HashMap::new),
            name.into(),
            value.into(),
        );
        request
    }

    /// Returns a copy with the given raw body.
    #[must_use]
    pub fn with_body(&self, body: impl Into<Vec<u8>>) -> Self {
        let mut request = self.clone();
        request.body = Some(body.into());
        request
    }

    /// Returns a copy with `value` serialized as the JSON body.
    ///
    /// Also sets `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidBody`] if `value` cannot be
    /// serialized to JSON.
    pub fn with_json_body<T: Serialize + ?Sized>(
        &self,
        value: &T,
    ) -> Result<Self, InvalidHttpRequestError> {
        let body = serde_json::to_vec(value).map_err(|e| InvalidHttpRequestError::InvalidBody {
            reason: e.to_string(),
        })?;
        Ok(self
            .with_body(body)
            .with_header("Content-Type", "application/json"))
    }

    /// Returns the value of a query parameter, if set.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Returns the value of a header, if set. The lookup ignores case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Returns the full URL with the encoded query string.
    #[must_use]
    pub fn url(&self) -> String {
        append_query(&self.endpoint, &self.query)
    }
}

/// Inserts a header, dropping any existing entry whose name differs only in case.
pub(crate) fn set_header(headers: &mut HashMap<String, String>, name: String, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}
