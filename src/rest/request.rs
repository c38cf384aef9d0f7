//! Typed requests.
//!
//! This module defines the [`TypedRequest`] trait. A typed request wraps an
//! immutable [`HttpRequest`] descriptor and declares the record type its
//! response decodes into. Builder methods never mutate: each one returns a
//! new request, so a base request can be refined in several directions.
//!
//! # Implementing a Request
//!
//! ```rust,ignore
//! use woocommerce_api::clients::HttpRequest;
//! use woocommerce_api::rest::TypedRequest;
//!
//! #[derive(Clone, Debug)]
//! pub struct ListCouponsRequest {
//!     descriptor: HttpRequest,
//! }
//!
//! impl TypedRequest for ListCouponsRequest {
//!     type Response = Vec<Coupon>;
//!     const NAME: &'static str = "Coupon";
//!
//!     fn descriptor(&self) -> &HttpRequest {
//!         &self.descriptor
//!     }
//!
//!     fn from_descriptor(descriptor: HttpRequest) -> Self {
//!         Self { descriptor }
//!     }
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpError, HttpRequest, InvalidHttpRequestError, RestClient};

/// A request whose response decodes into [`Self::Response`].
///
/// Implementors only provide access to their descriptor; execution and
/// parameter handling come from the provided methods.
#[allow(async_fn_in_trait)]
pub trait TypedRequest: Clone + Send + Sync + Sized {
    /// The decoded response: a single record or a `Vec` of records.
    type Response: DeserializeOwned + Send;

    /// The record type name (e.g., "Order"), used in decode errors and logs.
    const NAME: &'static str;

    /// Returns the underlying request descriptor.
    fn descriptor(&self) -> &HttpRequest;

    /// Wraps a descriptor in this request type.
    fn from_descriptor(descriptor: HttpRequest) -> Self;

    /// Returns a copy with one query parameter set.
    ///
    /// Setting the same name twice keeps the last value.
    #[must_use]
    fn with_query_param(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_descriptor(self.descriptor().with_query_param(name, value))
    }

    /// Performs exactly one round trip and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request could not be completed,
    /// [`HttpError::Response`] for a non-2xx status and [`HttpError::Decode`]
    /// if the body does not match [`Self::Response`].
    async fn execute(&self, client: &RestClient) -> Result<Self::Response, HttpError> {
        client
            .http_client()
            .execute(self.descriptor(), Self::NAME)
            .await
    }
}

/// A typed request for any endpoint, with no endpoint-specific builders.
///
/// Created with [`RestClient::request`].
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::clients::HttpMethod;
/// use woocommerce_api::rest::TypedRequest;
/// use woocommerce_api::Order;
///
/// let order: Order = client
///     .request::<Order>(HttpMethod::Put, "orders/727")
///     .with_json_body(&serde_json::json!({"status": "completed"}))?
///     .execute(&client)
///     .await?;
/// ```
pub struct GenericRequest<T> {
    descriptor: HttpRequest,
    _response: PhantomData<fn() -> T>,
}

impl<T> GenericRequest<T> {
    /// Returns a copy with one header set.
    #[must_use]
    pub fn with_header(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::wrap(self.descriptor.with_header(name, value))
    }

    /// Returns a copy with `value` serialized as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidBody`] if `value` cannot be
    /// serialized.
    pub fn with_json_body<B: Serialize + ?Sized>(
        &self,
        value: &B,
    ) -> Result<Self, InvalidHttpRequestError> {
        Ok(Self::wrap(self.descriptor.with_json_body(value)?))
    }

    const fn wrap(descriptor: HttpRequest) -> Self {
        Self {
            descriptor,
            _response: PhantomData,
        }
    }
}

impl<T> Clone for GenericRequest<T> {
    fn clone(&self) -> Self {
        Self::wrap(self.descriptor.clone())
    }
}

impl<T> fmt::Debug for GenericRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericRequest")
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

impl<T: DeserializeOwned + Send> TypedRequest for GenericRequest<T> {
    type Response = T;
    const NAME: &'static str = "response";

    fn descriptor(&self) -> &HttpRequest {
        &self.descriptor
    }

    fn from_descriptor(descriptor: HttpRequest) -> Self {
        Self::wrap(descriptor)
    }
}
