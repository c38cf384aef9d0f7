//! REST client implementation for the WooCommerce API.
//!
//! This module provides the [`RestClient`] type, the entry point for
//! creating authenticated requests against one store.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, Transport};
use crate::config::WooConfig;
use crate::rest::resources::{
    ListOrdersRequest, ListProductsRequest, ListVariationsRequest, OrderRequest,
};
use crate::rest::{GenericRequest, TypedRequest};

/// REST API client for one WooCommerce store.
///
/// Holds the store configuration and the HTTP client. Construction is the
/// configuration step: a `RestClient` always has credentials and a root
/// endpoint.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync` and read-only after construction, making it
/// safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::RestClient;
/// use woocommerce_api::rest::TypedRequest;
///
/// let client = RestClient::new(config)?;
///
/// let order = client.retrieve_order(727).execute(&client).await?;
/// let products = client.list_products().search("hoodie").execute(&client).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Credentials and root endpoint.
    config: WooConfig,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given store.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP backend cannot be initialized.
    pub fn new(config: WooConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(Some(&config))?;
        tracing::debug!(root = %config.root_endpoint(), "created WooCommerce REST client");
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Creates a new REST client that sends through the given transport.
    #[must_use]
    pub fn with_transport(config: WooConfig, transport: Arc<dyn Transport>) -> Self {
        let http_client = HttpClient::with_transport(transport, Some(&config));
        Self {
            http_client,
            config,
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &WooConfig {
        &self.config
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// `GET orders`.
    #[must_use]
    pub fn list_orders(&self) -> ListOrdersRequest {
        ListOrdersRequest::from_descriptor(self.authorized(HttpMethod::Get, "orders"))
    }

    /// `GET orders/{number}`.
    #[must_use]
    pub fn retrieve_order(&self, number: impl fmt::Display) -> OrderRequest {
        OrderRequest::from_descriptor(self.authorized(HttpMethod::Get, &format!("orders/{number}")))
    }

    /// `GET products`.
    #[must_use]
    pub fn list_products(&self) -> ListProductsRequest {
        ListProductsRequest::from_descriptor(self.authorized(HttpMethod::Get, "products"))
    }

    /// `GET products/{product_id}/variations`.
    #[must_use]
    pub fn list_variations(&self, product_id: u64) -> ListVariationsRequest {
        ListVariationsRequest::from_descriptor(
            self.authorized(HttpMethod::Get, &format!("products/{product_id}/variations")),
        )
    }

    /// A typed request for any path under the root endpoint.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use woocommerce_api::clients::HttpMethod;
    /// use woocommerce_api::rest::TypedRequest;
    ///
    /// let coupons = client
    ///     .request::<Vec<serde_json::Value>>(HttpMethod::Get, "coupons")
    ///     .with_query_param("code", "SUMMER")
    ///     .execute(&client)
    ///     .await?;
    /// ```
    #[must_use]
    pub fn request<T: DeserializeOwned + Send>(
        &self,
        method: HttpMethod,
        path: &str,
    ) -> GenericRequest<T> {
        GenericRequest::from_descriptor(self.authorized(method, path))
    }

    fn authorized(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest::new(method, self.config.root_endpoint().join(path))
            .with_header("Authorization", self.config.authorization_header())
    }
}
