//! # WooCommerce API Rust SDK
//!
//! A typed Rust client for the WooCommerce REST API, providing validated
//! configuration, HTTP Basic authentication, defensive decoding of orders,
//! products and variations, and transparent paging through large listings.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WooConfig`] and [`WooConfigBuilder`]
//! - Validated newtypes for the consumer key pair and the root endpoint
//! - [`RestClient`], which creates authenticated typed requests
//! - Immutable request builders for every documented list filter
//! - Page drainers exposed as `futures` streams
//! - A process-wide [`WooApi`] for applications that configure once at startup
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{WooConfig, ConsumerKey, ConsumerSecret, RootEndpoint};
//!
//! let config = WooConfig::builder()
//!     .consumer_key(ConsumerKey::new("ck_1234").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_5678").unwrap())
//!     .root_endpoint(RootEndpoint::new("https://shop.example.com/wp-json/wc/v3").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use woocommerce_api::RestClient;
//! use woocommerce_api::rest::{CollectionFilters, PagedRequest, TypedRequest};
//! use woocommerce_api::rest::params::OrderStatus;
//!
//! let client = RestClient::new(config)?;
//!
//! // One request, one result
//! let order = client.retrieve_order(727).execute(&client).await?;
//!
//! // Every processing order, page by page
//! let orders = client
//!     .list_orders()
//!     .status(&[OrderStatus::Processing])
//!     .per_page(100)
//!     .fetch_all(&client)
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **Explicit client**: a [`RestClient`] is configured on construction; the
//!   global [`WooApi`] is optional
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Immutable requests**: builder methods return new requests
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One round trip per call**: nothing is retried or cached
#![recursion_limit = "256"]

pub mod clients;
pub mod config;
pub mod error;
mod global;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ConsumerKey, ConsumerSecret, RootEndpoint, WooConfig, WooConfigBuilder};
pub use error::ConfigError;
pub use global::WooApi;

// Re-export HTTP client types
pub use clients::{
    DecodeError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponseError,
    InvalidHttpRequestError, RestClient, Transport, TransportError,
};

// Re-export request and record types
pub use rest::resources::{
    ListOrdersRequest, ListProductsRequest, ListVariationsRequest, MetaData, MetaValue, Order,
    OrderRequest, Product, ProductCategory, ProductVariation, ShippingLabel,
};
pub use rest::{CollectionFilters, GenericRequest, Page, PageFailurePolicy, PagedRequest, TypedRequest};
