//! REST API client for a WooCommerce store.
//!
//! [`RestClient`] binds a [`WooConfig`](crate::WooConfig) to an
//! [`HttpClient`](crate::clients::HttpClient) and creates typed requests
//! for the store's endpoints. Every request it creates carries the HTTP
//! Basic `Authorization` header derived from the consumer key pair.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{RestClient, WooConfig, ConsumerKey, ConsumerSecret, RootEndpoint};
//! use woocommerce_api::rest::{PagedRequest, TypedRequest};
//!
//! let config = WooConfig::builder()
//!     .consumer_key(ConsumerKey::new("ck_1234")?)
//!     .consumer_secret(ConsumerSecret::new("cs_5678")?)
//!     .root_endpoint(RootEndpoint::new("https://shop.example.com/wp-json/wc/v3")?)
//!     .build()?;
//!
//! let client = RestClient::new(config)?;
//! let orders = client.list_orders().per_page(20).execute(&client).await?;
//! ```
//!
//! # Paths
//!
//! Paths are joined onto the root endpoint with a single slash; a leading
//! slash on the path is ignored.

mod client;

pub use client::RestClient;
