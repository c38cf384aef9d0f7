//! Typed request infrastructure for the WooCommerce REST API.
//!
//! This module provides:
//!
//! - **[`TypedRequest`] trait**: an immutable request that knows its response type
//! - **[`PagedRequest`] trait**: `page` / `per_page` builders and the page drainer
//! - **[`CollectionFilters`] trait**: filters shared by the order and product listings
//! - **[`GenericRequest<T>`]**: a typed request for any endpoint
//! - **[`Page<T>`]**: one page of a drained listing
//! - [`params`]: query parameter enums and defaults
//! - [`resources`]: the order, product and variation records
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use woocommerce_api::rest::{CollectionFilters, PagedRequest, TypedRequest};
//! use woocommerce_api::rest::params::SortDirection;
//!
//! // Single page
//! let orders = client.list_orders().order(SortDirection::Desc).execute(&client).await?;
//!
//! // Every page
//! let mut pages = client.list_variations(799).per_page(100).drain(&client);
//! while let Some(page) = pages.next().await {
//!     for variation in page?.items {
//!         println!("{} {}", variation.sku, variation.price);
//!     }
//! }
//! ```

mod pagination;
pub mod params;
mod request;
pub mod resources;

pub use pagination::{Page, PageFailurePolicy, PagedRequest};
pub use params::CollectionFilters;
pub use request::{GenericRequest, TypedRequest};
