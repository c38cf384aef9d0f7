//! WooCommerce resource records and the requests that fetch them.
//!
//! # Available Resources
//!
//! | Record | Request | Endpoint |
//! |--------|---------|----------|
//! | [`Order`] | [`ListOrdersRequest`] | `GET orders` |
//! | [`Order`] | [`OrderRequest`] | `GET orders/{id}` |
//! | [`Product`] | [`ListProductsRequest`] | `GET products` |
//! | [`ProductVariation`] | [`ListVariationsRequest`] | `GET products/{id}/variations` |
//!
//! Requests are created by [`RestClient`](crate::RestClient).

pub mod common;
mod order;
mod product;
mod variation;

pub use common::{Billing, MetaData, MetaValue, Shipping, ShippingLabel};
pub use order::{
    CouponLine, FeeLine, LineItem, LineTax, ListOrdersRequest, Order, OrderRequest, Refund,
    ShippingLine, TaxLine,
};
pub use product::{ListProductsRequest, Product, ProductCategory};
pub use variation::{ListVariationsRequest, ProductVariation};
