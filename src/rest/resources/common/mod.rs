//! Types shared across WooCommerce resources.

mod address;
pub(crate) mod attributes;
mod meta_data;

pub use address::{Billing, Shipping};
pub use meta_data::{MetaData, MetaValue, ShippingLabel};
