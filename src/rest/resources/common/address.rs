//! Billing and shipping addresses on orders.

use serde::{Deserialize, Serialize};

/// Billing address and contact details of an order.
///
/// WooCommerce sends every field, using empty strings for blanks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Billing {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Company name.
    pub company: String,
    /// Address line 1.
    #[serde(rename = "address_1")]
    pub address1: String,
    /// Address line 2.
    #[serde(rename = "address_2")]
    pub address2: String,
    /// City name.
    pub city: String,
    /// ISO code or name of the state, province or district.
    pub state: String,
    /// Postal code.
    pub postcode: String,
    /// ISO country code.
    pub country: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}

/// Shipping address of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Shipping {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Company name.
    pub company: String,
    /// Address line 1.
    #[serde(rename = "address_1")]
    pub address1: String,
    /// Address line 2.
    #[serde(rename = "address_2")]
    pub address2: String,
    /// City name.
    pub city: String,
    /// ISO code or name of the state, province or district.
    pub state: String,
    /// Postal code.
    pub postcode: String,
    /// ISO country code.
    pub country: String,
}
