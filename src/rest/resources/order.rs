//! Order resource.
//!
//! This module provides the [`Order`] record and the requests that read
//! orders: [`ListOrdersRequest`] for `GET orders` and [`OrderRequest`] for
//! `GET orders/{id}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{CollectionFilters, PagedRequest, TypedRequest};
//! use woocommerce_api::rest::params::OrderStatus;
//!
//! // One page of processing orders
//! let orders = client
//!     .list_orders()
//!     .status(&[OrderStatus::Processing])
//!     .per_page(50)
//!     .execute(&client)
//!     .await?;
//!
//! // A single order
//! let order = client.retrieve_order(727).dp(2).execute(&client).await?;
//! println!("{} {}", order.number, order.total);
//! ```

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::clients::HttpRequest;
use crate::rest::params::{OrderStatus, DATE_FORMAT};
use crate::rest::{CollectionFilters, PageFailurePolicy, PagedRequest, TypedRequest};

use super::common::{Billing, MetaData, Shipping};

/// A WooCommerce order.
///
/// Monetary amounts are kept as the decimal strings WooCommerce sends.
/// Dates are the store-local `yyyy-MM-ddTHH:mm:ss` strings; see
/// [`Order::created_at`] for a parsed form.
///
/// Only `id`, `number` and `status` are required. Any other field missing
/// from the payload decodes to its default: `""` for strings, `0` for
/// numbers, empty lists and default addresses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique identifier.
    pub id: u64,
    /// Parent order id.
    #[serde(default)]
    pub parent_id: u64,
    /// Order number.
    pub number: String,
    /// Order key.
    #[serde(default)]
    pub order_key: String,
    /// How the order was created (e.g., "checkout", "admin").
    #[serde(default)]
    pub created_via: String,
    /// WooCommerce version that last updated the order.
    #[serde(default)]
    pub version: String,
    /// Order status (e.g., "processing").
    pub status: String,
    /// ISO currency code.
    #[serde(default)]
    pub currency: String,

    /// Creation date, store time.
    #[serde(default)]
    pub date_created: String,
    /// Creation date, GMT.
    #[serde(default)]
    pub date_created_gmt: String,
    /// Last modification date, store time.
    #[serde(default)]
    pub date_modified: String,
    /// Last modification date, GMT.
    #[serde(default)]
    pub date_modified_gmt: String,

    /// Total discount amount.
    #[serde(default)]
    pub discount_total: String,
    /// Total discount tax amount.
    #[serde(default)]
    pub discount_tax: String,
    /// Total shipping amount.
    #[serde(default)]
    pub shipping_total: String,
    /// Total shipping tax amount.
    #[serde(default)]
    pub shipping_tax: String,
    /// Sum of line item taxes.
    #[serde(default)]
    pub cart_tax: String,
    /// Grand total.
    #[serde(default)]
    pub total: String,
    /// Sum of all taxes.
    #[serde(default)]
    pub total_tax: String,
    /// Whether prices included tax during checkout.
    #[serde(default)]
    pub prices_include_tax: bool,

    /// Customer id, 0 for guests.
    #[serde(default)]
    pub customer_id: u64,
    /// Customer IP address.
    #[serde(default)]
    pub customer_ip_address: String,
    /// Customer user agent.
    #[serde(default)]
    pub customer_user_agent: String,
    /// Note left by the customer at checkout.
    #[serde(default)]
    pub customer_note: String,

    /// Billing address.
    #[serde(default)]
    pub billing: Billing,
    /// Shipping address.
    #[serde(default)]
    pub shipping: Shipping,

    /// Payment method id.
    #[serde(default)]
    pub payment_method: String,
    /// Payment method title.
    #[serde(default)]
    pub payment_method_title: String,
    /// Payment gateway transaction id.
    #[serde(default)]
    pub transaction_id: String,

    /// Payment date, store time.
    #[serde(default)]
    pub date_paid: Option<String>,
    /// Payment date, GMT.
    #[serde(default)]
    pub date_paid_gmt: Option<String>,
    /// Completion date, store time.
    #[serde(default)]
    pub date_completed: Option<String>,
    /// Completion date, GMT.
    #[serde(default)]
    pub date_completed_gmt: Option<String>,
    /// Hash of cart items.
    #[serde(default)]
    pub cart_hash: String,

    /// Metadata entries.
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
    /// Line items.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Tax lines.
    #[serde(default)]
    pub tax_lines: Vec<TaxLine>,
    /// Shipping lines.
    #[serde(default)]
    pub shipping_lines: Vec<ShippingLine>,
    /// Fee lines.
    #[serde(default)]
    pub fee_lines: Vec<FeeLine>,
    /// Coupon lines.
    #[serde(default)]
    pub coupon_lines: Vec<CouponLine>,
    /// Refunds.
    #[serde(default)]
    pub refunds: Vec<Refund>,

    /// Write-only flag that marks the order paid when creating or updating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_paid: Option<bool>,
}

impl Order {
    /// Folds `meta_data` into a key → string value map.
    ///
    /// When keys repeat, the later entry wins. Non-string values appear as `""`.
    #[must_use]
    pub fn meta_dict(&self) -> HashMap<String, String> {
        self.meta_data
            .iter()
            .map(|meta| (meta.key.clone(), meta.value.clone()))
            .collect()
    }

    /// Parses [`date_created`](Self::date_created) as store-local time.
    #[must_use]
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date_created, DATE_FORMAT).ok()
    }

    /// Parses [`date_paid`](Self::date_paid) as store-local time.
    #[must_use]
    pub fn paid_at(&self) -> Option<NaiveDateTime> {
        self.date_paid
            .as_deref()
            .and_then(|date| NaiveDateTime::parse_from_str(date, DATE_FORMAT).ok())
    }
}

/// A tax amount applied to one line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LineTax {
    /// Tax rate id.
    pub id: u64,
    /// Tax total.
    pub total: String,
    /// Tax subtotal.
    pub subtotal: String,
}

/// An ordered product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Item id.
    pub id: u64,
    /// Product name.
    pub name: String,
    /// Product id.
    pub product_id: u64,
    /// Variation id, 0 when not a variation.
    #[serde(default)]
    pub variation_id: u64,
    /// Quantity ordered.
    pub quantity: i64,
    /// Tax class of the product.
    #[serde(default)]
    pub tax_class: String,
    /// Line subtotal (before discounts).
    #[serde(default)]
    pub subtotal: String,
    /// Line subtotal tax.
    #[serde(default)]
    pub subtotal_tax: String,
    /// Line total (after discounts).
    #[serde(default)]
    pub total: String,
    /// Line total tax.
    #[serde(default)]
    pub total_tax: String,
    /// Taxes applied to the line.
    #[serde(default)]
    pub taxes: Vec<LineTax>,
    /// Metadata entries.
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
    /// Product SKU.
    #[serde(default)]
    pub sku: Option<String>,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
}

/// A tax applied to the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxLine {
    /// Item id.
    pub id: u64,
    /// Tax rate code.
    #[serde(default)]
    pub rate_code: String,
    /// Tax rate id.
    #[serde(default, deserialize_with = "string_or_number")]
    pub rate_id: String,
    /// Tax rate label.
    #[serde(default)]
    pub label: String,
    /// Whether the rate is compound.
    #[serde(default)]
    pub compound: bool,
    /// Tax total, without shipping tax.
    #[serde(default)]
    pub tax_total: String,
    /// Shipping tax total.
    #[serde(default)]
    pub shipping_tax_total: String,
    /// Metadata entries.
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
}

/// A shipping method applied to the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingLine {
    /// Item id.
    pub id: u64,
    /// Shipping method name.
    #[serde(default)]
    pub method_title: String,
    /// Shipping method id.
    #[serde(default)]
    pub method_id: String,
    /// Line total.
    #[serde(default)]
    pub total: String,
    /// Line total tax.
    #[serde(default)]
    pub total_tax: String,
    /// Taxes applied to the line.
    #[serde(default)]
    pub taxes: Vec<LineTax>,
    /// Metadata entries.
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
}

/// A fee added to the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeeLine {
    /// Item id.
    pub id: u64,
    /// Fee name.
    #[serde(default)]
    pub name: String,
    /// Tax class of the fee.
    #[serde(default)]
    pub tax_class: String,
    /// Tax status of the fee.
    #[serde(default)]
    pub tax_status: String,
    /// Line total.
    #[serde(default)]
    pub total: String,
    /// Line total tax.
    #[serde(default)]
    pub total_tax: String,
    /// Taxes applied to the fee.
    #[serde(default)]
    pub taxes: Vec<LineTax>,
    /// Metadata entries.
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
}

/// A coupon applied to the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouponLine {
    /// Item id.
    pub id: u64,
    /// Coupon code.
    #[serde(default)]
    pub code: String,
    /// Discount total.
    #[serde(default)]
    pub discount: String,
    /// Discount tax total.
    #[serde(default)]
    pub discount_tax: String,
    /// Metadata entries.
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
}

/// A refund issued against the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Refund {
    /// Refund id.
    pub id: u64,
    /// Refund reason.
    #[serde(default)]
    pub reason: String,
    /// Refund total (negative decimal string).
    #[serde(default)]
    pub total: String,
}

// Some tax plugins send the rate id as a number
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// `GET orders`: lists orders.
///
/// A failed page ends a drain with the error.
#[derive(Clone, Debug)]
pub struct ListOrdersRequest {
    descriptor: HttpRequest,
}

impl ListOrdersRequest {
    /// Limit results to orders with any of the given statuses.
    #[must_use]
    pub fn status(&self, statuses: &[OrderStatus]) -> Self {
        let value = statuses
            .iter()
            .map(OrderStatus::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.with_query_param("status", value)
    }

    /// Limit results to orders assigned to a customer.
    #[must_use]
    pub fn customer(&self, customer_id: u64) -> Self {
        self.with_query_param("customer", customer_id.to_string())
    }

    /// Limit results to orders containing a product.
    #[must_use]
    pub fn product(&self, product_id: u64) -> Self {
        self.with_query_param("product", product_id.to_string())
    }

    /// Number of decimal points used in monetary amounts.
    #[must_use]
    pub fn dp(&self, decimals: u32) -> Self {
        self.with_query_param("dp", decimals.to_string())
    }
}

impl TypedRequest for ListOrdersRequest {
    type Response = Vec<Order>;
    const NAME: &'static str = "Order";

    fn descriptor(&self) -> &HttpRequest {
        &self.descriptor
    }

    fn from_descriptor(descriptor: HttpRequest) -> Self {
        Self { descriptor }
    }
}

impl PagedRequest<Order> for ListOrdersRequest {
    const ON_PAGE_FAILURE: PageFailurePolicy = PageFailurePolicy::Propagate;
}

impl CollectionFilters for ListOrdersRequest {}

/// `GET orders/{id}`: retrieves one order.
#[derive(Clone, Debug)]
pub struct OrderRequest {
    descriptor: HttpRequest,
}

impl OrderRequest {
    /// Number of decimal points used in monetary amounts.
    #[must_use]
    pub fn dp(&self, decimals: u32) -> Self {
        self.with_query_param("dp", decimals.to_string())
    }
}

impl TypedRequest for OrderRequest {
    type Response = Order;
    const NAME: &'static str = "Order";

    fn descriptor(&self) -> &HttpRequest {
        &self.descriptor
    }

    fn from_descriptor(descriptor: HttpRequest) -> Self {
        Self { descriptor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::rest::params::{Context, SortAttribute, SortDirection};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    const ENDPOINT: &str = "https://shop.example.com/wp-json/wc/v3/orders";

    fn list() -> ListOrdersRequest {
        ListOrdersRequest::from_descriptor(HttpRequest::new(HttpMethod::Get, ENDPOINT))
    }

    fn order_json() -> serde_json::Value {
        json!({
            "id": 727,
            "parent_id": 0,
            "number": "727",
            "order_key": "wc_order_58d2d042d1d",
            "created_via": "rest-api",
            "version": "3.0.0",
            "status": "processing",
            "currency": "USD",
            "date_created": "2017-03-22T16:28:02",
            "date_created_gmt": "2017-03-22T19:28:02",
            "date_modified": "2017-03-22T16:28:08",
            "date_modified_gmt": "2017-03-22T19:28:08",
            "discount_total": "0.00",
            "discount_tax": "0.00",
            "shipping_total": "10.00",
            "shipping_tax": "0.00",
            "cart_tax": "1.35",
            "total": "29.35",
            "total_tax": "1.35",
            "prices_include_tax": false,
            "customer_id": 0,
            "customer_ip_address": "",
            "customer_user_agent": "",
            "customer_note": "",
            "billing": {
                "first_name": "John",
                "last_name": "Doe",
                "company": "",
                "address_1": "969 Market",
                "address_2": "",
                "city": "San Francisco",
                "state": "CA",
                "postcode": "94103",
                "country": "US",
                "email": "john.doe@example.com",
                "phone": "(555) 555-5555"
            },
            "shipping": {
                "first_name": "John",
                "last_name": "Doe",
                "company": "",
                "address_1": "969 Market",
                "address_2": "",
                "city": "San Francisco",
                "state": "CA",
                "postcode": "94103",
                "country": "US"
            },
            "payment_method": "bacs",
            "payment_method_title": "Direct Bank Transfer",
            "transaction_id": "",
            "date_paid": "2017-03-22T16:28:08",
            "date_paid_gmt": "2017-03-22T19:28:08",
            "date_completed": null,
            "date_completed_gmt": null,
            "cart_hash": "",
            "meta_data": [
                {"id": 1, "key": "gift", "value": "yes"},
                {"id": 2, "key": "_label", "value": {
                    "file": "l.pdf", "url": "https://x/l.pdf", "type": "pdf",
                    "error": false, "shipment_id": "S1"
                }},
                {"id": 3, "key": "gift", "value": "no"}
            ],
            "line_items": [
                {
                    "id": 315,
                    "name": "Woo Single #1",
                    "product_id": 93,
                    "variation_id": 0,
                    "quantity": 2,
                    "tax_class": "",
                    "subtotal": "6.00",
                    "subtotal_tax": "0.45",
                    "total": "6.00",
                    "total_tax": "0.45",
                    "taxes": [{"id": 75, "total": "0.45", "subtotal": "0.45"}],
                    "meta_data": [],
                    "sku": "",
                    "price": 3
                }
            ],
            "tax_lines": [
                {
                    "id": 318,
                    "rate_code": "US-CA-STATE TAX",
                    "rate_id": 75,
                    "label": "State Tax",
                    "compound": false,
                    "tax_total": "1.35",
                    "shipping_tax_total": "0.00",
                    "meta_data": []
                }
            ],
            "shipping_lines": [
                {
                    "id": 317,
                    "method_title": "Flat Rate",
                    "method_id": "flat_rate",
                    "total": "10.00",
                    "total_tax": "0.00",
                    "taxes": [],
                    "meta_data": []
                }
            ],
            "fee_lines": [],
            "coupon_lines": [],
            "refunds": []
        })
    }

    #[test]
    fn test_order_deserialization() {
        let order: Order = serde_json::from_value(order_json()).unwrap();

        assert_eq!(order.id, 727);
        assert_eq!(order.number, "727");
        assert_eq!(order.status, "processing");
        assert_eq!(order.total, "29.35");
        assert_eq!(order.billing.address1, "969 Market");
        assert_eq!(order.shipping.city, "San Francisco");
        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].quantity, 2);
        assert!((order.line_items[0].price - 3.0).abs() < f64::EPSILON);
        assert_eq!(order.line_items[0].taxes[0].id, 75);
        assert_eq!(order.tax_lines[0].rate_id, "75");
        assert_eq!(order.shipping_lines[0].method_id, "flat_rate");
        assert!(order.date_completed.is_none());
        assert!(order.set_paid.is_none());
        assert!(order.meta_data[1].shipping_label.is_some());
    }

    #[test]
    fn test_minimal_order_deserializes() {
        let order: Order =
            serde_json::from_value(json!({"id": 1, "number": "1", "status": "pending"})).unwrap();
        assert!(order.line_items.is_empty());
        assert_eq!(order.billing, Billing::default());
        assert_eq!(order.parent_id, 0);
        assert_eq!(order.total, "");
        assert_eq!(order.order_key, "");
        assert!(order.date_paid.is_none());
    }

    #[test]
    fn test_order_missing_required_field_fails() {
        let result: Result<Order, _> = serde_json::from_value(json!({"number": "1", "status": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_meta_dict_last_duplicate_wins() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        let dict = order.meta_dict();

        assert_eq!(dict.get("gift").map(String::as_str), Some("no"));
        assert_eq!(dict.get("_label").map(String::as_str), Some(""));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_dates_parse_as_store_time() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        let created = order.created_at().unwrap();
        assert_eq!(created.to_string(), "2017-03-22 16:28:02");
        assert!(order.paid_at().is_some());
    }

    #[test]
    fn test_set_paid_is_written_only_when_set() {
        let mut order: Order = serde_json::from_value(order_json()).unwrap();
        let written = serde_json::to_value(&order).unwrap();
        assert!(written.get("set_paid").is_none());

        order.set_paid = Some(true);
        let written = serde_json::to_value(&order).unwrap();
        assert_eq!(written["set_paid"], true);
    }

    #[test]
    fn test_status_list_is_comma_separated() {
        let request = list().status(&[OrderStatus::Processing, OrderStatus::OnHold]);
        assert_eq!(
            request.descriptor().query_param("status"),
            Some("processing,on-hold")
        );
    }

    #[test]
    fn test_list_builders_set_expected_params() {
        let after = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let request = list()
            .context(Context::View)
            .search("john")
            .after(&after)
            .exclude(&[1, 2])
            .include(&[3])
            .offset(5)
            .order(SortDirection::Asc)
            .order_by(SortAttribute::Id)
            .parent(&[9])
            .parent_exclude(&[10, 11])
            .customer(42)
            .product(93)
            .dp(2)
            .per_page(500)
            .page(3);

        let d = request.descriptor();
        assert_eq!(d.query_param("context"), Some("view"));
        assert_eq!(d.query_param("search"), Some("john"));
        assert_eq!(d.query_param("after"), Some("2024-01-01T00:00:00"));
        assert_eq!(d.query_param("exclude"), Some("1,2"));
        assert_eq!(d.query_param("include"), Some("3"));
        assert_eq!(d.query_param("offset"), Some("5"));
        assert_eq!(d.query_param("order"), Some("asc"));
        assert_eq!(d.query_param("orderby"), Some("id"));
        assert_eq!(d.query_param("parent"), Some("9"));
        assert_eq!(d.query_param("parent_exclude"), Some("10,11"));
        assert_eq!(d.query_param("customer"), Some("42"));
        assert_eq!(d.query_param("product"), Some("93"));
        assert_eq!(d.query_param("dp"), Some("2"));
        assert_eq!(d.query_param("per_page"), Some("100"));
        assert_eq!(d.query_param("page"), Some("3"));
    }

    #[test]
    fn test_order_request_dp() {
        let request = OrderRequest::from_descriptor(HttpRequest::new(
            HttpMethod::Get,
            format!("{ENDPOINT}/727"),
        ))
        .dp(4);
        assert_eq!(request.descriptor().query_param("dp"), Some("4"));
    }
}
