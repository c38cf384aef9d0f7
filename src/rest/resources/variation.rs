//! Product variation resource.
//!
//! Variations carry their price as a decimal string. It is parsed into an
//! `f64` here; anything unparseable becomes `0.0`.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::clients::HttpRequest;
use crate::rest::{PageFailurePolicy, PagedRequest, TypedRequest};

use super::common::attributes::fold_option;

/// A variation of a variable product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVariation {
    /// Unique identifier.
    pub id: u64,
    /// Current price, `0.0` when missing or unparseable.
    pub price: f64,
    /// Attribute name → chosen option, both lower-cased.
    pub attributes: HashMap<String, String>,
    /// Stock keeping unit.
    pub sku: String,
}

impl<'de> Deserialize<'de> for ProductVariation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Attribute {
            name: String,
            #[serde(default)]
            option: String,
        }

        #[derive(Deserialize)]
        struct Raw {
            id: u64,
            #[serde(default)]
            price: serde_json::Value,
            sku: String,
            #[serde(default)]
            attributes: Vec<Attribute>,
        }

        let raw = Raw::deserialize(deserializer)?;

        Ok(Self {
            id: raw.id,
            price: parse_price(&raw.price),
            attributes: fold_option(
                raw.attributes
                    .into_iter()
                    .map(|attribute| (attribute.name, attribute.option)),
            ),
            sku: raw.sku,
        })
    }
}

fn parse_price(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// `GET products/{id}/variations`: lists the variations of one product.
///
/// A failed page does not surface as an error. The drain yields an empty
/// exhausted page instead and stops.
#[derive(Clone, Debug)]
pub struct ListVariationsRequest {
    descriptor: HttpRequest,
}

impl TypedRequest for ListVariationsRequest {
    type Response = Vec<ProductVariation>;
    const NAME: &'static str = "ProductVariation";

    fn descriptor(&self) -> &HttpRequest {
        &self.descriptor
    }

    fn from_descriptor(descriptor: HttpRequest) -> Self {
        Self { descriptor }
    }
}

impl PagedRequest<ProductVariation> for ListVariationsRequest {
    const ON_PAGE_FAILURE: PageFailurePolicy = PageFailurePolicy::TreatAsEmpty;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> ProductVariation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_variation_decodes_price_and_attributes() {
        let variation = decode(json!({
            "id": 733,
            "sku": "HOODIE-BLUE-L",
            "price": "19.99",
            "regular_price": "19.99",
            "attributes": [
                {"id": 6, "name": "Color", "option": "Blue &amp; Green"},
                {"id": 0, "name": "Size", "option": "L"}
            ]
        }));

        assert_eq!(variation.id, 733);
        assert!((variation.price - 19.99).abs() < f64::EPSILON);
        assert_eq!(variation.sku, "HOODIE-BLUE-L");
        assert_eq!(variation.attributes["color"], "blue & green");
        assert_eq!(variation.attributes["size"], "l");
    }

    #[test]
    fn test_unparseable_price_is_zero() {
        for price in [json!(""), json!("n/a"), json!(null)] {
            let variation = decode(json!({"id": 1, "sku": "", "price": price}));
            assert!(variation.price.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_missing_price_is_zero() {
        let variation = decode(json!({"id": 1, "sku": ""}));
        assert!(variation.price.abs() < f64::EPSILON);
        assert!(variation.attributes.is_empty());
    }

    #[test]
    fn test_numeric_price_is_accepted() {
        let variation = decode(json!({"id": 1, "sku": "", "price": 7.5}));
        assert!((variation.price - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_sku_fails() {
        let result: Result<ProductVariation, _> =
            serde_json::from_value(json!({"id": 1, "price": "1"}));
        assert!(result.is_err());
    }
}
