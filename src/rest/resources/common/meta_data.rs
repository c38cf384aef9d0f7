//! Metadata entries attached to orders and order lines.
//!
//! WooCommerce stores arbitrary plugin data in `meta_data`. Most values are
//! plain strings, but shipping-label plugins store a structured object in
//! the same `value` slot. Decoding never fails on the value: the structured
//! shape and the string shape are tried independently.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Structured shipping-label value stored by label plugins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingLabel {
    /// The label file name.
    pub file: String,
    /// Where the label can be downloaded.
    pub url: String,
    /// The label type as reported by the plugin.
    #[serde(rename = "type")]
    pub label_type: String,
    /// Whether label generation failed.
    pub error: bool,
    /// The carrier's shipment id.
    pub shipment_id: String,
}

/// The interpreted shape of a [`MetaData`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaValue<'a> {
    /// A plain string value.
    Plain(&'a str),
    /// A shipping-label object.
    Structured(&'a ShippingLabel),
    /// Neither shape matched (numbers, arrays, other objects, null).
    Empty,
}

/// One `meta_data` entry.
///
/// `id` and `key` are required. `value` holds the string form of the value,
/// or an empty string when the value is not a string; `shipping_label`
/// holds the structured form when the value is a shipping-label object.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::{MetaData, MetaValue};
///
/// let meta: MetaData = serde_json::from_str(
///     r#"{"id": 5, "key": "gift_note", "value": "Happy birthday"}"#,
/// ).unwrap();
///
/// assert_eq!(meta.value, "Happy birthday");
/// assert!(meta.shipping_label.is_none());
/// assert_eq!(meta.meta_value(), MetaValue::Plain("Happy birthday"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaData {
    /// The metadata id.
    pub id: i64,
    /// The metadata key.
    pub key: String,
    /// The string value, or `""` when the value is not a string.
    pub value: String,
    /// The value decoded as a shipping label, when it has that shape.
    pub shipping_label: Option<ShippingLabel>,
}

impl MetaData {
    /// Returns the value as a [`MetaValue`].
    ///
    /// A shipping label takes precedence over the string form.
    #[must_use]
    pub fn meta_value(&self) -> MetaValue<'_> {
        if let Some(label) = &self.shipping_label {
            MetaValue::Structured(label)
        } else if self.value.is_empty() {
            MetaValue::Empty
        } else {
            MetaValue::Plain(&self.value)
        }
    }
}

impl<'de> Deserialize<'de> for MetaData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            id: i64,
            key: String,
            #[serde(default)]
            value: serde_json::Value,
        }

        let raw = Raw::deserialize(deserializer)?;
        let shipping_label = ShippingLabel::deserialize(&raw.value).ok();
        let value = raw.value.as_str().unwrap_or_default().to_string();

        Ok(Self {
            id: raw.id,
            key: raw.key,
            value,
            shipping_label,
        })
    }
}

impl Serialize for MetaData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(untagged)]
        enum Value<'a> {
            Structured(&'a ShippingLabel),
            Plain(&'a str),
        }

        #[derive(Serialize)]
        struct Raw<'a> {
            id: i64,
            key: &'a str,
            value: Value<'a>,
        }

        let value = self
            .shipping_label
            .as_ref()
            .map_or(Value::Plain(&self.value), Value::Structured);

        Raw {
            id: self.id,
            key: &self.key,
            value,
        }
        .serialize(serializer)
    }
}
