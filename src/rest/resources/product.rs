//! Product resource.
//!
//! Products are decoded defensively: the product name is lower-cased and
//! the `attributes` array is folded into a name → options map (see
//! [`Product::attribute_options`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use woocommerce_api::rest::{PagedRequest, params::StockStatus};
//!
//! let products = client
//!     .list_products()
//!     .stock_status(StockStatus::InStock)
//!     .per_page(100)
//!     .fetch_all(&client)
//!     .await?;
//!
//! for product in &products {
//!     if let Some(colors) = product.attribute_options.get("color") {
//!         println!("{}: {}", product.name, colors.join(", "));
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::HttpRequest;
use crate::rest::params::{ProductStatus, ProductType, StockStatus, TaxClass};
use crate::rest::{CollectionFilters, PageFailurePolicy, PagedRequest, TypedRequest};

use super::common::attributes::fold_options;

/// A product category reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCategory {
    /// Category id.
    pub id: u64,
    /// Category name.
    pub name: String,
    /// Category slug.
    pub slug: String,
}

/// A WooCommerce product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier.
    pub id: u64,
    /// Product name, lower-cased.
    pub name: String,
    /// Attribute name → option values, both lower-cased.
    pub attribute_options: HashMap<String, Vec<String>>,
    /// Ids of the product's variations.
    pub variations: Vec<u64>,
    /// Categories the product belongs to.
    pub categories: Vec<ProductCategory>,
    /// Product slug.
    pub slug: Option<String>,
    /// Product URL.
    pub permalink: Option<String>,
    /// Product type (e.g., "simple", "variable").
    pub product_type: Option<String>,
    /// Product status (e.g., "publish").
    pub status: Option<String>,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Current price.
    pub price: Option<String>,
    /// Regular price.
    pub regular_price: Option<String>,
    /// Sale price.
    pub sale_price: Option<String>,
    /// Stock status (e.g., "instock").
    pub stock_status: Option<String>,
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Attribute {
            name: String,
            #[serde(default)]
            options: Vec<String>,
        }

        #[derive(Deserialize)]
        struct Raw {
            id: u64,
            name: String,
            #[serde(default)]
            attributes: Vec<Attribute>,
            #[serde(default)]
            variations: Vec<u64>,
            #[serde(default)]
            categories: Vec<ProductCategory>,
            slug: Option<String>,
            permalink: Option<String>,
            #[serde(rename = "type")]
            product_type: Option<String>,
            status: Option<String>,
            sku: Option<String>,
            price: Option<String>,
            regular_price: Option<String>,
            sale_price: Option<String>,
            stock_status: Option<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let attribute_options = fold_options(
            raw.attributes
                .into_iter()
                .map(|attribute| (attribute.name, attribute.options)),
        );

        Ok(Self {
            id: raw.id,
            name: raw.name.to_lowercase(),
            attribute_options,
            variations: raw.variations,
            categories: raw.categories,
            slug: raw.slug,
            permalink: raw.permalink,
            product_type: raw.product_type,
            status: raw.status,
            sku: raw.sku,
            price: raw.price,
            regular_price: raw.regular_price,
            sale_price: raw.sale_price,
            stock_status: raw.stock_status,
        })
    }
}

/// `GET products`: lists products.
///
/// A failed page ends a drain with the error.
#[derive(Clone, Debug)]
pub struct ListProductsRequest {
    descriptor: HttpRequest,
}

impl ListProductsRequest {
    /// Limit results to products with a slug.
    #[must_use]
    pub fn slug(&self, slug: impl Into<String>) -> Self {
        self.with_query_param("slug", slug)
    }

    /// Limit results to products with a status.
    #[must_use]
    pub fn status(&self, status: ProductStatus) -> Self {
        self.with_query_param("status", status.as_str())
    }

    /// Limit results to products of a type.
    #[must_use]
    pub fn product_type(&self, product_type: ProductType) -> Self {
        self.with_query_param("type", product_type.as_str())
    }

    /// Limit results to products with a SKU.
    #[must_use]
    pub fn sku(&self, sku: impl Into<String>) -> Self {
        self.with_query_param("sku", sku)
    }

    /// Limit results to featured (or non-featured) products.
    #[must_use]
    pub fn featured(&self, featured: bool) -> Self {
        self.with_query_param("featured", featured.to_string())
    }

    /// Limit results to a category id.
    #[must_use]
    pub fn category(&self, category: impl Into<String>) -> Self {
        self.with_query_param("category", category)
    }

    /// Limit results to a tag id.
    #[must_use]
    pub fn tag(&self, tag: impl Into<String>) -> Self {
        self.with_query_param("tag", tag)
    }

    /// Limit results to a shipping class id.
    #[must_use]
    pub fn shipping_class(&self, shipping_class: impl Into<String>) -> Self {
        self.with_query_param("shipping_class", shipping_class)
    }

    /// Limit results to an attribute slug.
    #[must_use]
    pub fn attribute(&self, attribute: impl Into<String>) -> Self {
        self.with_query_param("attribute", attribute)
    }

    /// Limit results to an attribute term id. Requires [`attribute`](Self::attribute).
    #[must_use]
    pub fn attribute_term(&self, term: impl Into<String>) -> Self {
        self.with_query_param("attribute_term", term)
    }

    /// Limit results to a tax class.
    #[must_use]
    pub fn tax_class(&self, tax_class: TaxClass) -> Self {
        self.with_query_param("tax_class", tax_class.as_str())
    }

    /// Limit results to products on (or not on) sale.
    #[must_use]
    pub fn on_sale(&self, on_sale: bool) -> Self {
        self.with_query_param("on_sale", on_sale.to_string())
    }

    /// Limit results to products priced at or above a value.
    #[must_use]
    pub fn min_price(&self, price: f64) -> Self {
        self.with_query_param("min_price", price.to_string())
    }

    /// Limit results to products priced at or below a value.
    #[must_use]
    pub fn max_price(&self, price: f64) -> Self {
        self.with_query_param("max_price", price.to_string())
    }

    /// Limit results to products with a stock status.
    #[must_use]
    pub fn stock_status(&self, status: StockStatus) -> Self {
        self.with_query_param("stock_status", status.as_str())
    }
}

impl TypedRequest for ListProductsRequest {
    type Response = Vec<Product>;
    const NAME: &'static str = "Product";

    fn descriptor(&self) -> &HttpRequest {
        &self.descriptor
    }

    fn from_descriptor(descriptor: HttpRequest) -> Self {
        Self { descriptor }
    }
}

impl PagedRequest<Product> for ListProductsRequest {
    const ON_PAGE_FAILURE: PageFailurePolicy = PageFailurePolicy::Propagate;
}

impl CollectionFilters for ListProductsRequest {}
