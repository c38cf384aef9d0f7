//! Query parameter values and shared collection filters.
//!
//! The enums here map one-to-one onto the values WooCommerce accepts for
//! list endpoints. [`CollectionFilters`] adds the filters shared by the
//! order and product listings to any [`TypedRequest`].

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::rest::TypedRequest;

/// Largest page size WooCommerce serves.
pub const MAX_PER_PAGE: u32 = 100;

/// Page used when none is set.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none is set.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Format for `after` / `before` (ISO 8601 without offset).
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

macro_rules! query_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Returns the value as sent in the query string.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

query_enum! {
    /// Scope under which the request is made; determines fields present in the response.
    Context {
        /// Read-only view.
        View => "view",
        /// Includes fields only visible when editing.
        Edit => "edit",
    }
}

query_enum! {
    /// Sort direction.
    SortDirection {
        /// Ascending.
        Asc => "asc",
        /// Descending.
        Desc => "desc",
    }
}

query_enum! {
    /// Attribute to sort collections by.
    SortAttribute {
        /// Creation date.
        Date => "date",
        /// Record id.
        Id => "id",
        /// Order of the `include` list.
        Include => "include",
        /// Title.
        Title => "title",
        /// Slug.
        Slug => "slug",
    }
}

query_enum! {
    /// Order status filter.
    OrderStatus {
        /// Any status.
        Any => "any",
        /// Pending payment.
        Pending => "pending",
        /// Processing.
        Processing => "processing",
        /// On hold.
        OnHold => "on-hold",
        /// Completed.
        Completed => "completed",
        /// Cancelled.
        Cancelled => "cancelled",
        /// Refunded.
        Refunded => "refunded",
        /// Failed.
        Failed => "failed",
        /// In the trash.
        Trash => "trash",
    }
}

query_enum! {
    /// Product status filter.
    ProductStatus {
        /// Any status.
        Any => "any",
        /// Draft.
        Draft => "draft",
        /// Pending review.
        Pending => "pending",
        /// Private.
        Private => "private",
        /// Published.
        Publish => "publish",
    }
}

query_enum! {
    /// Product type filter.
    ProductType {
        /// Simple product.
        Simple => "simple",
        /// Grouped product.
        Grouped => "grouped",
        /// External / affiliate product.
        External => "external",
        /// Variable product.
        Variable => "variable",
    }
}

query_enum! {
    /// Tax class filter.
    TaxClass {
        /// Standard rate.
        Standard => "standard",
        /// Reduced rate.
        ReducedRate => "reduced-rate",
        /// Zero rate.
        ZeroRate => "zero-rate",
    }
}

query_enum! {
    /// Stock status filter.
    StockStatus {
        /// In stock.
        InStock => "instock",
        /// Out of stock.
        OutOfStock => "outofstock",
        /// Available on backorder.
        OnBackorder => "onbackorder",
    }
}

/// Joins ids as a comma-separated list.
pub(crate) fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a timestamp in its own wall-clock time.
pub(crate) fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format(DATE_FORMAT).to_string()
}

/// Filters shared by the order and product list endpoints.
///
/// Every method returns a new request; the receiver is left unchanged.
pub trait CollectionFilters: TypedRequest {
    /// Scope under which the request is made.
    #[must_use]
    fn context(&self, context: Context) -> Self {
        self.with_query_param("context", context.as_str())
    }

    /// Limit results to those matching a string.
    #[must_use]
    fn search(&self, term: impl Into<String>) -> Self {
        self.with_query_param("search", term)
    }

    /// Limit results to those published after the given date.
    #[must_use]
    fn after<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        self.with_query_param("after", format_date(date))
    }

    /// Limit results to those published before the given date.
    #[must_use]
    fn before<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        self.with_query_param("before", format_date(date))
    }

    /// Ensure results exclude the given ids.
    #[must_use]
    fn exclude(&self, ids: &[u64]) -> Self {
        self.with_query_param("exclude", join_ids(ids))
    }

    /// Limit results to the given ids.
    #[must_use]
    fn include(&self, ids: &[u64]) -> Self {
        self.with_query_param("include", join_ids(ids))
    }

    /// Offset the result set by a number of items.
    #[must_use]
    fn offset(&self, offset: u32) -> Self {
        self.with_query_param("offset", offset.to_string())
    }

    /// Sort direction.
    #[must_use]
    fn order(&self, direction: SortDirection) -> Self {
        self.with_query_param("order", direction.as_str())
    }

    /// Sort attribute.
    #[must_use]
    fn order_by(&self, attribute: SortAttribute) -> Self {
        self.with_query_param("orderby", attribute.as_str())
    }

    /// Limit results to those with the given parent ids.
    #[must_use]
    fn parent(&self, ids: &[u64]) -> Self {
        self.with_query_param("parent", join_ids(ids))
    }

    /// Limit results to all items except those of the given parent ids.
    #[must_use]
    fn parent_exclude(&self, ids: &[u64]) -> Self {
        self.with_query_param("parent_exclude", join_ids(ids))
    }
}
