//! Query string encoding.
//!
//! WooCommerce runs on PHP, which decodes query strings as
//! `application/x-www-form-urlencoded`: a literal `+` is read back as a
//! space. Values such as `after=2024-01-01T00:00:00+01:00` or a search for
//! `c++` would be corrupted unless `+` goes out as `%2B`. Every byte outside
//! the RFC 3986 unreserved set is percent-encoded, so spaces become `%20`
//! and `+` becomes `%2B`.

use std::collections::HashMap;

/// Encodes query parameters into a query string without the leading `?`.
///
/// Keys are emitted in sorted order so the same parameters always produce
/// the same URL.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use woocommerce_api::clients::encode_query;
///
/// let mut params = HashMap::new();
/// params.insert("search".to_string(), "c++ & rust".to_string());
/// params.insert("page".to_string(), "2".to_string());
///
/// assert_eq!(encode_query(&params), "page=2&search=c%2B%2B%20%26%20rust");
/// ```
#[must_use]
pub fn encode_query(params: &HashMap<String, String>) -> String {
    let mut pairs: Vec<(&String, &String)> = params.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends encoded query parameters to an endpoint URL.
///
/// Returns the endpoint unchanged when there are no parameters. If the
/// endpoint already carries a query string the parameters are appended
/// with `&`.
#[must_use]
pub fn append_query(endpoint: &str, params: &HashMap<String, String>) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }

    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}{}", encode_query(params))
}

fn encode_component(component: &str) -> String {
    // urlencoding leaves only unreserved characters as-is, so `+` is always %2B
    urlencoding::encode(component).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn parse(query: &str) -> HashMap<String, String> {
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (
                    urlencoding::decode(key).unwrap().into_owned(),
                    urlencoding::decode(value).unwrap().into_owned(),
                )
            })
            .collect()
    }

    #[test]
    fn test_plus_is_escaped_not_left_as_space() {
        let query = encode_query(&params(&[("after", "2024-01-01T00:00:00+01:00")]));
        assert_eq!(query, "after=2024-01-01T00%3A00%3A00%2B01%3A00");
        assert!(!query.contains('+'));
    }

    #[test]
    fn test_space_is_percent_twenty() {
        let query = encode_query(&params(&[("search", "blue shirt")]));
        assert_eq!(query, "search=blue%20shirt");
    }

    #[test]
    fn test_encoding_recovers_original_pairs() {
        let original = params(&[
            ("search", "c++ & rust = fun"),
            ("include", "1,2,3"),
            ("after", "2024-05-01T10:20:30"),
            ("status", "on-hold"),
            ("unicode", "café"),
        ]);

        let query = encode_query(&original);
        assert_eq!(parse(&query), original);
    }

    #[test]
    fn test_keys_are_sorted() {
        let query = encode_query(&params(&[("per_page", "10"), ("page", "1"), ("dp", "2")]));
        assert_eq!(query, "dp=2&page=1&per_page=10");
    }

    #[test]
    fn test_append_query_to_endpoint() {
        let url = append_query(
            "https://shop.example.com/wp-json/wc/v3/orders",
            &params(&[("page", "2")]),
        );
        assert_eq!(url, "https://shop.example.com/wp-json/wc/v3/orders?page=2");
    }

    #[test]
    fn test_append_query_keeps_existing_query() {
        let url = append_query("https://example.com/orders?a=1", &params(&[("b", "2")]));
        assert_eq!(url, "https://example.com/orders?a=1&b=2");
    }

    #[test]
    fn test_append_empty_query_leaves_endpoint() {
        let url = append_query("https://example.com/orders", &HashMap::new());
        assert_eq!(url, "https://example.com/orders");
    }
}
