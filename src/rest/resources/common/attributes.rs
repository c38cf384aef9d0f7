//! Attribute normalization shared by products and variations.
//!
//! Attribute names and options are lower-cased so lookups do not depend on
//! how the store owner capitalized them. WooCommerce HTML-escapes `&` in
//! option values, which leaves a stray `amp;` behind; that literal substring
//! is removed. When two attributes share a name the later one wins.

use std::collections::HashMap;

/// Normalizes an attribute name.
pub(crate) fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Normalizes an attribute option value.
pub(crate) fn normalize_option(option: &str) -> String {
    option.to_lowercase().replace("amp;", "")
}

/// Folds `(name, options)` pairs into a map, last duplicate wins.
pub(crate) fn fold_options<I>(attributes: I) -> HashMap<String, Vec<String>>
where
    I: IntoIterator<Item = (String, Vec<String>)>,
{
    attributes
        .into_iter()
        .map(|(name, options)| {
            (
                normalize_name(&name),
                options.iter().map(|o| normalize_option(o)).collect(),
            )
        })
        .collect()
}

/// Folds `(name, option)` pairs into a map, last duplicate wins.
pub(crate) fn fold_option<I>(attributes: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    attributes
        .into_iter()
        .map(|(name, option)| (normalize_name(&name), normalize_option(&option)))
        .collect()
}
