//! Configuration types for the WooCommerce API SDK.
//!
//! This module provides the configuration types used to construct a
//! [`RestClient`](crate::RestClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WooConfig`]: Credentials and root endpoint for one WooCommerce store
//! - [`WooConfigBuilder`]: A builder for constructing [`WooConfig`] instances
//! - [`ConsumerKey`]: A validated consumer key newtype
//! - [`ConsumerSecret`]: A validated consumer secret newtype with masked debug output
//! - [`RootEndpoint`]: A validated REST API root URL
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{WooConfig, ConsumerKey, ConsumerSecret, RootEndpoint};
//!
//! let config = WooConfig::builder()
//!     .consumer_key(ConsumerKey::new("ck_1234").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_5678").unwrap())
//!     .root_endpoint(RootEndpoint::new("https://shop.example.com/wp-json/wc/v3").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ConsumerKey, ConsumerSecret, RootEndpoint};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ConfigError;

/// Configuration for one WooCommerce store.
///
/// Holds the consumer key pair and the root endpoint. Values are validated
/// on construction and never change afterwards.
///
/// # Thread Safety
///
/// `WooConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct WooConfig {
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    root_endpoint: RootEndpoint,
    user_agent_prefix: Option<String>,
}

impl WooConfig {
    /// Creates a new builder for constructing a `WooConfig`.
    #[must_use]
    pub fn builder() -> WooConfigBuilder {
        WooConfigBuilder::new()
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the root endpoint.
    #[must_use]
    pub const fn root_endpoint(&self) -> &RootEndpoint {
        &self.root_endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the value of the `Authorization` header for this store.
    ///
    /// WooCommerce accepts HTTP Basic authentication over HTTPS with the
    /// consumer key as user name and the consumer secret as password.
    ///
    /// # Example
    ///
    /// ```rust
    /// use woocommerce_api::{WooConfig, ConsumerKey, ConsumerSecret, RootEndpoint};
    ///
    /// let config = WooConfig::builder()
    ///     .consumer_key(ConsumerKey::new("user").unwrap())
    ///     .consumer_secret(ConsumerSecret::new("pass").unwrap())
    ///     .root_endpoint(RootEndpoint::new("https://example.com/wp-json/wc/v3").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.authorization_header(), "Basic dXNlcjpwYXNz");
    /// ```
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let credentials = format!(
            "{}:{}",
            self.consumer_key.as_ref(),
            self.consumer_secret.as_ref()
        );
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

// Verify WooConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooConfig>();
};

/// Builder for constructing [`WooConfig`] instances.
///
/// `consumer_key`, `consumer_secret` and `root_endpoint` are required.
#[derive(Debug, Default)]
pub struct WooConfigBuilder {
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    root_endpoint: Option<RootEndpoint>,
    user_agent_prefix: Option<String>,
}

impl WooConfigBuilder {
    /// Creates a new builder with no values set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the REST API root endpoint (required).
    #[must_use]
    pub fn root_endpoint(mut self, root: RootEndpoint) -> Self {
        self.root_endpoint = Some(root);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WooConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `consumer_key`,
    /// `consumer_secret` or `root_endpoint` are not set.
    pub fn build(self) -> Result<WooConfig, ConfigError> {
        let consumer_key = self.consumer_key.ok_or(ConfigError::MissingRequiredField {
            field: "consumer_key",
        })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;
        let root_endpoint = self
            .root_endpoint
            .ok_or(ConfigError::MissingRequiredField {
                field: "root_endpoint",
            })?;

        Ok(WooConfig {
            consumer_key,
            consumer_secret,
            root_endpoint,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> RootEndpoint {
        RootEndpoint::new("https://shop.example.com/wp-json/wc/v3").unwrap()
    }

    #[test]
    fn test_builder_requires_consumer_key() {
        let result = WooConfigBuilder::new()
            .consumer_secret(ConsumerSecret::new("cs").unwrap())
            .root_endpoint(root())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "consumer_key"
            })
        ));
    }

    #[test]
    fn test_builder_requires_consumer_secret() {
        let result = WooConfigBuilder::new()
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .root_endpoint(root())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "consumer_secret"
            })
        ));
    }

    #[test]
    fn test_builder_requires_root_endpoint() {
        let result = WooConfigBuilder::new()
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .consumer_secret(ConsumerSecret::new("cs").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "root_endpoint"
            })
        ));
    }

    #[test]
    fn test_authorization_header_is_basic_base64() {
        let config = WooConfig::builder()
            .consumer_key(ConsumerKey::new("ck_public").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_private").unwrap())
            .root_endpoint(root())
            .build()
            .unwrap();

        let header = config.authorization_header();
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"ck_public:cs_private");
    }

    #[test]
    fn test_debug_output_masks_secret() {
        let config = WooConfig::builder()
            .consumer_key(ConsumerKey::new("ck_public").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_private").unwrap())
            .root_endpoint(root())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("WooConfig"));
        assert!(!debug_str.contains("cs_private"));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WooConfig>();
    }
}
