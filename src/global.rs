//! Process-wide shared client.
//!
//! Most code should create a [`RestClient`] and pass it around. [`WooApi`]
//! exists for applications that want one store configured once at startup
//! and reachable from anywhere.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{RestClient, WooApi};
//! use woocommerce_api::rest::TypedRequest;
//!
//! // At startup
//! WooApi::configure(RestClient::new(config)?);
//!
//! // Anywhere else
//! let client = WooApi::shared();
//! let orders = client.list_orders().execute(client).await?;
//! ```

use std::sync::OnceLock;

use crate::clients::RestClient;
use crate::error::ConfigError;

static SHARED: OnceLock<RestClient> = OnceLock::new();

/// Access point for the process-wide [`RestClient`].
#[derive(Debug)]
pub struct WooApi;

impl WooApi {
    /// Installs the process-wide client.
    ///
    /// The first configuration wins. Later calls leave the installed client
    /// in place, log a warning and return `false`.
    pub fn configure(client: RestClient) -> bool {
        let root = client.config().root_endpoint().to_string();
        match SHARED.set(client) {
            Ok(()) => {
                tracing::debug!(%root, "configured shared WooCommerce client");
                true
            }
            Err(rejected) => {
                tracing::warn!(
                    ignored_root = %rejected.config().root_endpoint(),
                    "WooCommerce API is already configured, keeping the existing client"
                );
                false
            }
        }
    }

    /// Returns `true` once [`configure`](Self::configure) has succeeded.
    #[must_use]
    pub fn is_configured() -> bool {
        SHARED.get().is_some()
    }

    /// Returns the process-wide client.
    ///
    /// # Panics
    ///
    /// Panics with [`ConfigError::NotConfigured`] if called before
    /// [`configure`](Self::configure).
    #[must_use]
    pub fn shared() -> &'static RestClient {
        match Self::try_shared() {
            Ok(client) => client,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the process-wide client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if called before
    /// [`configure`](Self::configure).
    pub fn try_shared() -> Result<&'static RestClient, ConfigError> {
        SHARED.get().ok_or(ConfigError::NotConfigured)
    }
}
