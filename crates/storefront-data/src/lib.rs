//! HTTP client utilities for the storefront.
//!
//! Provides a small builder API over a pluggable [`Transport`] and the one
//! outbound call the storefront makes: adding a product to the cart.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use storefront_data::{CartClient, Credential, FetchClient, ReqwestTransport};
//! use storefront_catalog::cart::AddToCartRequest;
//!
//! let transport = ReqwestTransport::new(Duration::from_secs(10))?;
//! let client = FetchClient::new(transport).with_base_url("https://shop.example.com/api");
//! let cart = CartClient::new(client, Credential::from_env("STOREFRONT_CART_TOKEN"));
//!
//! let outcome = cart.submit(AddToCartRequest::new("smart-watch".into(), 1)).await;
//! println!("{}", outcome.message());
//! ```

mod cart;
mod error;
mod request;
mod response;
mod transport;

pub use cart::{AddToCartOutcome, CartAck, CartClient, Credential, CART_ITEMS_PATH, DEFAULT_TOKEN_ENV};
pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;
pub use transport::{ReqwestTransport, Transport};

use std::sync::Arc;

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client sending through `transport`.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Create a POST request. Relative paths are joined onto the base URL.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        ClientRequestBuilder {
            builder: RequestBuilder::new(full_url),
            transport: Arc::clone(&self.transport),
        }
    }
}

/// A request builder bound to a client's transport.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(
            method = "POST",
            url = %self.builder.url,
            "sending request"
        );
        self.transport.send(self.builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AddToCartOutcome, CartClient, Credential, FetchClient, FetchError, Response,
        Transport,
    };
}
