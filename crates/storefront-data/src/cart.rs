//! The add-to-cart call.
//!
//! The cart lives in an external service. From the storefront's side the
//! call is fire-and-forget: [`CartClient::submit`] never returns an error,
//! it logs the failure and hands back an [`AddToCartOutcome`] for the UI to
//! show.

use serde::{Deserialize, Serialize};
use std::fmt;

use storefront_catalog::cart::AddToCartRequest;

use crate::{FetchClient, FetchError};

/// Environment variable holding the cart service bearer token.
pub const DEFAULT_TOKEN_ENV: &str = "STOREFRONT_CART_TOKEN";

/// Path of the add-item endpoint, relative to the API base URL.
pub const CART_ITEMS_PATH: &str = "/cart/items";

/// A bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: String,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            source: "inline".to_string(),
        }
    }

    /// Read a token from the environment; unset or blank yields `None`.
    pub fn from_env(var: &str) -> Option<Self> {
        let token = std::env::var(var).ok()?;
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(Self {
            token: token.to_string(),
            source: var.to_string(),
        })
    }

    fn expose(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("source", &self.source)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Acknowledgement returned by the cart service. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAck {
    #[serde(default)]
    pub cart_id: Option<String>,
    #[serde(default)]
    pub item_count: Option<u32>,
}

/// Result of an add-to-cart attempt as presented to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCartOutcome {
    Added(CartAck),
    Failed { reason: String },
}

impl AddToCartOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddToCartOutcome::Added(_))
    }

    /// Notification text for the UI.
    pub fn message(&self) -> String {
        match self {
            AddToCartOutcome::Added(ack) => match ack.item_count {
                Some(n) => format!("Added to cart ({} items in cart)", n),
                None => "Added to cart".to_string(),
            },
            AddToCartOutcome::Failed { reason } => {
                format!("Could not add to cart: {}", reason)
            }
        }
    }
}

/// Client for the cart service.
#[derive(Debug, Clone)]
pub struct CartClient {
    client: FetchClient,
    credential: Option<Credential>,
    token_env: String,
}

impl CartClient {
    pub fn new(client: FetchClient, credential: Option<Credential>) -> Self {
        Self {
            client,
            credential,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }

    /// Name the variable reported when the credential is missing.
    pub fn with_token_env(mut self, var: impl Into<String>) -> Self {
        self.token_env = var.into();
        self
    }

    /// POST the item to the cart service.
    ///
    /// Fails without touching the network when no credential is configured.
    pub async fn add_item(&self, request: &AddToCartRequest) -> Result<CartAck, FetchError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or_else(|| FetchError::MissingCredential(self.token_env.clone()))?;

        let response = self
            .client
            .post(CART_ITEMS_PATH)
            .header("Accept", "application/json")
            .bearer_auth(credential.expose())
            .json(request)?
            .send()
            .await?
            .error_for_status()?;

        // A 2xx means the item was added; the acknowledgement body is optional.
        let is_json = response
            .header("content-type")
            .map_or(true, |ct| ct.contains("json"));
        if response.body.is_empty() || !is_json {
            return Ok(CartAck::default());
        }
        Ok(response.json().unwrap_or_else(|e: FetchError| {
            tracing::debug!(error = %e, "cart response is not an acknowledgement");
            CartAck::default()
        }))
    }

    /// Fire-and-forget variant of [`CartClient::add_item`].
    pub async fn submit(&self, request: AddToCartRequest) -> AddToCartOutcome {
        match self.add_item(&request).await {
            Ok(ack) => {
                tracing::info!(
                    product_id = %request.product_id,
                    quantity = request.quantity,
                    "added to cart"
                );
                AddToCartOutcome::Added(ack)
            }
            Err(e) => {
                tracing::warn!(
                    product_id = %request.product_id,
                    quantity = request.quantity,
                    error = %e,
                    "add to cart failed"
                );
                AddToCartOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RequestBuilder, Response, Transport};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct RecordingTransport {
        status: u16,
        body: Vec<u8>,
        seen: Arc<Mutex<Vec<RequestBuilder>>>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.as_bytes().to_vec(),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            self.seen.lock().unwrap().push(request);
            Ok(Response::new(self.status, HashMap::new(), self.body.clone()))
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn send(&self, _request: RequestBuilder) -> Result<Response, FetchError> {
            Err(FetchError::Timeout)
        }
    }

    fn client(transport: impl Transport + 'static, credential: Option<Credential>) -> CartClient {
        let fetch = FetchClient::new(transport).with_base_url("https://shop.test/api/");
        CartClient::new(fetch, credential)
    }

    fn request() -> AddToCartRequest {
        AddToCartRequest::new("smart-watch".into(), 2)
    }

    #[tokio::test]
    async fn test_add_item_sends_authenticated_json() {
        let transport = RecordingTransport::replying(200, r#"{"cartId":"c1","itemCount":3}"#);
        let seen = Arc::clone(&transport.seen);
        let cart = client(transport, Some(Credential::new("secret")));

        let ack = cart.add_item(&request()).await.unwrap();
        assert_eq!(ack.cart_id.as_deref(), Some("c1"));
        assert_eq!(ack.item_count, Some(3));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let sent = &seen[0];
        assert_eq!(sent.url, "https://shop.test/api/cart/items");
        assert_eq!(sent.header_value("authorization"), Some("Bearer secret"));
        let body: serde_json::Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"productId": "smart-watch", "quantity": 2}));
    }

    #[tokio::test]
    async fn test_empty_body_is_plain_ack() {
        let cart = client(RecordingTransport::replying(204, ""), Some(Credential::new("t")));
        assert_eq!(cart.add_item(&request()).await.unwrap(), CartAck::default());
    }

    #[tokio::test]
    async fn test_non_json_success_body_still_counts_as_added() {
        for body in ["OK", "<html><body>added</body></html>"] {
            let cart = client(RecordingTransport::replying(200, body), Some(Credential::new("t")));
            let outcome = cart.submit(request()).await;
            assert_eq!(outcome, AddToCartOutcome::Added(CartAck::default()), "body {body:?}");
        }
    }

    #[tokio::test]
    async fn test_missing_credential_skips_network() {
        let transport = RecordingTransport::replying(200, "{}");
        let seen = Arc::clone(&transport.seen);
        let cart = client(transport, None).with_token_env("MY_TOKEN");

        let outcome = cart.submit(request()).await;
        assert!(!outcome.is_added());
        assert!(outcome.message().contains("MY_TOKEN"));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_http_error_becomes_failed_outcome() {
        let cart = client(RecordingTransport::replying(401, "unauthorized"), Some(Credential::new("t")));
        match cart.submit(request()).await {
            AddToCartOutcome::Failed { reason } => assert!(reason.contains("401")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error_becomes_failed_outcome() {
        let cart = client(FailingTransport, Some(Credential::new("t")));
        let outcome = cart.submit(request()).await;
        assert_eq!(
            outcome,
            AddToCartOutcome::Failed {
                reason: "Request timed out".to_string()
            }
        );
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let printed = format!("{:?}", Credential::new("hunter2"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_outcome_messages() {
        let added = AddToCartOutcome::Added(CartAck {
            cart_id: None,
            item_count: Some(4),
        });
        assert_eq!(added.message(), "Added to cart (4 items in cart)");
        assert_eq!(AddToCartOutcome::Added(CartAck::default()).message(), "Added to cart");
    }
}
