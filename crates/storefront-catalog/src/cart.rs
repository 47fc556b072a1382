//! Add-to-cart payload.
//!
//! The storefront keeps no cart of its own; it only builds the request the
//! cart service expects.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity a shopper can select for one product.
pub const MAX_QUANTITY: u32 = 99;

/// Body of the add-to-cart call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl AddToCartRequest {
    /// Build a request, clamping the quantity into `1..=MAX_QUANTITY`.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity: quantity.clamp(1, MAX_QUANTITY),
        }
    }
}
