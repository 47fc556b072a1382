//! Catalog error types.

use thiserror::Error;

/// Errors raised while ingesting catalog data or validating user input.
///
/// The view functions themselves never fail; these only come from loading
/// a product list or from form submissions.
#[derive(Error, Debug, PartialEq)]
pub enum CommerceError {
    /// Two products share the same identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Discounted price is above the base price.
    #[error("Discounted price {discounted} exceeds price {price} for {product_id}")]
    DiscountExceedsPrice {
        product_id: String,
        price: String,
        discounted: String,
    },

    /// Prices that should share a currency do not.
    #[error("Currency mismatch for {product_id}: expected {expected}, found {found}")]
    CurrencyMismatch {
        product_id: String,
        expected: String,
        found: String,
    },

    /// Price is negative.
    #[error("Negative price for {0}")]
    NegativePrice(String),

    /// Rating outside the 0-5 scale.
    #[error("Rating {rating} out of range for {product_id}")]
    RatingOutOfRange { product_id: String, rating: f32 },

    /// Discount percentage above 100.
    #[error("Discount percentage {percent} out of range for {product_id}")]
    DiscountOutOfRange { product_id: String, percent: u8 },

    /// Invalid email address on a newsletter signup.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
