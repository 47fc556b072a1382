//! Product catalog.
//!
//! A [`Catalog`] is the validated, read-only product list that every view
//! is derived from.

mod product;
pub mod sample;

pub use product::{Product, ProductRecord, DEFAULT_RATING, MAX_RATING};

use std::collections::HashSet;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// A validated, ordered product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product and rejecting duplicate ids.
    ///
    /// All prices must share the first product's currency so that price
    /// ordering compares like with like.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let currency = products.first().map(|p| p.price.currency);
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if let Some(expected) = currency {
                if product.price.currency != expected {
                    return Err(CommerceError::CurrencyMismatch {
                        product_id: product.id.to_string(),
                        expected: expected.code().to_string(),
                        found: product.price.currency.code().to_string(),
                    });
                }
            }
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        tracing::debug!(count = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CommerceError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        Self::new(
            records
                .into_iter()
                .map(|r| r.into_product(currency))
                .collect(),
        )
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            products: sample::products(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product, failing with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_rejects_duplicate_ids() {
        let a = Product::new("x", "A", Money::new(100, Currency::USD));
        let b = Product::new("x", "B", Money::new(200, Currency::USD));
        assert_eq!(
            Catalog::new(vec![a, b]),
            Err(CommerceError::DuplicateProduct("x".into()))
        );
    }

    #[test]
    fn test_rejects_mixed_currencies() {
        let usd = Product::new("a", "A", Money::new(1000, Currency::USD));
        let eur = Product::new("b", "B", Money::new(900, Currency::EUR));
        assert!(matches!(
            Catalog::new(vec![usd.clone(), eur]),
            Err(CommerceError::CurrencyMismatch { product_id, .. }) if product_id == "b"
        ));

        let cross = usd.with_discounted_price(Money::new(999, Currency::JPY));
        assert!(matches!(
            Catalog::new(vec![cross]),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id":"a","name":"Alpha","price":10,"tags":["a"]},
            {"id":"b","name":"Beta","price":5,"discountedPrice":4,"tags":["b"]}
        ]"#;
        let catalog = Catalog::from_json(json, Currency::USD).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].name, "Beta");
        assert!(catalog.get(&"a".into()).is_some());
        assert!(catalog.require(&"zz".into()).is_err());
    }

    #[test]
    fn test_from_json_rejects_bad_discount() {
        let json = r#"[{"id":"a","name":"Alpha","price":10,"discountedPrice":12}]"#;
        assert!(matches!(
            Catalog::from_json(json, Currency::USD),
            Err(CommerceError::DiscountExceedsPrice { .. })
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Catalog::from_json("not json", Currency::USD),
            Err(CommerceError::SerializationError(_))
        ));
    }

    #[test]
    fn test_sample_catalog_is_valid() {
        let sample = Catalog::sample();
        assert!(!sample.is_empty());
        assert!(Catalog::new(sample.into_products()).is_ok());
    }
}
