//! Product type and its read-time defaults.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Rating shown when a product carries none (midpoint of the 0-5 scale).
pub const DEFAULT_RATING: f32 = 2.5;

/// Upper bound of the rating scale.
pub const MAX_RATING: f32 = 5.0;

/// A product in the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base price.
    pub price: Money,
    /// Discounted price, if any.
    pub discounted_price: Option<Money>,
    /// Average rating on a 0-5 scale.
    pub rating: Option<f32>,
    /// Number of reviews.
    pub review_count: Option<u32>,
    /// Tag labels, used for category and promotional filtering.
    pub tags: Vec<String>,
    /// Shown with a "new" badge.
    pub is_new: bool,
    /// Shown with a sale badge.
    pub is_on_sale: bool,
    /// Discount percentage, meaningful only when on sale.
    pub discount_percentage: Option<u8>,
    /// Long description for the detail page.
    pub description: Option<String>,
    /// Image URLs, the first one is the primary image.
    pub images: Vec<String>,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            discounted_price: None,
            rating: None,
            review_count: None,
            tags: Vec::new(),
            is_new: false,
            is_on_sale: false,
            discount_percentage: None,
            description: None,
            images: Vec::new(),
        }
    }

    pub fn with_discounted_price(mut self, price: Money) -> Self {
        self.discounted_price = Some(price);
        self
    }

    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = Some(reviews);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// Mark as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Mark as on sale with the given discount percentage.
    pub fn on_sale(mut self, percent: u8) -> Self {
        self.is_on_sale = true;
        self.discount_percentage = Some(percent);
        self
    }

    /// Add a tag, ignoring case-insensitive duplicates.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.has_tag(&tag) {
            self.tags.push(tag);
        }
    }

    /// Discounted price when present, else the base price.
    pub fn effective_price(&self) -> Money {
        self.discounted_price.unwrap_or(self.price)
    }

    /// Rating with the midpoint default applied.
    pub fn rating(&self) -> f32 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Review count, zero when absent.
    pub fn review_count(&self) -> u32 {
        self.review_count.unwrap_or(0)
    }

    /// Discount to display; zero unless the product is on sale.
    pub fn display_discount(&self) -> u8 {
        if self.is_on_sale {
            self.discount_percentage.unwrap_or(0)
        } else {
            0
        }
    }

    /// Amount saved against the base price, if a lower discounted price exists.
    pub fn savings(&self) -> Option<Money> {
        self.discounted_price
            .and_then(|d| self.price.try_subtract(&d))
            .filter(|s| s.amount_cents > 0)
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Check the invariants enforced at ingestion.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let id = self.id.to_string();

        if self.price.is_negative() {
            return Err(CommerceError::NegativePrice(id));
        }

        if let Some(discounted) = self.discounted_price {
            if discounted.is_negative() {
                return Err(CommerceError::NegativePrice(id));
            }
            if discounted.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    product_id: id,
                    expected: self.price.currency.code().to_string(),
                    found: discounted.currency.code().to_string(),
                });
            }
            if discounted.amount_cents > self.price.amount_cents {
                return Err(CommerceError::DiscountExceedsPrice {
                    product_id: id,
                    price: self.price.display(),
                    discounted: discounted.display(),
                });
            }
        }

        if let Some(rating) = self.rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(CommerceError::RatingOutOfRange {
                    product_id: id,
                    rating,
                });
            }
        }

        if let Some(percent) = self.discount_percentage {
            if percent > 100 {
                return Err(CommerceError::DiscountOutOfRange {
                    product_id: id,
                    percent,
                });
            }
        }

        Ok(())
    }
}

/// Product shape as it appears in JSON catalog files.
///
/// Prices are plain decimals; the currency comes from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discounted_price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub discount: Option<u8>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ProductRecord {
    /// Convert into a product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Product {
        let mut product = Product::new(self.id, self.name, Money::from_decimal(self.price, currency));
        product.discounted_price = self
            .discounted_price
            .map(|p| Money::from_decimal(p, currency));
        product.rating = self.rating;
        product.review_count = self.review_count;
        product.is_new = self.is_new;
        product.is_on_sale = self.is_on_sale;
        product.discount_percentage = self.discount;
        product.description = self.description;
        product.images = self.images;
        product.with_tags(self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_validate_rejects_discount_in_other_currency() {
        let p = Product::new("x", "Lamp", usd(1000))
            .with_discounted_price(Money::new(999, Currency::JPY));
        assert_eq!(
            p.validate(),
            Err(CommerceError::CurrencyMismatch {
                product_id: "x".to_string(),
                expected: "USD".to_string(),
                found: "JPY".to_string(),
            })
        );
    }

    #[test]
    fn test_effective_price_prefers_discount() {
        let p = Product::new("p1", "Lamp", usd(1000));
        assert_eq!(p.effective_price(), usd(1000));

        let p = p.with_discounted_price(usd(800));
        assert_eq!(p.effective_price(), usd(800));
        assert_eq!(p.savings(), Some(usd(200)));
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let p = Product::new("p1", "Lamp", usd(1000));
        assert_eq!(p.rating(), DEFAULT_RATING);
        assert_eq!(p.review_count(), 0);
        assert_eq!(p.display_discount(), 0);
        assert_eq!(p.savings(), None);
    }

    #[test]
    fn test_discount_hidden_when_not_on_sale() {
        let mut p = Product::new("p1", "Lamp", usd(1000));
        p.discount_percentage = Some(30);
        assert_eq!(p.display_discount(), 0);

        let p = p.on_sale(30);
        assert_eq!(p.display_discount(), 30);
    }

    #[test]
    fn test_tags_case_insensitive() {
        let p = Product::new("p1", "Lamp", usd(1000)).with_tags(["Lighting", "lighting", "Home"]);
        assert_eq!(p.tags, vec!["Lighting", "Home"]);
        assert!(p.has_tag("LIGHTING"));
        assert!(!p.has_tag("garden"));
    }

    #[test]
    fn test_name_contains() {
        let p = Product::new("p1", "Desk Lamp", usd(1000));
        assert!(p.name_contains("lamp"));
        assert!(p.name_contains("K L"));
        assert!(!p.name_contains("chair"));
    }

    #[test]
    fn test_validate_discount_above_price() {
        let p = Product::new("p1", "Lamp", usd(1000)).with_discounted_price(usd(1200));
        assert!(matches!(
            p.validate(),
            Err(CommerceError::DiscountExceedsPrice { .. })
        ));
    }

    #[test]
    fn test_validate_rating_and_percent() {
        let p = Product::new("p1", "Lamp", usd(1000)).with_rating(5.5, 3);
        assert!(matches!(p.validate(), Err(CommerceError::RatingOutOfRange { .. })));

        let p = Product::new("p1", "Lamp", usd(1000)).on_sale(120);
        assert!(matches!(p.validate(), Err(CommerceError::DiscountOutOfRange { .. })));

        let p = Product::new("p1", "Lamp", usd(-1));
        assert_eq!(p.validate(), Err(CommerceError::NegativePrice("p1".into())));
    }

    #[test]
    fn test_record_conversion() {
        let json = r#"{"id":"b","name":"Beta","price":5,"discountedPrice":4,"tags":["b"]}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();
        let product = record.into_product(Currency::USD);
        assert_eq!(product.price, usd(500));
        assert_eq!(product.effective_price(), usd(400));
        assert_eq!(product.rating(), DEFAULT_RATING);
        assert!(!product.is_new);
    }
}
