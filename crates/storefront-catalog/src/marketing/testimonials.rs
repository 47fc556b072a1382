//! Customer testimonials.

use serde::{Deserialize, Serialize};

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author_name: String,
    pub author_title: String,
    pub rating: u8,
    pub avatar_url: Option<String>,
}

impl Testimonial {
    pub fn new(quote: &str, name: &str, title: &str, rating: u8) -> Self {
        Self {
            quote: quote.to_string(),
            author_name: name.to_string(),
            author_title: title.to_string(),
            rating: rating.min(5),
            avatar_url: None,
        }
    }
}

/// Headline numbers shown above the testimonials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestimonialSummary {
    pub count: usize,
    pub average_rating: Option<f32>,
}

impl From<&[Testimonial]> for TestimonialSummary {
    fn from(items: &[Testimonial]) -> Self {
        let average_rating = if items.is_empty() {
            None
        } else {
            let sum: u32 = items.iter().map(|t| u32::from(t.rating)).sum();
            Some(sum as f32 / items.len() as f32)
        };
        Self {
            count: items.len(),
            average_rating,
        }
    }
}

/// The testimonials shown on the home page.
pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Fast delivery and the headphones sound even better than I expected.",
            "Sarah Chen",
            "Verified Buyer",
            5,
        ),
        Testimonial::new(
            "Great prices on the sale section. Checkout could be quicker.",
            "Michael Rodriguez",
            "Verified Buyer",
            4,
        ),
        Testimonial::new(
            "Customer service sorted out a sizing issue in a day.",
            "Emily Watson",
            "Verified Buyer",
            5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let items = default_testimonials();
        let summary = TestimonialSummary::from(items.as_slice());
        assert_eq!(summary.count, 3);
        let avg = summary.average_rating.unwrap();
        assert!((avg - 14.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_summary() {
        let empty: Vec<Testimonial> = Vec::new();
        let summary = TestimonialSummary::from(empty.as_slice());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_rating, None);
    }

    #[test]
    fn test_rating_capped() {
        assert_eq!(Testimonial::new("q", "n", "t", 9).rating, 5);
    }
}
