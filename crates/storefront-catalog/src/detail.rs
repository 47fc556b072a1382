//! Product detail page view-model.

use crate::cart::{AddToCartRequest, MAX_QUANTITY};
use crate::catalog::{Catalog, Product};

/// Selection state for one product's detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    product: Product,
    quantity: u32,
    image_index: usize,
}

impl ProductDetail {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            image_index: 0,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment(&mut self) {
        self.set_quantity(self.quantity.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_quantity(self.quantity.saturating_sub(1));
    }

    /// Set the quantity, clamped into `1..=MAX_QUANTITY`.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(1, MAX_QUANTITY);
    }

    /// URL of the image currently shown, if the product has any.
    pub fn current_image(&self) -> Option<&str> {
        self.product.images.get(self.image_index).map(String::as_str)
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn next_image(&mut self) {
        let count = self.product.images.len();
        if count > 0 {
            self.image_index = (self.image_index + 1) % count;
        }
    }

    pub fn previous_image(&mut self) {
        let count = self.product.images.len();
        if count > 0 {
            self.image_index = (self.image_index + count - 1) % count;
        }
    }

    /// Jump to a thumbnail; out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) {
        if index < self.product.images.len() {
            self.image_index = index;
        }
    }

    /// Up to `limit` other products sharing a tag with this one, in catalog order.
    pub fn related(&self, catalog: &Catalog, limit: usize) -> Vec<Product> {
        catalog
            .products()
            .iter()
            .filter(|p| p.id != self.product.id)
            .filter(|p| self.product.tags.iter().any(|t| p.has_tag(t)))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Payload for the add-to-cart call with the current selection.
    pub fn add_to_cart_request(&self) -> AddToCartRequest {
        AddToCartRequest::new(self.product.id.clone(), self.quantity)
    }
}
