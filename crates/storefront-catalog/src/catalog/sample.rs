//! Built-in sample products used by the demo storefront.

use super::Product;
use crate::money::{Currency, Money};

fn usd(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::USD)
}

/// The sample product list, in display order.
pub fn products() -> Vec<Product> {
    vec![
        Product::new("wireless-headphones", "Wireless Headphones", usd(199.99))
            .with_discounted_price(usd(149.99))
            .with_rating(4.5, 128)
            .with_tags(["Electronics", "Audio"])
            .on_sale(25)
            .with_description("Over-ear headphones with active noise cancelling and 30 hour battery life.")
            .with_image("/images/products/headphones-1.jpg")
            .with_image("/images/products/headphones-2.jpg"),
        Product::new("smart-watch", "Smart Watch Series 5", usd(299.99))
            .with_rating(4.8, 256)
            .with_tags(["Electronics", "Wearables"])
            .new_arrival()
            .with_description("Fitness tracking, heart-rate monitoring and a week of battery.")
            .with_image("/images/products/watch-1.jpg"),
        Product::new("leather-backpack", "Leather Backpack", usd(129.99))
            .with_discounted_price(usd(99.99))
            .with_rating(4.2, 64)
            .with_tags(["Fashion", "Bags"])
            .on_sale(23)
            .with_image("/images/products/backpack-1.jpg"),
        Product::new("running-shoes", "Running Shoes", usd(89.99))
            .with_rating(4.6, 412)
            .with_tags(["Fashion", "Sports"])
            .with_image("/images/products/shoes-1.jpg"),
        Product::new("ceramic-mug-set", "Ceramic Mug Set", usd(34.99))
            .with_tags(["Home", "Kitchen"])
            .new_arrival()
            .with_image("/images/products/mugs-1.jpg"),
        Product::new("desk-lamp", "LED Desk Lamp", usd(49.99))
            .with_discounted_price(usd(39.99))
            .with_rating(4.1, 37)
            .with_tags(["Home", "Electronics"])
            .on_sale(20)
            .with_image("/images/products/lamp-1.jpg"),
        Product::new("yoga-mat", "Yoga Mat", usd(39.99))
            .with_rating(4.7, 89)
            .with_tags(["Sports"])
            .new_arrival()
            .with_image("/images/products/yoga-1.jpg"),
        Product::new("bluetooth-speaker", "Bluetooth Speaker", usd(79.99))
            .with_rating(4.3, 150)
            .with_tags(["Electronics", "Audio"])
            .with_image("/images/products/speaker-1.jpg"),
    ]
}
