//! Storefront catalog view-model and domain types.
//!
//! - **Catalog**: validated product list, sample data, JSON ingestion
//! - **View**: filter/sort derivation, view state, pagination
//! - **Detail**: product detail page selection state
//! - **Marketing**: hero carousel, newsletter, testimonials, offers
//!
//! # Example
//!
//! ```
//! use storefront_catalog::prelude::*;
//!
//! let mut view = CatalogView::new(Catalog::sample());
//! view.set_category(Some("electronics".to_string()));
//! view.set_sort(SortKey::PriceAsc);
//!
//! let shown = view.displayed();
//! assert!(shown.iter().all(|p| p.has_tag("Electronics")));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod detail;
pub mod marketing;
pub mod view;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{AddToCartRequest, MAX_QUANTITY};
    pub use crate::catalog::{Catalog, Product, ProductRecord};
    pub use crate::detail::ProductDetail;
    pub use crate::marketing::{
        HeroCarousel, HeroSlide, NewsletterForm, SpecialOffer, Testimonial, TestimonialSummary,
    };
    pub use crate::view::{
        apply_filters, apply_sort, derive_view, CatalogView, FeaturedTab, FilterCriteria, Page,
        Pagination, SortKey, ViewMode, ViewState,
    };
}
