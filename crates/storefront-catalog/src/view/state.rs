//! Presentation state for the listing page and featured widget.

use crate::catalog::Product;
use crate::view::{FilterCriteria, SortKey};
use serde::{Deserialize, Serialize};

/// Rating at or above which a product shows under "Top Rated".
pub const TOP_RATED_THRESHOLD: f32 = 4.5;

/// Grid or list layout for the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Tabs of the featured-products widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FeaturedTab {
    #[default]
    All,
    NewArrivals,
    OnSale,
    TopRated,
}

impl FeaturedTab {
    pub const ALL: [FeaturedTab; 4] = [
        FeaturedTab::All,
        FeaturedTab::NewArrivals,
        FeaturedTab::OnSale,
        FeaturedTab::TopRated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeaturedTab::All => "all",
            FeaturedTab::NewArrivals => "new",
            FeaturedTab::OnSale => "sale",
            FeaturedTab::TopRated => "top-rated",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(FeaturedTab::All),
            "new" | "new-arrivals" => Some(FeaturedTab::NewArrivals),
            "sale" | "on-sale" => Some(FeaturedTab::OnSale),
            "top-rated" | "top" => Some(FeaturedTab::TopRated),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeaturedTab::All => "All Products",
            FeaturedTab::NewArrivals => "New Arrivals",
            FeaturedTab::OnSale => "On Sale",
            FeaturedTab::TopRated => "Top Rated",
        }
    }

    /// Tab predicate.
    pub fn includes(&self, product: &Product) -> bool {
        match self {
            FeaturedTab::All => true,
            FeaturedTab::NewArrivals => product.is_new,
            FeaturedTab::OnSale => product.is_on_sale,
            FeaturedTab::TopRated => product.rating() >= TOP_RATED_THRESHOLD,
        }
    }
}

/// Everything the user can change on the listing page, as one value.
///
/// Each `with_*` method returns a new state; the derive functions only ever
/// read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub view_mode: ViewMode,
    pub tab: FeaturedTab,
    pub filters_expanded: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(self, criteria: FilterCriteria) -> Self {
        Self { criteria, ..self }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }

    pub fn with_view_mode(self, view_mode: ViewMode) -> Self {
        Self { view_mode, ..self }
    }

    pub fn with_tab(self, tab: FeaturedTab) -> Self {
        Self { tab, ..self }
    }

    pub fn with_filters_expanded(self, filters_expanded: bool) -> Self {
        Self {
            filters_expanded,
            ..self
        }
    }
}
