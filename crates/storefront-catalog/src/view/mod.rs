//! Catalog view-model.
//!
//! The listing page and the featured-products widget both render a
//! *derived view*: the catalog filtered by [`FilterCriteria`] and then
//! ordered by a [`SortKey`]. The free functions here are pure and cheap
//! enough to run on every keystroke; [`CatalogView`] bundles them with the
//! current [`ViewState`].

mod criteria;
mod pagination;
mod sort;
mod state;

pub use criteria::FilterCriteria;
pub use pagination::{fill_cyclic, paginate, Page, Pagination};
pub use sort::SortKey;
pub use state::{FeaturedTab, ViewMode, ViewState, TOP_RATED_THRESHOLD};

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::catalog::{Catalog, Product};

/// Default number of products per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Keep the products matching every active criterion, in input order.
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    if criteria.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}

/// Order products by `key`.
///
/// Price keys sort by effective price; ties keep their relative order since
/// `sort_by_key` is stable. Other keys return the input order.
pub fn apply_sort(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    if !key.reorders() {
        return sorted;
    }
    match key {
        SortKey::PriceAsc => sorted.sort_by_key(|p| p.effective_price().amount_cents),
        SortKey::PriceDesc => sorted.sort_by_key(|p| Reverse(p.effective_price().amount_cents)),
        SortKey::Popularity | SortKey::Newest => {}
    }
    sorted
}

/// Filter then sort.
pub fn derive_view(products: &[Product], criteria: &FilterCriteria, key: SortKey) -> Vec<Product> {
    let filtered = apply_filters(products, criteria);
    let view = apply_sort(&filtered, key);
    tracing::debug!(
        input = products.len(),
        output = view.len(),
        category = criteria.category(),
        search = criteria.search(),
        sort = %key,
        "derived catalog view"
    );
    view
}

/// Distinct tags in first-seen order, de-duplicated case-insensitively.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for tag in products.iter().flat_map(|p| p.tags.iter()) {
        if seen.insert(tag.to_lowercase()) {
            out.push(tag.clone());
        }
    }
    out
}

/// The listing page view-model.
///
/// Owns the catalog and the current [`ViewState`]. Every setter replaces the
/// state value; nothing is cached, so [`CatalogView::displayed`] always
/// reflects the latest selection.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    state: ViewState,
    per_page: usize,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ViewState::default(),
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_state(mut self, state: ViewState) -> Self {
        self.state = state;
        self
    }

    pub fn with_page_size(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_category(&mut self, category: Option<String>) {
        let criteria = FilterCriteria {
            category,
            ..self.state.criteria.clone()
        };
        self.replace(|s| s.with_criteria(criteria));
    }

    pub fn set_search(&mut self, search: Option<String>) {
        let criteria = FilterCriteria {
            search,
            ..self.state.criteria.clone()
        };
        self.replace(|s| s.with_criteria(criteria));
    }

    pub fn clear_filters(&mut self) {
        self.replace(|s| s.with_criteria(FilterCriteria::default()));
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.replace(|s| s.with_sort(sort));
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.replace(|s| s.with_view_mode(mode));
    }

    pub fn select_tab(&mut self, tab: FeaturedTab) {
        self.replace(|s| s.with_tab(tab));
    }

    pub fn toggle_filter_panel(&mut self) {
        let expanded = !self.state.filters_expanded;
        self.replace(|s| s.with_filters_expanded(expanded));
    }

    fn replace(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }

    /// The filtered and sorted listing.
    pub fn displayed(&self) -> Vec<Product> {
        derive_view(
            self.catalog.products(),
            &self.state.criteria,
            self.state.sort,
        )
    }

    /// One page of the listing.
    pub fn page(&self, page: usize) -> Page<Product> {
        paginate(&self.displayed(), page, self.per_page)
    }

    /// Products under the selected featured tab, in catalog order.
    pub fn featured(&self) -> Vec<Product> {
        self.featured_in(self.state.tab)
    }

    /// Products under an arbitrary featured tab, in catalog order.
    pub fn featured_in(&self, tab: FeaturedTab) -> Vec<Product> {
        self.catalog
            .products()
            .iter()
            .filter(|p| tab.includes(p))
            .cloned()
            .collect()
    }

    /// Category options for the filter panel.
    pub fn categories(&self) -> Vec<String> {
        categories(self.catalog.products())
    }
}
