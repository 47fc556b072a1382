//! Product listing.

use anyhow::Result;
use serde::Serialize;
use storefront_catalog::catalog::Product;
use storefront_catalog::view::{fill_cyclic, CatalogView, FilterCriteria, Pagination, ViewState};

use super::{filter_text, ListArgs};
use crate::context::Context;

#[derive(Serialize)]
struct ListingJson<'a> {
    state: &'a ViewState,
    pagination: Option<Pagination>,
    products: Vec<Product>,
}

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let page_size = ctx.config.catalog.page_size;

    let state = ViewState::new()
        .with_criteria(FilterCriteria {
            category: filter_text(args.category),
            search: filter_text(args.search),
        })
        .with_sort(args.sort.unwrap_or(ctx.config.catalog.default_sort))
        .with_view_mode(args.view);
    let state = match args.tab {
        Some(tab) => state.with_tab(tab),
        None => state,
    };

    let view = CatalogView::new(catalog)
        .with_state(state)
        .with_page_size(page_size);

    if let Some(tab) = args.tab {
        let products = view.featured();
        if ctx.output.is_json() {
            ctx.output.json(&ListingJson {
                state: view.state(),
                pagination: None,
                products,
            });
            return Ok(());
        }
        ctx.output.header(tab.label());
        render(&products, view.state(), ctx);
        return Ok(());
    }

    let page = view.page(args.page);
    let mut products = page.items;
    if args.fill && !products.is_empty() && products.len() < page_size {
        products = fill_cyclic(&products, page_size);
    }

    if ctx.output.is_json() {
        ctx.output.json(&ListingJson {
            state: view.state(),
            pagination: Some(page.pagination),
            products,
        });
        return Ok(());
    }

    ctx.output.header(&heading(view.state()));
    render(&products, view.state(), ctx);

    let p = page.pagination;
    if p.total > 0 {
        ctx.output.info(&format!(
            "Showing {}-{} of {} (page {} of {})",
            p.start_item(),
            p.end_item(),
            p.total,
            p.page,
            p.total_pages
        ));
        if p.total_pages > 1 {
            let pages: Vec<String> = p
                .page_numbers(5)
                .into_iter()
                .map(|n| if n == p.page { format!("[{}]", n) } else { n.to_string() })
                .collect();
            ctx.output.line(&pages.join(" "));
        }
    }

    Ok(())
}

fn render(products: &[Product], state: &ViewState, ctx: &Context) {
    if products.is_empty() {
        ctx.output.info("No products match the current filters.");
        return;
    }
    ctx.output.products(products, state.view_mode);
}

fn heading(state: &ViewState) -> String {
    let mut parts = vec!["Products".to_string()];
    if let Some(category) = state.criteria.category() {
        parts.push(format!("in '{}'", category));
    }
    if let Some(search) = state.criteria.search() {
        parts.push(format!("matching '{}'", search));
    }
    parts.push(format!("by {}", state.sort.display_name()));
    parts.join(" ")
}
