//! Interactive catalog browsing.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use storefront_catalog::view::{CatalogView, SortKey};

use super::{filter_text, BrowseArgs};
use crate::context::Context;

const ACTIONS: [&str; 7] = [
    "Filter by category",
    "Search",
    "Sort",
    "Toggle grid/list",
    "Next page",
    "Previous page",
    "Quit",
];

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and cannot produce JSON; use `storefront list --json`");
    }

    let catalog = ctx.load_catalog()?;
    let mut view = CatalogView::new(catalog).with_page_size(ctx.config.catalog.page_size);
    view.set_sort(ctx.config.catalog.default_sort);
    view.set_view_mode(args.view);
    let mut page = 1;

    loop {
        let current = view.page(page);
        page = current.pagination.page;

        ctx.output.header(&format!(
            "Page {} of {} ({} products, {})",
            current.pagination.page,
            current.pagination.total_pages,
            current.pagination.total,
            view.state().sort.display_name()
        ));
        if current.is_empty() {
            ctx.output.info("No products match the current filters.");
        } else {
            ctx.output.products(&current.items, view.state().view_mode);
        }

        let action = Select::new()
            .with_prompt("What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                let mut options = vec!["All categories".to_string()];
                options.extend(view.categories());
                let choice = Select::new()
                    .with_prompt("Category")
                    .items(&options)
                    .default(0)
                    .interact()?;
                view.set_category((choice > 0).then(|| options[choice].clone()));
                page = 1;
            }
            1 => {
                let text: String = Input::new()
                    .with_prompt("Search (empty to clear)")
                    .allow_empty(true)
                    .interact_text()?;
                view.set_search(filter_text(Some(text)));
                page = 1;
            }
            2 => {
                let labels: Vec<&str> = SortKey::ALL.iter().map(|k| k.display_name()).collect();
                let current_sort = SortKey::ALL
                    .iter()
                    .position(|k| *k == view.state().sort)
                    .unwrap_or(0);
                let choice = Select::new()
                    .with_prompt("Sort by")
                    .items(&labels)
                    .default(current_sort)
                    .interact()?;
                view.set_sort(SortKey::ALL[choice]);
            }
            3 => view.set_view_mode(view.state().view_mode.toggled()),
            4 => page += 1,
            5 => page = page.saturating_sub(1).max(1),
            _ => break,
        }
    }

    Ok(())
}
