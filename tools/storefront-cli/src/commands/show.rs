//! Product detail page.

use anyhow::Result;
use serde::Serialize;
use storefront_catalog::catalog::Product;
use storefront_catalog::detail::ProductDetail;
use storefront_catalog::ids::ProductId;
use storefront_catalog::view::ViewMode;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{badges, price_label, rating_label};

#[derive(Serialize)]
struct DetailJson<'a> {
    product: &'a Product,
    related: Vec<Product>,
}

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let product = catalog.require(&ProductId::new(args.id))?.clone();
    let detail = ProductDetail::new(product);
    let related = detail.related(&catalog, args.related);

    if ctx.output.is_json() {
        ctx.output.json(&DetailJson {
            product: detail.product(),
            related,
        });
        return Ok(());
    }

    let p = detail.product();
    ctx.output.header(&p.name);
    ctx.output.kv("id", p.id.as_str());
    ctx.output.kv("price", &price_label(p));
    if let Some(savings) = p.savings() {
        ctx.output.kv("you save", &savings.display());
    }
    ctx.output.kv("rating", &rating_label(p));
    let badge = badges(p);
    if !badge.is_empty() {
        ctx.output.kv("badges", &badge);
    }
    if !p.tags.is_empty() {
        ctx.output.kv("tags", &p.tags.join(", "));
    }
    if let Some(image) = detail.current_image() {
        ctx.output.kv(
            "image",
            &format!("{} (1 of {})", image, p.images.len()),
        );
    }
    if let Some(desc) = &p.description {
        ctx.output.line("");
        ctx.output.line(desc);
    }

    if !related.is_empty() {
        ctx.output.header("You may also like");
        ctx.output.products(&related, ViewMode::List);
    }

    Ok(())
}
