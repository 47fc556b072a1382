//! Add a product to the cart.

use anyhow::Result;
use serde_json::json;
use storefront_catalog::detail::ProductDetail;
use storefront_catalog::ids::ProductId;
use storefront_data::AddToCartOutcome;

use super::AddToCartArgs;
use crate::context::Context;

/// Run the add-to-cart command.
///
/// The product must exist in the catalog. Cart failures are reported, not
/// raised, so the command still exits cleanly after a failed call.
pub async fn run(args: AddToCartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let product = catalog.require(&ProductId::new(args.id))?.clone();

    let mut detail = ProductDetail::new(product);
    detail.set_quantity(args.quantity);
    if detail.quantity() != args.quantity {
        ctx.output
            .warn(&format!("Quantity adjusted to {}", detail.quantity()));
    }
    let request = detail.add_to_cart_request();

    let client = ctx.cart_client()?;
    let spinner = ctx.output.spinner(&format!(
        "Adding {} x {} to cart...",
        request.quantity,
        detail.product().name
    ));
    let outcome = client.submit(request).await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        let value = match &outcome {
            AddToCartOutcome::Added(ack) => json!({ "added": true, "ack": ack }),
            AddToCartOutcome::Failed { reason } => json!({ "added": false, "reason": reason }),
        };
        ctx.output.json(&value);
        return Ok(());
    }

    match outcome {
        AddToCartOutcome::Added(_) => ctx.output.success(&outcome.message()),
        AddToCartOutcome::Failed { .. } => ctx.output.warn(&outcome.message()),
    }
    Ok(())
}
