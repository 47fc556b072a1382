//! Newsletter signup.

use anyhow::Result;
use storefront_catalog::marketing::NewsletterForm;

use super::SubscribeArgs;
use crate::context::Context;

/// Run the subscribe command.
pub async fn run(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let mut form = NewsletterForm::new();
    let subscription = form.submit(&args.email)?;

    if ctx.output.is_json() {
        ctx.output.json(&subscription);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Subscribed {}. Check your inbox for confirmation.",
        subscription.email
    ));
    Ok(())
}
