//! Home page: hero, featured products, offers and testimonials.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use storefront_catalog::catalog::Product;
use storefront_catalog::marketing::{
    default_offers, default_testimonials, HeroCarousel, HeroSlide, SpecialOffer, Testimonial,
    TestimonialSummary,
};
use storefront_catalog::view::{CatalogView, ViewMode};

use super::HomeArgs;
use crate::context::Context;

/// Products shown in the featured widget.
const FEATURED_LIMIT: usize = 4;

#[derive(Serialize)]
struct HomeJson<'a> {
    hero: &'a [HeroSlide],
    featured: Vec<Product>,
    offers: Vec<SpecialOffer>,
    testimonials: Vec<Testimonial>,
    testimonial_summary: TestimonialSummary,
}

/// Run the home command.
pub async fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let mut view = CatalogView::new(ctx.load_catalog()?);
    view.select_tab(args.tab);
    let featured: Vec<Product> = view.featured().into_iter().take(FEATURED_LIMIT).collect();

    let carousel = HeroCarousel::default();
    let now = Utc::now();
    let offers = default_offers(now);
    let testimonials = default_testimonials();
    let summary = TestimonialSummary::from(testimonials.as_slice());

    if ctx.output.is_json() {
        ctx.output.json(&HomeJson {
            hero: carousel.slides(),
            featured,
            offers,
            testimonials,
            testimonial_summary: summary,
        });
        return Ok(());
    }

    if let Some(slide) = carousel.current() {
        ctx.output.header(&slide.headline);
        ctx.output.line(&slide.subheadline);
        ctx.output
            .line(&format!("[{}] -> {}", slide.cta_text, slide.cta_url));
        ctx.output.line(&format!(
            "slide {} of {}",
            carousel.current_index() + 1,
            carousel.slides().len()
        ));
    }

    ctx.output.header(&format!("Featured: {}", args.tab.label()));
    if featured.is_empty() {
        ctx.output.info("Nothing here right now.");
    } else {
        ctx.output.products(&featured, ViewMode::Grid);
    }

    ctx.output.header("Special Offers");
    for offer in offers.iter().filter(|o| o.is_active(now)) {
        let code = offer
            .code
            .as_deref()
            .map(|c| format!(" with code {}", c))
            .unwrap_or_default();
        ctx.output.list_item(&format!(
            "{} - {}% off{}: {} (ends in {})",
            offer.title,
            offer.discount_percent,
            code,
            offer.description,
            offer.remaining(now)
        ));
    }

    ctx.output.header("What Our Customers Say");
    if let Some(avg) = summary.average_rating {
        ctx.output
            .line(&format!("★ {:.1} from {} reviews", avg, summary.count));
    }
    for t in &testimonials {
        ctx.output
            .list_item(&format!("\"{}\" - {}, {}", t.quote, t.author_name, t.author_title));
    }

    ctx.output.header("Newsletter");
    ctx.output
        .line("Run `storefront subscribe <email>` for deals and new arrivals.");

    Ok(())
}
