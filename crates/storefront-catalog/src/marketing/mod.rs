//! Home page marketing sections.

mod carousel;
mod newsletter;
mod offers;
mod testimonials;

pub use carousel::{HeroCarousel, HeroSlide};
pub use newsletter::{validate_email, NewsletterForm, Subscription};
pub use offers::{default_offers, Countdown, SpecialOffer};
pub use testimonials::{default_testimonials, Testimonial, TestimonialSummary};
