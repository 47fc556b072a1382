//! Hero carousel.

use crate::ids::SlideId;
use serde::{Deserialize, Serialize};

/// One hero banner slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub id: SlideId,
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_url: String,
    pub background_image: Option<String>,
}

impl HeroSlide {
    pub fn new(id: &str, headline: &str, subheadline: &str, cta_text: &str, cta_url: &str) -> Self {
        Self {
            id: SlideId::new(id),
            headline: headline.to_string(),
            subheadline: subheadline.to_string(),
            cta_text: cta_text.to_string(),
            cta_url: cta_url.to_string(),
            background_image: None,
        }
    }
}

/// Slide navigation state.
///
/// `next`/`previous` wrap around; `tick` is driven by the host's timer and
/// only advances while autoplay is on.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroCarousel {
    slides: Vec<HeroSlide>,
    current: usize,
    autoplay: bool,
}

impl HeroCarousel {
    pub fn new(slides: Vec<HeroSlide>) -> Self {
        Self {
            slides,
            current: 0,
            autoplay: true,
        }
    }

    pub fn slides(&self) -> &[HeroSlide] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&HeroSlide> {
        self.slides.get(self.current)
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.current = (self.current + 1) % self.slides.len();
        }
    }

    pub fn previous(&mut self) {
        let len = self.slides.len();
        if len > 0 {
            self.current = (self.current + len - 1) % len;
        }
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }

    pub fn set_autoplay(&mut self, on: bool) {
        self.autoplay = on;
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn tick(&mut self) {
        if self.autoplay {
            self.next();
        }
    }
}

impl Default for HeroCarousel {
    fn default() -> Self {
        Self::new(vec![
            HeroSlide::new(
                "summer-sale",
                "Summer Sale",
                "Up to 50% off selected electronics and accessories",
                "Shop Now",
                "/products?category=electronics",
            ),
            HeroSlide::new(
                "new-arrivals",
                "New Arrivals",
                "Fresh styles for the new season",
                "Discover",
                "/products?tab=new",
            ),
            HeroSlide::new(
                "free-shipping",
                "Free Shipping",
                "On all orders over $50",
                "Learn More",
                "/shipping",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut carousel = HeroCarousel::default();
        assert_eq!(carousel.current_index(), 0);

        carousel.previous();
        assert_eq!(carousel.current_index(), 2);
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut carousel = HeroCarousel::default();
        carousel.go_to(1);
        assert_eq!(carousel.current().map(|s| s.id.as_str()), Some("new-arrivals"));
        carousel.go_to(9);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_tick_respects_autoplay() {
        let mut carousel = HeroCarousel::default();
        carousel.tick();
        assert_eq!(carousel.current_index(), 1);

        carousel.set_autoplay(false);
        carousel.tick();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = HeroCarousel::new(Vec::new());
        carousel.next();
        carousel.previous();
        carousel.tick();
        assert!(carousel.current().is_none());
    }
}
