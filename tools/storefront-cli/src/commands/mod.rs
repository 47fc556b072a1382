//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod home;
pub mod list;
pub mod show;
pub mod subscribe;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use storefront_catalog::view::{FeaturedTab, SortKey, ViewMode};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only products tagged with this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Only products whose name contains this text.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order: popularity, price-asc, price-desc, newest.
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortKey>,

    /// Page to show (1-indexed).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Layout: grid or list.
    #[arg(long, value_parser = parse_view_mode, default_value = "grid")]
    pub view: ViewMode,

    /// Show a featured tab instead of the full listing: all, new, sale, top-rated.
    #[arg(long, value_parser = parse_tab)]
    pub tab: Option<FeaturedTab>,

    /// Pad the page to a full grid by repeating products.
    #[arg(long)]
    pub fill: bool,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Layout: grid or list.
    #[arg(long, value_parser = parse_view_mode, default_value = "grid")]
    pub view: ViewMode,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,

    /// Number of related products to show.
    #[arg(long, default_value_t = 4)]
    pub related: usize,
}

/// Arguments for the home command.
#[derive(Args)]
pub struct HomeArgs {
    /// Featured tab to show.
    #[arg(long, value_parser = parse_tab, default_value = "all")]
    pub tab: FeaturedTab,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address.
    pub email: String,
}

/// Arguments for the add-to-cart command.
#[derive(Args)]
pub struct AddToCartArgs {
    /// Product id.
    pub id: String,

    /// Quantity, clamped to the allowed range.
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Check that the configured catalog loads and validates.
    Validate,
}

fn parse_sort(s: &str) -> Result<SortKey> {
    SortKey::from_token(s).ok_or_else(|| anyhow!("unknown sort '{}'", s))
}

fn parse_view_mode(s: &str) -> Result<ViewMode> {
    ViewMode::from_token(s).ok_or_else(|| anyhow!("unknown view '{}'", s))
}

fn parse_tab(s: &str) -> Result<FeaturedTab> {
    FeaturedTab::from_token(s).ok_or_else(|| anyhow!("unknown tab '{}'", s))
}

/// Trim user-typed filter text; blank input clears the filter.
pub fn filter_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_text_trims_and_drops_blanks() {
        assert_eq!(filter_text(Some("  lamp ".into())), Some("lamp".to_string()));
        assert_eq!(filter_text(Some("   ".into())), None);
        assert_eq!(filter_text(None), None);
    }

    #[test]
    fn test_parsers_reject_unknown_tokens() {
        assert_eq!(parse_sort("price-asc").unwrap(), SortKey::PriceAsc);
        assert!(parse_sort("cheapest-first").is_err());
        assert!(parse_view_mode("table").is_err());
        assert!(parse_tab("clearance").is_err());
    }
}
