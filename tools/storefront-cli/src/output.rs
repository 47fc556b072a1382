//! Output formatting for the CLI.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_catalog::catalog::Product;
use storefront_catalog::view::ViewMode;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print plain text.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("  {}", msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Render products in the chosen layout.
    pub fn products(&self, products: &[Product], mode: ViewMode) {
        if self.json {
            return;
        }
        match mode {
            ViewMode::List => {
                for p in products {
                    self.list_item(&format!(
                        "{} {} {} {}",
                        style(&p.name).bold(),
                        price_label(p),
                        rating_label(p),
                        badges(p)
                    ));
                    if let Some(desc) = &p.description {
                        println!("      {}", style(desc).dim());
                    }
                }
            }
            ViewMode::Grid => {
                let widths = self.grid_widths();
                self.table_row(&["ID", "NAME", "PRICE", "RATING", ""], &widths);
                for p in products {
                    let (price, rating, badge) = (price_label(p), rating_label(p), badges(p));
                    self.table_row(
                        &[
                            p.id.as_str(),
                            p.name.as_str(),
                            price.as_str(),
                            rating.as_str(),
                            badge.as_str(),
                        ],
                        &widths,
                    );
                }
            }
        }
    }

    fn grid_widths(&self) -> [usize; 5] {
        let name = if self.term_width() >= 100 { 28 } else { 22 };
        [20, name, 18, 14, 12]
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(template);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}

/// Effective price, with the base price struck out when discounted.
pub fn price_label(p: &Product) -> String {
    match p.discounted_price {
        Some(d) if d != p.price => format!("{} (was {})", d.display(), p.price.display()),
        _ => p.price.display(),
    }
}

/// Stars and review count.
pub fn rating_label(p: &Product) -> String {
    format!("★ {:.1} ({})", p.rating(), p.review_count())
}

/// NEW / -N% badges.
pub fn badges(p: &Product) -> String {
    let mut out = Vec::new();
    if p.is_new {
        out.push("NEW".to_string());
    }
    let discount = p.display_discount();
    if discount > 0 {
        out.push(format!("-{}%", discount));
    }
    out.join(" ")
}
