//! Storefront CLI - browse the catalog from the terminal.
//!
//! Commands:
//! - `storefront list` - Filtered, sorted, paginated product listing
//! - `storefront browse` - Interactive filter/sort session
//! - `storefront show` - Product detail page
//! - `storefront home` - Hero, featured products, offers, testimonials
//! - `storefront subscribe` - Newsletter signup
//! - `storefront add-to-cart` - Send an item to the cart service
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddToCartArgs, BrowseArgs, ConfigArgs, HomeArgs, ListArgs, ShowArgs, SubscribeArgs};

/// Storefront - browse products and add them to your cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with filters, sorting and paging
    List(ListArgs),

    /// Interactively filter and sort the catalog
    Browse(BrowseArgs),

    /// Show a product's detail page
    Show(ShowArgs),

    /// Show the home page sections
    Home(HomeArgs),

    /// Subscribe to the newsletter
    Subscribe(SubscribeArgs),

    /// Add a product to the cart
    AddToCart(AddToCartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Home(args) => commands::home::run(args, &ctx).await,
        Commands::Subscribe(args) => commands::subscribe::run(args, &ctx).await,
        Commands::AddToCart(args) => commands::cart::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
