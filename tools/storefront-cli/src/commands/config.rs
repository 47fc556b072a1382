//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use storefront_catalog::money::Currency;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.line("");
    ctx.output.line("[catalog]");
    ctx.output.kv(
        "data_file",
        ctx.config
            .catalog
            .data_file
            .as_deref()
            .unwrap_or("(built-in sample)"),
    );
    ctx.output
        .kv("page_size", &ctx.config.catalog.page_size.to_string());
    ctx.output
        .kv("default_sort", ctx.config.catalog.default_sort.as_str());
    ctx.output.kv("currency", &ctx.config.catalog.currency);

    ctx.output.line("");
    ctx.output.line("[cart]");
    ctx.output.kv("api_url", &ctx.config.cart.api_url);
    let token_state = if std::env::var(&ctx.config.cart.token_env)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
    {
        "set"
    } else {
        "not set"
    };
    ctx.output.kv(
        "token_env",
        &format!("{} ({})", ctx.config.cart.token_env, token_state),
    );
    ctx.output
        .kv("timeout_secs", &ctx.config.cart.timeout_secs.to_string());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.catalog.page_size == 0 {
        errors.push("catalog.page_size must be at least 1".to_string());
    }

    if Currency::from_code(&ctx.config.catalog.currency).is_none() {
        errors.push(format!(
            "catalog.currency '{}' is not supported",
            ctx.config.catalog.currency
        ));
    }

    let api_url = &ctx.config.cart.api_url;
    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        errors.push(format!("cart.api_url '{}' must be an http(s) URL", api_url));
    } else if api_url.starts_with("http://") && !api_url.contains("localhost") {
        warnings.push("cart.api_url is not using https".to_string());
    }

    if ctx.config.cart.timeout_secs == 0 {
        errors.push("cart.timeout_secs must be at least 1".to_string());
    }

    if std::env::var(&ctx.config.cart.token_env).is_err() {
        warnings.push(format!(
            "{} is not set; add-to-cart will fail",
            ctx.config.cart.token_env
        ));
    }

    if errors.is_empty() {
        match ctx.load_catalog() {
            Ok(catalog) => ctx
                .output
                .info(&format!("Catalog loaded: {} products", catalog.len())),
            Err(e) => errors.push(format!("catalog: {:#}", e)),
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
