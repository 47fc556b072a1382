//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use storefront_catalog::catalog::Catalog;
use storefront_catalog::money::Currency;
use storefront_data::{CartClient, Credential, FetchClient, ReqwestTransport};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Path the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable config"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Currency configured for the catalog.
    pub fn currency(&self) -> Result<Currency> {
        let code = &self.config.catalog.currency;
        Currency::from_code(code).with_context(|| format!("Unsupported currency: {}", code))
    }

    /// Load the configured catalog, or the sample catalog when none is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(file) = &self.config.catalog.data_file else {
            return Ok(Catalog::sample());
        };

        let path = self.resolve_path(file);
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Catalog::from_json(&json, self.currency()?)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))?;

        self.output
            .debug(&format!("Loaded {} products from {}", catalog.len(), path.display()));
        Ok(catalog)
    }

    /// Build the cart client from config and the environment.
    pub fn cart_client(&self) -> Result<CartClient> {
        let cart = &self.config.cart;
        let transport = ReqwestTransport::new(Duration::from_secs(cart.timeout_secs))
            .context("Failed to build HTTP client")?;
        let client = FetchClient::new(transport).with_base_url(cart.api_url.clone());
        let credential = Credential::from_env(&cart.token_env);

        Ok(CartClient::new(client, credential).with_token_env(cart.token_env.clone()))
    }
}
