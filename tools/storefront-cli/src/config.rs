//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::view::{SortKey, DEFAULT_PAGE_SIZE};
use storefront_data::DEFAULT_TOKEN_ENV;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog source and listing defaults.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart service connection.
    #[serde(default)]
    pub cart: CartConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Where products come from and how the listing starts out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON product file; the built-in sample catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    /// Products per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Sort applied when none is given.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Currency code for prices in the data file.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            page_size: default_page_size(),
            default_sort: SortKey::default(),
            currency: default_currency(),
        }
    }
}

/// Cart service settings. The token itself is never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// Base URL of the cart API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Environment variable holding the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
# data_file = "products.json"
page_size = {page_size}
default_sort = "popularity"
currency = "USD"

[cart]
api_url = "http://localhost:8080/api"
# The bearer token is read from this environment variable.
token_env = "{token_env}"
timeout_secs = 10
"#,
        page_size = DEFAULT_PAGE_SIZE,
        token_env = DEFAULT_TOKEN_ENV,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.catalog.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.catalog.default_sort, SortKey::Popularity);
        assert_eq!(config.cart.token_env, DEFAULT_TOKEN_ENV);
        assert!(config.catalog.data_file.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
[catalog]
default_sort = "price-desc"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.default_sort, SortKey::PriceDesc);
        assert_eq!(config.catalog.currency, "USD");
        assert_eq!(config.cart.timeout_secs, 10);
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"cart": {"api_url": "https://shop.example.com"}}"#).unwrap();
        assert_eq!(config.cart.api_url, "https://shop.example.com");
        assert_eq!(config.catalog.page_size, DEFAULT_PAGE_SIZE);
    }
}
