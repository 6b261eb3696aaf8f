//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cart_core::cart::DEFAULT_CART_KEY;
use cart_core::price::DEFAULT_CURRENCY_SYMBOL;
use serde::{Deserialize, Serialize};

/// File names searched for when no `--config` is given.
pub const CONFIG_NAMES: &[&str] = &["cart.toml", ".cart.toml", "cart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Product catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the cart slot. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Slot key the cart is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_key(),
        }
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a TOML or JSON product list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol prefixed to prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Generate a starter config file.
pub fn generate_default_config() -> String {
    r#"# Storefront cart configuration

[storage]
# Directory holding the cart slot (default: ~/.local/share/storefront-cart)
# dir = ".cart"
key = "cart"

[catalog]
# Product list used by `cart products` and `cart add <id>`
# path = "catalog.toml"

[display]
currency_symbol = "$"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.storage.key, "cart");
        assert_eq!(config.display.currency_symbol, "$");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
[storage]
dir = "/tmp/cart"

[display]
currency_symbol = "€"
"#,
        )
        .unwrap();
        assert_eq!(config.storage.dir, Some(PathBuf::from("/tmp/cart")));
        assert_eq!(config.storage.key, "cart");
        assert_eq!(config.display.currency_symbol, "€");
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let mut config = CliConfig::default();
        config.storage.key = "wishlist".to_string();

        config.save(&path).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.toml");
        let mut config = CliConfig::default();
        config.catalog.path = Some(PathBuf::from("catalog.toml"));

        config.save(&path).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }
}
