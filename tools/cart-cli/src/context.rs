//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cart_cache::{Cache, FileBackend};
use cart_core::catalog::Catalog;
use cart_core::{CartStore, CartView};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;
use crate::terminal::TerminalView;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(path.to_path_buf())),
            None => match Self::find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find a config file in the working directory or its ancestors.
    fn find_config(start: &Path) -> Option<PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
        })
    }

    /// Directory the cart slot lives in.
    pub fn storage_dir(&self) -> PathBuf {
        match &self.config.storage.dir {
            Some(dir) => self.resolve_path(dir),
            None => data_dir().join("storefront-cart"),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.display.currency_symbol
    }

    /// Open the persisted cart with the given view attached.
    pub fn open_store_with<V: CartView>(&self, view: V) -> Result<CartStore<FileBackend, V>> {
        let dir = self.storage_dir();
        self.output
            .debug(&format!("Cart storage: {}", dir.display()));
        let cache = Cache::open_dir(&dir)
            .with_context(|| format!("Failed to open cart storage at {}", dir.display()))?;
        let store = CartStore::open_with_key(cache, self.config.storage.key.clone(), view)?;
        Ok(store)
    }

    /// Open the persisted cart, rendering to the terminal.
    pub fn open_store(&self) -> Result<CartStore<FileBackend, TerminalView>> {
        self.open_store_with(TerminalView::new(
            self.output.clone(),
            self.currency_symbol(),
        ))
    }

    /// Load the configured product catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let path = self
            .config
            .catalog
            .path
            .as_ref()
            .map(|p| self.resolve_path(p))
            .context("No catalog configured; set [catalog] path in cart.toml")?;

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog: Catalog = if path.extension().and_then(|e| e.to_str()) == Some("json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))?
        };
        tracing::debug!(path = %path.display(), products = catalog.products.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    }
}
