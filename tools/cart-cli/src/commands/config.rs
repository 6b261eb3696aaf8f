//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
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
    ctx.output.line("[storage]");
    ctx.output
        .kv("dir", &ctx.storage_dir().display().to_string());
    ctx.output.kv("key", &ctx.config.storage.key);

    ctx.output.line("");
    ctx.output.line("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(none)"),
    }

    ctx.output.line("");
    ctx.output.line("[display]");
    ctx.output.kv("currency_symbol", ctx.currency_symbol());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join("cart.toml");

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())?;
    ctx.output
        .success(&format!("Created config file: {}", path.display()));

    Ok(())
}
