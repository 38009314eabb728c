//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use shop_core::BUNDLED_CONFIG;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "bundled"),
    }

    let store = &ctx.config.store;
    ctx.output.text("");
    ctx.output.text("[store]");
    ctx.output.kv("name", &store.name);
    ctx.output.kv("title", &store.title);
    ctx.output.kv("description", &store.description);
    ctx.output.kv("currency", store.currency.code());
    ctx.output.kv("featured_count", &store.featured_count.to_string());

    let logging = &ctx.config.logging;
    ctx.output.text("");
    ctx.output.text("[logging]");
    ctx.output.kv("level", &logging.level.to_string().to_lowercase());
    ctx.output.kv("format", &format!("{:?}", logging.format).to_lowercase());

    let content = &ctx.config.content;
    ctx.output.text("");
    ctx.output.text("[content]");
    ctx.output.kv("hero", &content.hero.headline.join(" "));
    ctx.output.kv(
        "delivery",
        &content
            .delivery
            .iter()
            .map(|s| s.title.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    );
    ctx.output.kv(
        "contacts",
        &content
            .contacts
            .iter()
            .map(|c| c.title.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, BUNDLED_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let report = ctx.config.validate();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": report.is_valid(),
            "errors": report.errors,
            "warnings": report.warnings,
        }));
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &report.errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &report.warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    let error_count = report.errors.len();
    report
        .into_result()
        .with_context(|| format!("Configuration has {} error(s)", error_count))?;

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
