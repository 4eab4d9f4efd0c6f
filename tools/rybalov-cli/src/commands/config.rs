//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use rybalov_observability::LogFormat;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force, as_json } => init_config(force, as_json, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("title", &ctx.config.store.title);
    if let Some(ref stylesheet) = ctx.config.store.stylesheet {
        ctx.output.kv("stylesheet", stylesheet);
    }

    ctx.output.info("");
    ctx.output.info("[render]");
    ctx.output.kv("section", &ctx.config.render.section);
    ctx.output.kv("tab", &ctx.config.render.tab);
    if let Some(ref output) = ctx.config.render.output {
        ctx.output.kv("output", output);
    }

    ctx.output.info("");
    ctx.output.info("[log]");
    ctx.output
        .kv("level", &ctx.config.log.level.to_string().to_lowercase());
    ctx.output.kv(
        "format",
        match ctx.config.log.format {
            LogFormat::Json => "json",
            LogFormat::Human => "human",
        },
    );

    Ok(())
}

async fn init_config(force: bool, as_json: bool, ctx: &Context) -> Result<()> {
    let name = if as_json { CONFIG_NAMES[2] } else { CONFIG_NAMES[0] };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if as_json {
        CliConfig::default().save(&config_path)?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    if ctx.config_path.is_none() {
        ctx.output
            .warn("No config file found; checking built-in defaults");
    }

    let errors = ctx.config.validate();
    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    bail!("Configuration has {} error(s)", errors.len());
}
