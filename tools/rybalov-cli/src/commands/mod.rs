//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod render;
pub mod replay;
pub mod shop;
pub mod tutorials;

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use rybalov_commerce::learn::TutorialFilter;
use rybalov_storefront::{parse_script, Event, Section};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Section to show (slug or Russian label).
    #[arg(short, long)]
    pub section: Option<Section>,

    /// Tutorial tab: all, video or article.
    #[arg(short, long)]
    pub tab: Option<TutorialFilter>,

    /// Render with the cart sheet open.
    #[arg(long)]
    pub open_cart: bool,

    /// Event script applied before rendering.
    #[arg(long)]
    pub script: Option<String>,

    /// Output file (default: config render.output, else stdout).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show products in this category.
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the tutorials command.
#[derive(Args)]
pub struct TutorialsArgs {
    /// Kind filter: all, video or article.
    #[arg(short, long, default_value = "all")]
    pub kind: TutorialFilter,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Event script, one event per line.
    pub file: String,

    /// Also write the final page to this file.
    #[arg(long)]
    pub render: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Start with the cart sheet open.
    #[arg(long)]
    pub open_cart: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Write rybalov.json instead of a commented rybalov.toml.
        #[arg(long)]
        as_json: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Read and parse an event script.
pub(crate) fn load_script(path: &Path) -> Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script: {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Invalid event script: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rybalov_commerce::ProductId;

    #[test]
    fn test_load_script_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.events");
        std::fs::write(&path, "# warm-up\nadd 4\n\nopen\n").unwrap();

        let events = load_script(&path).unwrap();
        assert_eq!(events, vec![Event::AddToCart(ProductId::new(4)), Event::OpenCart]);
    }

    #[test]
    fn test_load_script_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.events");
        std::fs::write(&path, "add 1\nfly away\n").unwrap();

        let err = format!("{:#}", load_script(&path).unwrap_err());
        assert!(err.contains("line 2"), "{}", err);
    }

    #[test]
    fn test_load_script_missing_file() {
        let err = load_script(Path::new("/nonexistent/rybalov.events")).unwrap_err();
        assert!(err.to_string().contains("Failed to read event script"));
    }
}
