//! RybaLov CLI - drive the fishing storefront from the command line.
//!
//! Commands:
//! - `rybalov render` - Render the storefront page to HTML
//! - `rybalov catalog` - List products
//! - `rybalov tutorials` - List tutorials, optionally by kind
//! - `rybalov replay` - Apply an event script and summarize the cart
//! - `rybalov shop` - Interactive shopping session
//! - `rybalov config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, ConfigArgs, RenderArgs, ReplayArgs, ShopArgs, TutorialsArgs};

/// RybaLov CLI - render and explore the fishing storefront
#[derive(Parser)]
#[command(name = "rybalov")]
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
    /// Render the storefront page
    Render(RenderArgs),

    /// List catalog products
    Catalog(CatalogArgs),

    /// List tutorials
    Tutorials(TutorialsArgs),

    /// Apply an event script to a fresh session
    Replay(ReplayArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    if cli.verbose {
        init_tracing();
    }

    // `config` commands must be able to inspect a broken file.
    let strict = !matches!(cli.command, Commands::Config(_));
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output, strict)?;

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Tutorials(args) => commands::tutorials::run(args, &ctx).await,
        Commands::Replay(args) => commands::replay::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Route `tracing` events from the domain crates to stderr.
///
/// `RUST_LOG` overrides the default filter (cart trace events, CLI debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rybalov_commerce=trace,rybalov=debug,info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
