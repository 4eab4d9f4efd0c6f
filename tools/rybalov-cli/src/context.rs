//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rybalov_observability::{LogLevel, SessionId, StructuredLogger};
use rybalov_storefront::Storefront;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["rybalov.toml", ".rybalov.toml", "rybalov.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    ///
    /// With `strict`, a config whose labels do not parse is an error.
    pub fn load(config_path: Option<&str>, output: Output, strict: bool) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some(path) => {
                    output.debug(&format!("Using config {}", path.display()));
                    (CliConfig::load(&path)?, Some(path))
                }
                None => (CliConfig::default(), None),
            }
        };

        if strict {
            config.ensure_valid().with_context(|| match &config_path {
                Some(path) => format!("Config file {}", path.display()),
                None => "Built-in config".to_string(),
            })?;
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Session logger configured from `[log]`; verbose mode lowers the level to debug.
    pub fn logger(&self) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            self.config.log.level.min(LogLevel::Debug)
        } else {
            self.config.log.level
        };

        StructuredLogger::new(SessionId::generate())
            .with_workload("rybalov")
            .with_min_level(level)
            .with_format(self.config.log.format)
    }

    /// A fresh storefront session starting from the configured section and tab.
    pub fn storefront(&self) -> Result<Storefront> {
        let section = self.config.default_section()?;
        let tab = self.config.default_tab()?;
        Ok(Storefront::new(self.logger())
            .with_section(section)
            .with_tab(tab))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file in the directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
