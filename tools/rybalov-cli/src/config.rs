//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rybalov_commerce::learn::TutorialFilter;
use rybalov_commerce::CommerceError;
use rybalov_observability::{LogFormat, LogLevel};
use rybalov_storefront::{RenderOptions, Section, StorefrontError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store presentation.
    #[serde(default)]
    pub store: StoreConfig,

    /// Render defaults.
    #[serde(default)]
    pub render: RenderConfig,

    /// Session logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
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
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Check that every label in the file names something real.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.store.title.trim().is_empty() {
            errors.push(ConfigError::EmptyTitle);
        }
        if let Err(e) = self.default_section() {
            errors.push(e);
        }
        if let Err(e) = self.default_tab() {
            errors.push(e);
        }
        if let Some(ref output) = self.render.output {
            if output.trim().is_empty() {
                errors.push(ConfigError::EmptyOutput);
            }
        }

        errors
    }

    /// Fail with every problem `validate` finds.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let list: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!(
            "Invalid configuration ({} error(s)): {}. Run `rybalov config validate` for details.",
            errors.len(),
            list.join("; ")
        )
    }

    /// Initial section from `render.section`.
    pub fn default_section(&self) -> Result<Section, ConfigError> {
        self.render
            .section
            .parse()
            .map_err(|e: StorefrontError| ConfigError::Section(e.to_string()))
    }

    /// Initial tutorial tab from `render.tab`.
    pub fn default_tab(&self) -> Result<TutorialFilter, ConfigError> {
        self.render
            .tab
            .parse()
            .map_err(|e: CommerceError| ConfigError::Tab(e.to_string()))
    }

    /// Page options for the renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.store.title.clone(),
            stylesheet: self.store.stylesheet.clone(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// A problem found by `config validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("store.title must not be empty")]
    EmptyTitle,
    #[error("render.section: {0}")]
    Section(String),
    #[error("render.tab: {0}")]
    Tab(String),
    #[error("render.output must not be empty when set")]
    EmptyOutput,
}

/// Store presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// External stylesheet href; built-in styles are inlined when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
}

fn default_title() -> String {
    RenderOptions::default().title
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            stylesheet: None,
        }
    }
}

/// Defaults for `render`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Initial section slug or label.
    #[serde(default = "default_section")]
    pub section: String,

    /// Initial tutorial tab.
    #[serde(default = "default_tab")]
    pub tab: String,

    /// Output path; stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

fn default_section() -> String {
    Section::default().slug().to_string()
}

fn default_tab() -> String {
    TutorialFilter::default().as_str().to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            section: default_section(),
            tab: default_tab(),
            output: None,
        }
    }
}

/// Session log settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level written; `--verbose` lowers it to debug.
    #[serde(default)]
    pub level: LogLevel,

    /// `human` or `json`.
    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default rybalov.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# RybaLov storefront configuration

[store]
title = "{title}"
# stylesheet = "/assets/site.css"

[render]
# home, tackle, techniques or waters (Russian labels work too)
section = "{section}"
# all, video or article
tab = "{tab}"
# output = "index.html"

[log]
level = "info"
format = "human"
"#,
        title = default_title(),
        section = default_section(),
        tab = default_tab(),
    )
}
