//! Folio configuration file handling

use anyhow::{Context, Result};
use folio_site::SiteConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level Folio configuration (folio.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct FolioConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub dev: DevConfig,
    #[serde(default)]
    pub page: SiteConfig,
}

/// Project metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Build configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Rendered document path (relative to project root)
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_output() -> String {
    "dist/index.html".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

/// Development loop configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct DevConfig {
    /// Watch additional files or directories
    #[serde(default)]
    pub watch: Vec<String>,
    /// Seconds between date-label refreshes
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_refresh_secs() -> u64 {
    60
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            watch: Vec::new(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

impl FolioConfig {
    /// Load configuration from a directory (looks for folio.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = config_path(path);

        if !config_path.exists() {
            anyhow::bail!(
                "No folio.toml found in {}. Run `folio init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create a new configuration with the given project name
    pub fn new(name: &str) -> Self {
        Self {
            project: ProjectConfig {
                name: name.to_string(),
                description: None,
            },
            build: BuildConfig::default(),
            dev: DevConfig::default(),
            page: SiteConfig::default(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Output path resolved against the project root
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.build.output)
    }
}

/// `folio.toml` inside `path`, or `path` itself when it names a file
pub fn config_path(path: &Path) -> PathBuf {
    if path.is_file() {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_site::Variant;
    use folio_theme::ColorScheme;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_config_fills_defaults() {
        let config = FolioConfig::from_toml_str("[project]\nname = \"folio\"\n").unwrap();
        assert_eq!(config.project.name, "folio");
        assert_eq!(config.build.output, "dist/index.html");
        assert_eq!(config.dev.refresh_secs, 60);
        assert_eq!(config.page, SiteConfig::default());
    }

    #[test]
    fn page_table_is_read() {
        let config = FolioConfig::from_toml_str(
            r#"
[project]
name = "folio"

[page]
variant = "classic"
default_scheme = "dark"
marquee_duration_ms = 15000
"#,
        )
        .unwrap();
        assert_eq!(config.page.variant, Variant::Classic);
        assert_eq!(config.page.default_scheme, ColorScheme::Dark);
        assert_eq!(config.page.marquee_duration_ms, 15_000);
        assert_eq!(config.page.threshold(), 20.0);
    }

    #[test]
    fn generated_config_round_trips() {
        let text = FolioConfig::new("portfolio").to_toml().unwrap();
        let parsed = FolioConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.project.name, "portfolio");
        assert_eq!(parsed.page, SiteConfig::default());
    }

    #[test]
    fn project_section_is_required() {
        assert!(FolioConfig::from_toml_str("[page]\nvariant = \"glass\"\n").is_err());
    }
}
