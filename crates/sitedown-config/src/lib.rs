//! Sitedown Config
//!
//! This crate handles configuration loading and management
//! for sitedown, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is layered. Each source is read as a [`ConfigLayer`] and
//! the settings it names override earlier ones:
//! 1. Built-in defaults
//! 2. The platform config file, e.g. `~/.config/sitedown/config.toml` on Linux
//! 3. A `sitedown.toml` project file in the working directory
//! 4. An override file or inline TOML string passed on the command line
//!
//! # Example
//!
//! ```no_run
//! use sitedown_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod site;

pub use site::{SiteConfig, SiteLayer};

use serde::{Deserialize, Serialize};
use sitedown_core::{Result, SitedownError};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file.
pub const PROJECT_FILE: &str = "sitedown.toml";

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[site]
BasePath = "/"
Content  = "./content"
Static   = "./static"
Public   = "./public"
Template = "./template.html"
FailFast = false
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site layout configuration
    #[serde(default)]
    pub site: SiteConfig,
}

/// Settings named by one configuration source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub site: SiteLayer,
}

impl ConfigLayer {
    /// Parse a layer from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_config::ConfigLayer;
    /// let layer = ConfigLayer::from_toml("[site]\nFailFast = false").unwrap();
    /// assert_eq!(layer.site.fail_fast, Some(false));
    /// assert_eq!(layer.site.public, None);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SitedownError::Config(format!("Parse error: {}", e)))
    }

    /// Load a layer from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            SitedownError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[site]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sitedown")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_config::Config;
    /// let config = Config::from_toml("[site]\nBasePath = \"/docs/\"").unwrap();
    /// assert_eq!(config.site.base_path, "/docs/");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SitedownError::Config(format!("Parse error: {}", e)))
    }

    /// Load configuration from the platform path and the project file.
    ///
    /// Missing files are skipped; with neither present the defaults are
    /// returned.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                config.merge(&ConfigLayer::load_from(&config_path)?);
            }
        }

        let project = Path::new(PROJECT_FILE);
        if project.exists() {
            config.merge(&ConfigLayer::load_from(project)?);
        }

        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            SitedownError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load configuration with an optional override file or string.
    ///
    /// If `override_config` names an existing file it is loaded and merged,
    /// otherwise it is parsed as inline TOML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sitedown_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[site]\nFailFast = true")).unwrap();
    /// assert!(config.site.fail_fast);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
        }

        Ok(config)
    }

    /// Interpret an override as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<ConfigLayer> {
        let override_path = Path::new(override_str);
        if override_path.is_file() {
            ConfigLayer::load_from(override_path)
        } else {
            toml::from_str(override_str)
                .map_err(|e| SitedownError::Config(format!("Override parse error: {}", e)))
        }
    }

    /// Apply a layer on top of this config.
    ///
    /// Every setting the layer names takes precedence.
    ///
    /// # Example
    ///
    /// ```
    /// use sitedown_config::{Config, ConfigLayer};
    ///
    /// let mut base = Config::default();
    /// let layer = ConfigLayer::from_toml("[site]\nPublic = \"docs\"").unwrap();
    ///
    /// base.merge(&layer);
    /// assert_eq!(base.site.public.to_str(), Some("docs"));
    /// ```
    pub fn merge(&mut self, layer: &ConfigLayer) {
        self.site.merge(&layer.site);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| SitedownError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
