//! Site layout configuration.
//!
//! This module contains the `SiteConfig` struct which holds the paths and
//! build options used when generating a site, and `SiteLayer`, the subset of
//! those settings one configuration source actually sets.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site layout and build options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteConfig {
    /// Prefix substituted for root-relative `href="/` and `src="/` links.
    /// Default: "/"
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Directory holding the Markdown content tree.
    /// Default: ./content
    #[serde(default = "default_content")]
    pub content: PathBuf,

    /// Directory of static assets copied verbatim.
    /// Default: ./static
    #[serde(default = "default_static")]
    pub r#static: PathBuf,

    /// Output directory, removed and recreated on every build.
    /// Default: ./public
    #[serde(default = "default_public")]
    pub public: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    /// Default: ./template.html
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Abort the build on the first page that fails.
    /// Default: false
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            content: default_content(),
            r#static: default_static(),
            public: default_public(),
            template: default_template(),
            fail_fast: false,
        }
    }
}

impl SiteConfig {
    /// Apply the settings present in `layer`.
    ///
    /// Settings the layer leaves out keep their current value; settings it
    /// names win, even when they equal the defaults.
    pub fn merge(&mut self, layer: &SiteLayer) {
        if let Some(ref base_path) = layer.base_path {
            self.base_path.clone_from(base_path);
        }
        if let Some(ref content) = layer.content {
            self.content.clone_from(content);
        }
        if let Some(ref r#static) = layer.r#static {
            self.r#static.clone_from(r#static);
        }
        if let Some(ref public) = layer.public {
            self.public.clone_from(public);
        }
        if let Some(ref template) = layer.template {
            self.template.clone_from(template);
        }
        if let Some(fail_fast) = layer.fail_fast {
            self.fail_fast = fail_fast;
        }
    }
}

/// Site settings from a single configuration source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SiteLayer {
    pub base_path: Option<String>,
    pub content: Option<PathBuf>,
    pub r#static: Option<PathBuf>,
    pub public: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub fail_fast: Option<bool>,
}

fn default_base_path() -> String {
    "/".to_string()
}

fn default_content() -> PathBuf {
    PathBuf::from("./content")
}

fn default_static() -> PathBuf {
    PathBuf::from("./static")
}

fn default_public() -> PathBuf {
    PathBuf::from("./public")
}

fn default_template() -> PathBuf {
    PathBuf::from("./template.html")
}
