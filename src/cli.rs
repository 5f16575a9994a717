//! Command-line interface for Sitedown.

use clap::Parser;
use sitedown_config::SiteConfig;
use std::path::PathBuf;

/// Sitedown - turn a tree of Markdown pages into a static HTML site.
///
/// Without arguments the site is built from the configured content,
/// static, and template paths. Given files, each is rendered to HTML on
/// stdout instead.
#[derive(Parser, Debug)]
#[command(
    name = "sitedown",
    author = "Sitedown Contributors",
    version,
    about = "A small static-site generator for Markdown pages",
    after_help = "Examples:\n  \
                  sitedown\n  \
                  sitedown -b /my-repo/ --public docs\n  \
                  sitedown content/index.md\n  \
                  sitedown -c '[site]\nFailFast = true'"
)]
pub struct Cli {
    /// Markdown files to render to stdout (builds the site if none are given)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Base path substituted for root-relative links (e.g. "/my-repo/")
    #[arg(short = 'b', long = "base-path")]
    pub base_path: Option<String>,

    /// Directory holding the Markdown content
    #[arg(long = "content", value_name = "DIR")]
    pub content: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static", value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long = "public", value_name = "DIR")]
    pub public: Option<PathBuf>,

    /// HTML template file
    #[arg(long = "template", value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Stop at the first page that fails to generate
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should build the site rather than render files.
    pub fn should_build(&self) -> bool {
        self.files.is_empty()
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, site: &mut SiteConfig) {
        if let Some(ref base_path) = self.base_path {
            site.base_path.clone_from(base_path);
        }
        if let Some(ref content) = self.content {
            site.content.clone_from(content);
        }
        if let Some(ref static_dir) = self.static_dir {
            site.r#static.clone_from(static_dir);
        }
        if let Some(ref public) = self.public {
            site.public.clone_from(public);
        }
        if let Some(ref template) = self.template {
            site.template.clone_from(template);
        }
        if self.fail_fast {
            site.fail_fast = true;
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    use sitedown_config::{Config, PROJECT_FILE};

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
    println!("  project               {}", PROJECT_FILE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["sitedown"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.log_level, "warn");
        assert!(cli.should_build());
        assert!(!cli.fail_fast);
    }

    #[test]
    fn test_cli_parse_with_files() {
        let cli = Cli::parse_from(["sitedown", "a.md", "b.md"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
        assert!(!cli.should_build());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "sitedown",
            "-l",
            "debug",
            "-b",
            "/repo/",
            "--public",
            "docs",
            "--static",
            "assets",
            "--fail-fast",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.base_path.as_deref(), Some("/repo/"));
        assert_eq!(cli.public, Some(PathBuf::from("docs")));
        assert_eq!(cli.static_dir, Some(PathBuf::from("assets")));
        assert!(cli.fail_fast);
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from(["sitedown", "-b", "/repo/", "--template", "t.html"]);
        let mut site = SiteConfig::default();
        cli.apply_overrides(&mut site);

        assert_eq!(site.base_path, "/repo/");
        assert_eq!(site.template, PathBuf::from("t.html"));
        assert_eq!(site.content, PathBuf::from("./content"));
        assert!(!site.fail_fast);
    }
}
