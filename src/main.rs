//! Sitedown - a small static-site generator for Markdown pages.
//!
//! This binary provides the CLI interface: it either builds a whole site
//! or renders individual Markdown files to HTML on stdout.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use sitedown_config::Config;
use sitedown_core::{Result, SitedownError};
use sitedown_parser::markdown_to_html;
use sitedown_site::build_site;
use std::fs;
use std::io::{self, Write};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Sitedown v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    env_logger::Builder::new()
        .filter_level(parse_level(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Main application logic. Returns whether every document succeeded.
fn run(cli: &Cli) -> Result<bool> {
    if cli.should_build() {
        build(cli)
    } else {
        render_files(cli, &mut io::stdout().lock())
    }
}

/// Load configuration and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    cli.apply_overrides(&mut config.site);
    debug!("Loaded config: {:?}", config);
    Ok(config)
}

/// Build the configured site.
fn build(cli: &Cli) -> Result<bool> {
    let config = load_config(cli)?;
    let report = build_site(&config.site)?;

    if !report.is_success() {
        error!(
            "{} of {} pages failed",
            report.failed.len(),
            report.failed.len() + report.generated.len()
        );
    }
    Ok(report.is_success())
}

/// Render each input file to HTML on `out`, one document per line.
///
/// A failing file is reported and skipped.
fn render_files<W: Write>(cli: &Cli, out: &mut W) -> Result<bool> {
    let mut ok = true;

    for path in &cli.files {
        info!("Processing file: {}", path.display());

        let rendered = fs::read_to_string(path)
            .map_err(SitedownError::from)
            .and_then(|markdown| markdown_to_html(&markdown));

        match rendered {
            Ok(html) => writeln!(out, "{}", html)?,
            Err(e) => {
                error!("{}", e.in_page(path));
                ok = false;
            }
        }
    }

    out.flush()?;
    Ok(ok)
}
