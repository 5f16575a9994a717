//! Sitedown Site
//!
//! Builds a static site: the public directory is recreated, static assets
//! are copied over, and every Markdown page under the content directory is
//! rendered into the HTML template.
//!
//! # Example
//!
//! ```no_run
//! use sitedown_config::Config;
//! use sitedown_site::build_site;
//!
//! let config = Config::load().unwrap();
//! let report = build_site(&config.site).unwrap();
//! println!("{} pages", report.generated.len());
//! ```

pub mod assets;
pub mod page;
pub mod title;

pub use assets::{clean_dir, copy_static};
pub use page::{generate_page, generate_pages_recursive, render_page, BuildReport};
pub use title::extract_title;

use log::info;
use sitedown_config::SiteConfig;
use sitedown_core::Result;

/// Build the whole site described by `site`.
///
/// Per-page failures end up in the returned report unless
/// [`SiteConfig::fail_fast`] is set.
pub fn build_site(site: &SiteConfig) -> Result<BuildReport> {
    clean_dir(&site.public)?;

    let copied = copy_static(&site.r#static, &site.public)?;
    info!(
        "Copied {} static files from {}",
        copied,
        site.r#static.display()
    );

    let report = generate_pages_recursive(
        &site.content,
        &site.template,
        &site.public,
        &site.base_path,
        site.fail_fast,
    )?;
    info!(
        "Generated {} pages, {} failed",
        report.generated.len(),
        report.failed.len()
    );
    Ok(report)
}
