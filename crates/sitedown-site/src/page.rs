//! Page generation.
//!
//! A page is a Markdown document rendered into an HTML template. The
//! template carries `{{ Title }}` and `{{ Content }}` placeholders, and
//! root-relative links are rewritten to the configured base path.

use crate::title::extract_title;
use log::{debug, error, info};
use sitedown_core::{Result, SitedownError};
use sitedown_parser::markdown_to_html;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the rendered document.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Outcome of generating a tree of pages.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages written, in generation order
    pub generated: Vec<PathBuf>,
    /// Per-document failures, each a [`SitedownError::Page`]
    pub failed: Vec<SitedownError>,
}

impl BuildReport {
    /// Whether every document was generated.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render a Markdown document into `template`.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content)
        .replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path));
    Ok(page)
}

/// Generate one page from `from_path` into `dest_path`.
///
/// Errors identify the source document.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<()> {
    let template = fs::read_to_string(template_path)?;
    write_page(from_path, &template, dest_path, base_path)
}

fn write_page(from_path: &Path, template: &str, dest_path: &Path, base_path: &str) -> Result<()> {
    info!(
        "Generating page from {} to {}",
        from_path.display(),
        dest_path.display()
    );
    render_to_file(from_path, template, dest_path, base_path).map_err(|e| e.in_page(from_path))
}

fn render_to_file(
    from_path: &Path,
    template: &str,
    dest_path: &Path,
    base_path: &str,
) -> Result<()> {
    let markdown = fs::read_to_string(from_path)?;
    let page = render_page(&markdown, template, base_path)?;
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest_path, page)?;
    Ok(())
}

/// Generate a page for every `.md` file under `content_dir`.
///
/// The directory structure is mirrored into `dest_dir` with `.html`
/// extensions. A failing document is logged and recorded in the report;
/// with `fail_fast` the first failure is returned as the error instead.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
    fail_fast: bool,
) -> Result<BuildReport> {
    let template = fs::read_to_string(template_path)?;
    let mut report = BuildReport::default();
    walk(
        content_dir,
        &template,
        dest_dir,
        base_path,
        fail_fast,
        &mut report,
    )?;
    Ok(report)
}

fn walk(
    dir: &Path,
    template: &str,
    dest_dir: &Path,
    base_path: &str,
    fail_fast: bool,
    report: &mut BuildReport,
) -> Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);

        if path.is_dir() {
            debug!("Descending into {}", path.display());
            walk(&path, template, &dest, base_path, fail_fast, report)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest.with_extension("html");
            match write_page(&path, template, &dest, base_path) {
                Ok(()) => report.generated.push(dest),
                Err(e) if fail_fast => return Err(e),
                Err(e) => {
                    error!("{}", e);
                    report.failed.push(e);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html><head><title>{{ Title }}</title>\
        <link href=\"/index.css\" rel=\"stylesheet\"></head>\
        <body>{{ Content }}</body></html>";

    #[test]
    fn test_render_page() {
        let page = render_page("# Hello\n\nWorld", TEMPLATE, "/").unwrap();
        assert_eq!(
            page,
            "<html><head><title>Hello</title>\
             <link href=\"/index.css\" rel=\"stylesheet\"></head>\
             <body><div><h1>Hello</h1><p>World</p></div></body></html>"
        );
    }

    #[test]
    fn test_render_page_rewrites_base_path() {
        let md = "# T\n\n[home](/) ![logo](/images/logo.png)";
        let page = render_page(md, TEMPLATE, "/site/").unwrap();
        assert!(page.contains(r#"href="/site/index.css""#));
        assert!(page.contains(r#"<a href="/site/">home</a>"#));
        assert!(page.contains(r#"src="/site/images/logo.png""#));
    }

    #[test]
    fn test_render_page_requires_title() {
        assert!(matches!(
            render_page("no title here", TEMPLATE, "/"),
            Err(SitedownError::NoTitleFound)
        ));
    }

    #[test]
    fn test_generate_page_writes_nested_dest() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("index.md");
        let template = dir.path().join("template.html");
        let dest = dir.path().join("public/nested/index.html");
        fs::write(&src, "# Title\n\n- a\n- b").unwrap();
        fs::write(&template, "{{ Title }}|{{ Content }}").unwrap();

        generate_page(&src, &template, &dest, "/").unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "Title|<div><h1>Title</h1><ul><li>a</li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn test_generate_page_error_names_document() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("broken.md");
        let template = dir.path().join("template.html");
        fs::write(&src, "# Title\n\nan **open marker").unwrap();
        fs::write(&template, "{{ Content }}").unwrap();

        let err = generate_page(&src, &template, &dir.path().join("out.html"), "/").unwrap_err();
        match err {
            SitedownError::Page { path, source } => {
                assert_eq!(path, src);
                assert!(matches!(*source, SitedownError::MalformedInlineMarkup { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn content_tree(root: &Path) -> (PathBuf, PathBuf) {
        let content = root.join("content");
        fs::create_dir_all(content.join("blog/majesty")).unwrap();
        fs::write(content.join("index.md"), "# Home\n\nWelcome").unwrap();
        fs::write(content.join("blog/majesty/index.md"), "# Majesty\n\n_grand_").unwrap();
        fs::write(content.join("blog/broken.md"), "# Broken\n\n`unclosed").unwrap();
        fs::write(content.join("notes.txt"), "not markdown").unwrap();
        let template = root.join("template.html");
        fs::write(&template, "{{ Content }}").unwrap();
        (content, template)
    }

    #[test]
    fn test_generate_pages_recursive_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let (content, template) = content_tree(dir.path());
        let public = dir.path().join("public");

        let report = generate_pages_recursive(&content, &template, &public, "/", false).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].to_string().contains("broken.md"));
        assert_eq!(
            report.generated,
            vec![
                public.join("blog/majesty/index.html"),
                public.join("index.html"),
            ]
        );
        assert_eq!(
            fs::read_to_string(public.join("blog/majesty/index.html")).unwrap(),
            "<div><h1>Majesty</h1><p><i>grand</i></p></div>"
        );
        assert!(!public.join("notes.txt").exists());
        assert!(!public.join("blog/broken.html").exists());
    }

    #[test]
    fn test_generate_pages_recursive_fail_fast() {
        let dir = tempfile::tempdir().unwrap();
        let (content, template) = content_tree(dir.path());
        let public = dir.path().join("public");

        let err = generate_pages_recursive(&content, &template, &public, "/", true).unwrap_err();
        assert!(matches!(err, SitedownError::Page { .. }));
    }
}
