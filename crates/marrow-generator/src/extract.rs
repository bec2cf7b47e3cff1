//! Component template extraction from documentation pages.
//!
//! Each component page carries its copy-paste markup in the first
//! `<pre><code>` block. Extraction unescapes that block and writes it as a
//! component template with the standard three-line header.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

/// Base URL used in placeholder templates for pages without a code block.
pub const DOCS_BASE_URL: &str = "https://marrow-ui.dev/docs/components";

/// Dependencies listed in every template header.
pub const REQUIRES_LINE: &str = "<!-- Requires: Tailwind CSS, Alpine.js, marrow.css, marrow.js -->";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^title:\s*(.+)$").expect("valid title regex"));

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^description:\s*(.+)$").expect("valid description regex")
});

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<pre><code>(.*?)</code></pre>").expect("valid code block regex")
});

/// Extraction errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The pages directory could not be listed.
    #[error("failed to read pages directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A page or template could not be read or written.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for extraction.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Replace the HTML entities used in documentation code blocks.
///
/// Replacements run in sequence, so `&amp;lt;` becomes `&lt;`.
#[must_use]
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
}

fn capture_trimmed<'a>(re: &Regex, content: &'a str) -> Option<&'a str> {
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Build the template file contents for one documentation page.
#[must_use]
pub fn template_from_page(name: &str, content: &str) -> String {
    let title = capture_trimmed(&TITLE_RE, content).unwrap_or(name);
    let description = capture_trimmed(&DESCRIPTION_RE, content)
        .filter(|d| !d.is_empty())
        .map_or_else(|| format!("{title} component"), str::to_string);

    let code = CODE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape_html(m.as_str()).trim().to_string())
        .unwrap_or_default();

    let body = if code.is_empty() {
        format!("<!-- See documentation: {DOCS_BASE_URL}/{name} -->")
    } else {
        code
    };

    format!("<!-- Marrow UI: {title} -->\n<!-- {description} -->\n{REQUIRES_LINE}\n\n{body}\n")
}

/// Extract a template from every `*.html` page in `pages_dir` into `dest_dir`.
///
/// Returns the number of templates written. Existing templates are
/// overwritten.
pub fn extract_templates(pages_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let read_dir = |source| ExtractError::ReadDir {
        path: pages_dir.to_path_buf(),
        source,
    };

    let mut pages = fs::read_dir(pages_dir)
        .map_err(read_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_dir)?;
    pages.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "html"));
    pages.sort();

    fs::create_dir_all(dest_dir).map_err(|source| ExtractError::Io {
        path: dest_dir.to_path_buf(),
        source,
    })?;

    for page in &pages {
        let Some(name) = page.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let content = fs::read_to_string(page).map_err(|source| ExtractError::Io {
            path: page.clone(),
            source,
        })?;

        let dest = dest_dir.join(format!("{name}.html"));
        fs::write(&dest, template_from_page(&name, &content)).map_err(|source| {
            ExtractError::Io {
                path: dest.clone(),
                source,
            }
        })?;
        debug!(component = %name, "extracted template");
    }

    info!(
        count = pages.len(),
        dest = %dest_dir.display(),
        "extracted component templates"
    );
    Ok(pages.len())
}
