//! Page rendering into layouts.
//!
//! A page's front matter selects a layout (`layout: docs`, default `base`)
//! and fills its placeholders. The page body replaces `{{slot}}`.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use marrow_core::{FrontMatter, parse_front_matter};
use regex::{Captures, Regex};
use thiserror::Error;
use tracing::debug;

/// Layout used when the page does not name one.
pub const DEFAULT_LAYOUT: &str = "base";

/// Title used when the page has none.
pub const DEFAULT_TITLE: &str = "Marrow UI";

/// Description used when the page has none.
pub const DEFAULT_DESCRIPTION: &str = "A sleek UI kit built with Tailwind CSS and Alpine.js";

const SLOT: &str = "{{slot}}";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(title|description|activeSection|activeComponent)\}\}")
        .expect("valid placeholder regex")
});

/// Page rendering errors.
#[derive(Debug, Error)]
pub enum PageError {
    /// Layout file does not exist.
    #[error("layout not found: {layout} ({})", .path.display())]
    LayoutNotFound { layout: String, path: PathBuf },

    /// Layout or page file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for page operations.
pub type Result<T> = std::result::Result<T, PageError>;

/// Front matter value for `key`, treating an empty value as absent.
fn field<'a>(meta: &'a FrontMatter, key: &str) -> Option<&'a str> {
    meta.get(key).filter(|v| !v.is_empty())
}

/// Fill a layout's placeholders from front matter and body.
///
/// `{{slot}}` is replaced first, so the remaining placeholders are filled in
/// the body as well as the layout. Those are replaced in one pass: a value
/// is never scanned for another placeholder.
#[must_use]
pub fn fill_layout(layout: &str, meta: &FrontMatter, body: &str) -> String {
    let page = layout.replace(SLOT, body);
    PLACEHOLDER_RE
        .replace_all(&page, |caps: &Captures<'_>| match &caps[1] {
            "title" => field(meta, "title").unwrap_or(DEFAULT_TITLE).to_string(),
            "description" => field(meta, "description")
                .unwrap_or(DEFAULT_DESCRIPTION)
                .to_string(),
            "activeSection" => field(meta, "section").unwrap_or_default().to_string(),
            "activeComponent" => field(meta, "component").unwrap_or_default().to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Renders pages using layouts from a directory of `<name>.html` files.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    layouts_dir: PathBuf,
}

impl PageRenderer {
    /// Create a renderer reading layouts from `layouts_dir`.
    #[must_use]
    pub fn new(layouts_dir: impl Into<PathBuf>) -> Self {
        Self {
            layouts_dir: layouts_dir.into(),
        }
    }

    /// Path of the layout file for `name`.
    #[must_use]
    pub fn layout_path(&self, name: &str) -> PathBuf {
        self.layouts_dir.join(format!("{name}.html"))
    }

    /// Read a layout by name.
    pub fn read_layout(&self, name: &str) -> Result<String> {
        let path = self.layout_path(name);
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                PageError::LayoutNotFound {
                    layout: name.to_string(),
                    path,
                }
            } else {
                PageError::Io { path, source }
            }
        })
    }

    /// Render raw page text.
    pub fn render(&self, raw: &str) -> Result<String> {
        let (meta, body) = parse_front_matter(raw);
        let layout_name = field(&meta, "layout").unwrap_or(DEFAULT_LAYOUT);
        let layout = self.read_layout(layout_name)?;

        debug!(layout = layout_name, fields = meta.len(), "rendering page");
        Ok(fill_layout(&layout, &meta, &body))
    }

    /// Read and render a page file.
    pub fn render_file(&self, page: &Path) -> Result<String> {
        let raw = fs::read_to_string(page).map_err(|source| PageError::Io {
            path: page.to_path_buf(),
            source,
        })?;
        self.render(&raw)
    }
}
