//! Site build orchestration.
//!
//! Builds a documentation site from a source tree:
//!
//! ```text
//! src/
//!   css/       copied to out/css/
//!   js/        copied to out/js/
//!   layouts/   page layouts (base.html, ...)
//!   pages/     rendered to out/ keeping relative paths
//! ```
//!
//! The theme stylesheet is generated into `out/css/marrow-theme.css`.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use marrow_core::ThemeConfig;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    assets::{AssetCopier, AssetError},
    page::{PageError, PageRenderer},
    theme::write_theme,
};

/// Name of the generated theme stylesheet.
pub const THEME_FILE_NAME: &str = "marrow-theme.css";

/// Site build errors.
#[derive(Debug, Error)]
pub enum SiteError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset copy error.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// Page rendering error.
    #[error("page error in {}: {source}", .path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: PageError,
    },

    /// Directory walk error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The pages directory is missing.
    #[error("pages directory not found: {}", .0.display())]
    MissingPages(PathBuf),
}

/// Result type for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteStats {
    /// Number of pages rendered.
    pub pages: usize,

    /// Number of static files copied.
    pub assets: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Builds a site from a source tree.
#[derive(Debug)]
pub struct SiteBuilder {
    config: ThemeConfig,
    src_dir: PathBuf,
    out_dir: PathBuf,
}

impl SiteBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: ThemeConfig, src_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            src_dir: src_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Execute the full build.
    pub fn build(&self) -> Result<SiteStats> {
        let start = Instant::now();
        let mut stats = SiteStats::default();

        info!(
            src = %self.src_dir.display(),
            output = %self.out_dir.display(),
            "starting site build"
        );

        let pages_dir = self.src_dir.join("pages");
        if !pages_dir.is_dir() {
            return Err(SiteError::MissingPages(pages_dir));
        }

        self.clean_output()?;

        write_theme(&self.config, &self.out_dir.join("css").join(THEME_FILE_NAME))?;

        let copier = AssetCopier::new();
        for dir in ["css", "js"] {
            let copied = copier.copy_dir(&self.src_dir.join(dir), &self.out_dir.join(dir))?;
            stats.assets += copied.len();
        }

        stats.pages = self.render_pages(&pages_dir)?;
        stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            pages = stats.pages,
            assets = stats.assets,
            duration_ms = stats.duration_ms,
            "site build complete"
        );

        Ok(stats)
    }

    fn clean_output(&self) -> Result<()> {
        if self.out_dir.exists() {
            debug!(dir = %self.out_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.out_dir)?;
        }
        fs::create_dir_all(&self.out_dir)?;
        Ok(())
    }

    fn render_pages(&self, pages_dir: &Path) -> Result<usize> {
        let renderer = PageRenderer::new(self.src_dir.join("layouts"));
        let mut count = 0;

        for entry in walkdir::WalkDir::new(pages_dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "html") {
                continue;
            }

            let html = renderer.render_file(path).map_err(|source| SiteError::Page {
                path: path.to_path_buf(),
                source,
            })?;

            let relative = path.strip_prefix(pages_dir).unwrap_or(path);
            let output_path = self.out_dir.join(relative);
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;

            debug!(path = %output_path.display(), "wrote page");
            count += 1;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use marrow_core::{Colors, Fonts};
    use tempfile::TempDir;

    use super::*;

    fn config() -> ThemeConfig {
        ThemeConfig {
            theme: "dark".to_string(),
            colors: Colors {
                light: [("primary".to_string(), "220 90% 56%".to_string())]
                    .into_iter()
                    .collect(),
                dark: [("primary".to_string(), "224 76% 48%".to_string())]
                    .into_iter()
                    .collect(),
            },
            radius: None,
            compactness: None,
            fonts: Fonts {
                heading: "Inter".to_string(),
                body: "Inter".to_string(),
            },
            menu_accent: "subtle".to_string(),
            icon_library: "lucide".to_string(),
            transition_duration: None,
            shadow: None,
        }
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_build_site() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let out_dir = out.path().join("dist");

        write(src.path(), "layouts/base.html", "<title>{{title}}</title>{{slot}}");
        write(src.path(), "css/marrow.css", ".mw-btn {}");
        write(src.path(), "js/marrow.js", "// alpine");
        write(src.path(), "pages/index.html", "---\ntitle: Home\n---\n<h1>Hi</h1>");
        write(
            src.path(),
            "pages/docs/components/button.html",
            "---\ntitle: Button\n---\n<button></button>",
        );
        write(src.path(), "pages/notes.txt", "ignored");
        fs::create_dir_all(&out_dir).unwrap();
        fs::write(out_dir.join("stale.html"), "old").unwrap();

        let stats = SiteBuilder::new(config(), src.path(), &out_dir).build().unwrap();

        assert_eq!(stats.pages, 2);
        assert_eq!(stats.assets, 2);
        assert_eq!(
            fs::read_to_string(out_dir.join("index.html")).unwrap(),
            "<title>Home</title><h1>Hi</h1>"
        );
        assert_eq!(
            fs::read_to_string(out_dir.join("docs/components/button.html")).unwrap(),
            "<title>Button</title><button></button>"
        );
        assert!(out_dir.join("css/marrow.css").exists());
        assert!(out_dir.join("js/marrow.js").exists());
        assert!(!out_dir.join("stale.html").exists());
        assert!(!out_dir.join("notes.txt").exists());

        let theme = fs::read_to_string(out_dir.join("css").join(THEME_FILE_NAME)).unwrap();
        assert!(theme.contains("--marrow-primary: 224 76% 48%;"));
    }

    #[test]
    fn test_missing_pages_dir() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let err = SiteBuilder::new(config(), src.path(), out.path().join("dist"))
            .build()
            .unwrap_err();

        assert!(matches!(err, SiteError::MissingPages(_)));
        assert!(err.to_string().contains("pages"));
    }

    #[test]
    fn test_missing_layout_aborts() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write(src.path(), "pages/index.html", "---\nlayout: landing\n---\nx");

        let err = SiteBuilder::new(config(), src.path(), out.path().join("dist"))
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            SiteError::Page {
                source: PageError::LayoutNotFound { .. },
                ..
            }
        ));
    }
}
