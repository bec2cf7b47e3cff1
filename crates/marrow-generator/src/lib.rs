//! Marrow Generator Library
//!
//! Text generation for Marrow UI.
//!
//! # Modules
//!
//! - [`theme`] - Theme CSS custom properties from a [`ThemeConfig`](marrow_core::ThemeConfig)
//! - [`template`] - Component template loading and section splitting
//! - [`page`] - Front-matter driven page rendering into layouts
//! - [`assets`] - Static file copying
//! - [`site`] - Whole-site build orchestration
//! - [`extract`] - Component template extraction from documentation pages

pub mod assets;
pub mod extract;
pub mod page;
pub mod site;
pub mod template;
pub mod theme;

pub use assets::{AssetCopier, AssetError, WriteOutcome};
pub use extract::{ExtractError, extract_templates, unescape_html};
pub use page::{PageError, PageRenderer};
pub use site::{SiteBuilder, SiteError, SiteStats, THEME_FILE_NAME};
pub use template::{Template, TemplateError, TemplateLoader, split_template};
pub use theme::{Compactness, generate_css, write_theme};
