//! Marrow Core Library
//!
//! Theme configuration, front-matter parsing, and error handling shared by the
//! Marrow UI generator and CLI.

pub mod config;
pub mod error;
pub mod frontmatter;

pub use config::{ColorPalette, Colors, Fonts, ThemeConfig};
pub use error::{CoreError, Result};
pub use frontmatter::{FrontMatter, parse_front_matter};
