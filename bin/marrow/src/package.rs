//! The bundled package: default config, base assets and component templates.
//!
//! ```text
//! package/
//!   marrow.config.toml
//!   css/marrow.css
//!   js/marrow.js
//!   templates/components/*.html
//! ```

use std::path::{Path, PathBuf};

use marrow_core::config::CONFIG_FILE_NAME;
use marrow_generator::{TemplateError, TemplateLoader};

/// Environment variable that overrides the package location.
pub const PACKAGE_DIR_ENV: &str = "MARROW_PACKAGE_DIR";

/// Location of the files `init` and `add` copy from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    root: PathBuf,
}

impl Package {
    /// Use the package at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The package shipped in this repository.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../package"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Default theme configuration.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Base component stylesheet.
    pub fn css_path(&self) -> PathBuf {
        self.root.join("css").join("marrow.css")
    }

    /// Alpine.js component definitions.
    pub fn js_path(&self) -> PathBuf {
        self.root.join("js").join("marrow.js")
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join("templates").join("components")
    }

    pub fn templates(&self) -> TemplateLoader {
        TemplateLoader::new(self.components_dir())
    }

    /// Sorted names of the available components.
    pub fn components(&self) -> Result<Vec<String>, TemplateError> {
        self.templates().available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let package = Package::new("/opt/marrow");

        assert_eq!(package.config_path(), Path::new("/opt/marrow/marrow.config.toml"));
        assert_eq!(package.css_path(), Path::new("/opt/marrow/css/marrow.css"));
        assert_eq!(package.js_path(), Path::new("/opt/marrow/js/marrow.js"));
        assert_eq!(
            package.components_dir(),
            Path::new("/opt/marrow/templates/components")
        );
    }

    #[test]
    fn test_missing_package_has_no_components() {
        let package = Package::new("/nonexistent/marrow");
        assert!(package.components().unwrap().is_empty());
    }

    #[test]
    fn test_bundled_package_lists_components() {
        let package = Package::bundled();
        if !package.root().exists() {
            return;
        }

        let components = package.components().unwrap();
        assert!(components.contains(&"button".to_string()));
        assert!(package.config_path().exists());
    }
}
