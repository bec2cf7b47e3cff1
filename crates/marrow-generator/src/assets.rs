//! Static file copying.
//!
//! Copies stylesheets, scripts and component templates into a project, with
//! skip-if-exists semantics for scaffolded files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

/// Asset copying errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid asset path.
    #[error("invalid asset path: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Outcome of a guarded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written.
    Written,
    /// The file already existed and was left alone.
    Skipped,
}

/// Copies static files between directories, skipping dot-files.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetCopier;

impl AssetCopier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Recursively copy `source_dir` into `dest_dir`.
    ///
    /// Returns the copied paths relative to `source_dir`. A missing source
    /// directory copies nothing.
    pub fn copy_dir(&self, source_dir: &Path, dest_dir: &Path) -> Result<Vec<PathBuf>> {
        info!(
            source = %source_dir.display(),
            dest = %dest_dir.display(),
            "copying assets"
        );

        let mut copied = Vec::new();

        if !source_dir.exists() {
            debug!("source directory does not exist, skipping");
            return Ok(copied);
        }

        self.copy_tree(source_dir, source_dir, dest_dir, &mut copied)?;

        info!(count = copied.len(), "assets copied");
        Ok(copied)
    }

    fn copy_tree(
        &self,
        base_dir: &Path,
        current_dir: &Path,
        dest_base: &Path,
        copied: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let mut entries = fs::read_dir(current_dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();

        for path in entries {
            if path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
            {
                continue;
            }

            if path.is_dir() {
                self.copy_tree(base_dir, &path, dest_base, copied)?;
            } else if path.is_file() {
                let relative = path
                    .strip_prefix(base_dir)
                    .map_err(|_| AssetError::InvalidPath(path.clone()))?;
                let dest_path = dest_base.join(relative);
                Self::copy_file(&path, &dest_path)?;

                debug!(
                    src = %path.display(),
                    dest = %dest_path.display(),
                    "copied asset"
                );
                copied.push(relative.to_path_buf());
            }
        }

        Ok(())
    }

    /// Copy a single file, creating the destination's parent directories.
    pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, dest)?;
        Ok(())
    }

    /// Write `contents` to `dest` unless it exists and `overwrite` is false.
    pub fn write_guarded(dest: &Path, contents: &str, overwrite: bool) -> Result<WriteOutcome> {
        if !overwrite && dest.exists() {
            debug!(path = %dest.display(), "file exists, skipping");
            return Ok(WriteOutcome::Skipped);
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, contents)?;
        Ok(WriteOutcome::Written)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_copy_dir_recursive() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        fs::write(source.path().join("marrow.css"), "body {}").unwrap();
        fs::create_dir_all(source.path().join("vendor")).unwrap();
        fs::write(source.path().join("vendor/reset.css"), "* {}").unwrap();
        fs::write(source.path().join(".DS_Store"), "junk").unwrap();

        let copied = AssetCopier::new()
            .copy_dir(source.path(), dest.path())
            .unwrap();

        assert_eq!(
            copied,
            vec![PathBuf::from("marrow.css"), PathBuf::from("vendor/reset.css")]
        );
        assert!(dest.path().join("vendor/reset.css").exists());
        assert!(!dest.path().join(".DS_Store").exists());
    }

    #[test]
    fn test_copy_dir_missing_source() {
        let dest = TempDir::new().unwrap();

        let copied = AssetCopier::new()
            .copy_dir(Path::new("/nonexistent/css"), dest.path())
            .unwrap();

        assert!(copied.is_empty());
    }

    #[test]
    fn test_copy_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("button.html");
        fs::write(&src, "<button></button>").unwrap();
        let dest = dir.path().join("components/ui/button.html");

        AssetCopier::copy_file(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest).unwrap(), "<button></button>");
    }

    #[test]
    fn test_write_guarded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("marrow.css");

        let first = AssetCopier::write_guarded(&path, "one", false).unwrap();
        let second = AssetCopier::write_guarded(&path, "two", false).unwrap();

        assert_eq!(first, WriteOutcome::Written);
        assert_eq!(second, WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");

        let forced = AssetCopier::write_guarded(&path, "three", true).unwrap();
        assert_eq!(forced, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "three");
    }
}
