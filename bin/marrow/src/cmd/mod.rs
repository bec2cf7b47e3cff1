//! Command implementations.
//!
//! Each command takes the working directory explicitly so it can run
//! against any project root.

pub mod add;
pub mod build;
pub mod extract;
pub mod init;
pub mod list;
pub mod site;

use std::path::{Path, PathBuf};

/// Resolve `path` against `cwd` unless it is already absolute.
pub(crate) fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
