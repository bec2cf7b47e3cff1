//! Build command - regenerate the theme stylesheet

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};
use marrow_core::ThemeConfig;
use marrow_generator::write_theme;

use super::resolve;

/// Run the build command.
///
/// Returns the path of the written stylesheet.
pub fn run(cwd: &Path, config: &Path, output: &Path) -> Result<PathBuf> {
    let config_path = resolve(cwd, config);
    let output_path = resolve(cwd, output);
    tracing::info!(config = %config_path.display(), output = %output_path.display(), "Building theme");

    if !config_path.exists() {
        let name = config.file_name().map_or_else(
            || config.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        bail!("No {name} found. Run \"marrow init\" first.");
    }

    let theme = ThemeConfig::load(&config_path).wrap_err("Failed to load configuration")?;
    tracing::debug!(?theme, "Loaded configuration");

    write_theme(&theme, &output_path)
        .wrap_err_with(|| format!("Failed to write {}", output_path.display()))?;

    println!();
    println!("  Generated theme CSS → {}", output.display());
    println!();

    Ok(output_path)
}
