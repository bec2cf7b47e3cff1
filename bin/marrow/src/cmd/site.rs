//! Site command - build a documentation site from a source tree

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use marrow_core::ThemeConfig;
use marrow_generator::{SiteBuilder, SiteStats};

use super::resolve;

/// Run the site command.
pub fn run(cwd: &Path, src: &Path, out: &Path, config: &Path) -> Result<SiteStats> {
    let src_dir = resolve(cwd, src);
    let out_dir = resolve(cwd, out);
    let config_path = resolve(cwd, config);
    tracing::info!(src = %src_dir.display(), out = %out_dir.display(), "Building site");

    if !config_path.exists() {
        bail!(
            "No {} found. Run \"marrow init\" first.",
            config.display()
        );
    }

    let theme = ThemeConfig::load(&config_path).wrap_err("Failed to load configuration")?;
    let stats = SiteBuilder::new(theme, &src_dir, &out_dir)
        .build()
        .wrap_err("Site build failed")?;

    println!();
    println!("  Site built successfully!");
    println!();
    println!("  Pages:    {}", stats.pages);
    println!("  Assets:   {}", stats.assets);
    println!("  Output:   {}", out.display());
    println!();
    println!("  Duration: {}ms", stats.duration_ms);
    println!();

    Ok(stats)
}
