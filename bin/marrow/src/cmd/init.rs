//! Init command - scaffold Marrow UI into a project

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use marrow_core::{ThemeConfig, config::CONFIG_FILE_NAME};
use marrow_generator::{AssetCopier, THEME_FILE_NAME, WriteOutcome, generate_css};

use crate::package::Package;

/// Files written by `init`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// Run the init command.
///
/// Writes the default config, base stylesheet, Alpine.js components and the
/// generated theme into `cwd`. Existing files are kept unless `force` is set.
pub fn run(cwd: &Path, package: &Package, force: bool) -> Result<InitReport> {
    tracing::info!(cwd = %cwd.display(), package = %package.root().display(), force, "Initializing");
    println!();
    println!("  Initializing Marrow UI...");
    println!();

    let read = |path: &Path| {
        fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
    };

    let config_path = package.config_path();
    let config = ThemeConfig::load(&config_path).wrap_err("Failed to load bundled config")?;

    let files = [
        (CONFIG_FILE_NAME, read(&config_path)?),
        ("marrow.css", read(&package.css_path())?),
        ("marrow.js", read(&package.js_path())?),
        (THEME_FILE_NAME, generate_css(&config)),
    ];

    let mut report = InitReport::default();
    for (name, contents) in files {
        let dest = cwd.join(name);
        let outcome = AssetCopier::write_guarded(&dest, &contents, force)
            .wrap_err_with(|| format!("Failed to write {}", dest.display()))?;
        match outcome {
            WriteOutcome::Written => {
                println!("  Created: {name}");
                report.created.push(name.to_string());
            }
            WriteOutcome::Skipped => {
                println!("  Skipped (exists): {name}");
                report.skipped.push(name.to_string());
            }
        }
    }

    println!(
        r#"
  Done! Add these to your HTML <head>:

  <!-- Marrow UI -->
  <link rel="stylesheet" href="./{THEME_FILE_NAME}">
  <link rel="stylesheet" href="./marrow.css">
  <script src="./marrow.js"></script>

  <!-- Tailwind CSS -->
  <script src="https://cdn.tailwindcss.com"></script>

  <!-- Alpine.js -->
  <script defer src="https://cdn.jsdelivr.net/npm/alpinejs@3.x.x/dist/cdn.min.js"></script>

  Then customize {CONFIG_FILE_NAME} and run:
    marrow build

  Add components:
    marrow add button card dialog
"#
    );

    Ok(report)
}
