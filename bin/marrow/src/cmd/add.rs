//! Add command - copy component templates into a project

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};
use marrow_generator::AssetCopier;

use crate::package::Package;

/// Destination of added components, relative to the project root.
pub const COMPONENTS_DEST: &str = "components/ui";

/// Outcome of an add.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AddReport {
    pub added: Vec<String>,
    pub unknown: Vec<String>,
}

/// Lowercase and trim a requested component name.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Run the add command.
///
/// Unknown names are reported and skipped; the rest of the batch continues.
pub fn run(cwd: &Path, package: &Package, names: &[String], all: bool) -> Result<AddReport> {
    let available = package
        .components()
        .wrap_err("Failed to list component templates")?;

    if available.is_empty() {
        bail!("No component templates found in package.");
    }

    let requested: Vec<String> = if all {
        available.clone()
    } else {
        names.to_vec()
    };

    if requested.is_empty() {
        bail!(
            "Specify component names or use --all:\n    marrow add button card dialog\n    marrow add --all"
        );
    }

    let dest_dir = cwd.join(COMPONENTS_DEST);
    fs::create_dir_all(&dest_dir)
        .wrap_err_with(|| format!("Failed to create {}", dest_dir.display()))?;

    println!();
    println!("  Adding components...");
    println!();

    let templates = package.templates();
    let mut report = AddReport::default();
    for name in &requested {
        let normalized = normalize(name);
        if !available.contains(&normalized) {
            tracing::warn!(component = %normalized, "unknown component");
            println!("  Unknown: {normalized} (skipped)");
            report.unknown.push(normalized);
            continue;
        }

        let dest = dest_dir.join(format!("{normalized}.html"));
        AssetCopier::copy_file(&templates.path_for(&normalized), &dest)
            .wrap_err_with(|| format!("Failed to copy {normalized}"))?;
        println!("  Added: {COMPONENTS_DEST}/{normalized}.html");
        report.added.push(normalized);
    }

    println!();
    println!("  {} component(s) added to {COMPONENTS_DEST}/", report.added.len());
    println!();

    Ok(report)
}
