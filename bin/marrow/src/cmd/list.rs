//! List command - show the available components

use color_eyre::eyre::{Result, WrapErr};

use crate::package::Package;

const COLUMNS: usize = 3;
const COLUMN_WIDTH: usize = 22;

/// Format component names as the listing printed by `marrow list`.
pub fn format_listing(components: &[String]) -> String {
    let mut out = format!("\n  Marrow UI Components ({}):\n\n", components.len());
    for row in components.chunks(COLUMNS) {
        let cells: String = row
            .iter()
            .map(|name| format!("{name:<COLUMN_WIDTH$}"))
            .collect();
        out.push_str("  ");
        out.push_str(&cells);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Run the list command.
pub fn run(package: &Package) -> Result<Vec<String>> {
    let components = package
        .components()
        .wrap_err("Failed to list component templates")?;
    print!("{}", format_listing(&components));
    Ok(components)
}
