//! Extract command - rebuild component templates from documentation pages

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use marrow_generator::extract_templates;

use super::resolve;

/// Run the extract command.
pub fn run(cwd: &Path, pages: &Path, out: &Path) -> Result<usize> {
    let pages_dir = resolve(cwd, pages);
    let out_dir = resolve(cwd, out);

    let count = extract_templates(&pages_dir, &out_dir)
        .wrap_err("Failed to extract component templates")?;

    println!("Extracted {count} component templates to {}/", out.display());
    Ok(count)
}
