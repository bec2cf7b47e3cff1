//! Theme CSS generation.
//!
//! Maps a [`ThemeConfig`] to a stylesheet of `--marrow-*` custom properties:
//! a `:root` block with the light palette plus sizing and typography, and a
//! `.dark` block with the dark palette.

use std::{fs, io, path::Path};

use marrow_core::{ColorPalette, ThemeConfig};
use tracing::info;

/// Prefix of every generated custom property.
pub const VAR_PREFIX: &str = "--marrow-";

const RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("full", "9999px"),
];

const DURATION: &[(&str, &str)] = &[
    ("none", "0ms"),
    ("fast", "100ms"),
    ("base", "150ms"),
    ("slow", "300ms"),
    ("lazy", "500ms"),
];

const SHADOW: &[(&str, &str)] = &[
    ("none", "none"),
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
];

const DEFAULT_RADIUS: &str = "lg";
const DEFAULT_COMPACTNESS: &str = "normal";
const DEFAULT_DURATION: &str = "base";
const DEFAULT_SHADOW: &str = "sm";

/// A density preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compactness {
    pub name: &'static str,
    /// Base font size.
    pub text: &'static str,
    /// Label font size.
    pub text_label: &'static str,
    /// Unitless spacing multiplier.
    pub space: &'static str,
    pub btn_py: &'static str,
    pub btn_px: &'static str,
    pub input_py: &'static str,
    pub input_px: &'static str,
    pub card_p: &'static str,
}

/// All density presets, from densest to loosest.
pub static COMPACTNESS: [Compactness; 5] = [
    Compactness {
        name: "minimal",
        text: "0.75rem",
        text_label: "0.625rem",
        space: "0.7",
        btn_py: "0.25rem",
        btn_px: "0.5rem",
        input_py: "0.25rem",
        input_px: "0.5rem",
        card_p: "0.75rem",
    },
    Compactness {
        name: "compact",
        text: "0.875rem",
        text_label: "0.75rem",
        space: "0.85",
        btn_py: "0.375rem",
        btn_px: "0.75rem",
        input_py: "0.375rem",
        input_px: "0.75rem",
        card_p: "1rem",
    },
    Compactness {
        name: "normal",
        text: "1rem",
        text_label: "0.875rem",
        space: "1",
        btn_py: "0.5rem",
        btn_px: "1rem",
        input_py: "0.5rem",
        input_px: "0.75rem",
        card_p: "1.5rem",
    },
    Compactness {
        name: "relaxed",
        text: "1.125rem",
        text_label: "1rem",
        space: "1.2",
        btn_py: "0.625rem",
        btn_px: "1.25rem",
        input_py: "0.625rem",
        input_px: "1rem",
        card_p: "2rem",
    },
    Compactness {
        name: "spacious",
        text: "1.25rem",
        text_label: "1.125rem",
        space: "1.5",
        btn_py: "0.75rem",
        btn_px: "1.5rem",
        input_py: "0.75rem",
        input_px: "1.25rem",
        card_p: "2.5rem",
    },
];

impl Compactness {
    /// Find a preset by name.
    #[must_use]
    pub fn preset(name: &str) -> Option<&'static Compactness> {
        COMPACTNESS.iter().find(|c| c.name == name)
    }

    /// Resolve a configured name, falling back to the `normal` preset.
    #[must_use]
    pub fn resolve(name: Option<&str>) -> &'static Compactness {
        Self::preset(name.unwrap_or(DEFAULT_COMPACTNESS)).unwrap_or(&COMPACTNESS[2])
    }
}

/// Look `value` up in a preset table; unknown values are raw CSS and pass through.
fn lookup<'a>(table: &'static [(&'static str, &'static str)], value: &'a str) -> &'a str {
    table
        .iter()
        .find(|(name, _)| *name == value)
        .map_or(value, |(_, css)| *css)
}

/// Convert a camelCase key to kebab-case (`primaryForeground` -> `primary-foreground`).
#[must_use]
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

fn palette_vars(palette: &ColorPalette) -> String {
    palette
        .iter()
        .map(|(key, value)| format!("  {VAR_PREFIX}{}: {value};", kebab_case(key)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate the theme stylesheet.
///
/// Output depends only on `config`, so equal configs produce identical text.
#[must_use]
pub fn generate_css(config: &ThemeConfig) -> String {
    let radius = lookup(RADIUS, config.radius.as_deref().unwrap_or(DEFAULT_RADIUS));
    let comp = Compactness::resolve(config.compactness.as_deref());
    let duration = lookup(
        DURATION,
        config
            .transition_duration
            .as_deref()
            .unwrap_or(DEFAULT_DURATION),
    );
    let shadow = lookup(SHADOW, config.shadow.as_deref().unwrap_or(DEFAULT_SHADOW));
    let light = palette_vars(&config.colors.light);
    let dark = palette_vars(&config.colors.dark);
    let heading = &config.fonts.heading;
    let body = &config.fonts.body;

    format!(
        r#"/* Marrow UI – Generated Theme CSS */
/* Do not edit directly. Modify marrow.config.toml and rebuild. */

:root {{
{light}
  --marrow-radius: {radius};
  --marrow-text: {text};
  --marrow-text-label: {text_label};
  --marrow-space-unit: {space};
  --marrow-btn-py: {btn_py};
  --marrow-btn-px: {btn_px};
  --marrow-input-py: {input_py};
  --marrow-input-px: {input_px};
  --marrow-card-p: {card_p};
  --marrow-duration: {duration};
  --marrow-shadow: {shadow};
  --marrow-font-heading: "{heading}", ui-sans-serif, system-ui, sans-serif;
  --marrow-font-body: "{body}", ui-sans-serif, system-ui, sans-serif;
}}

.dark {{
{dark}
}}
"#,
        text = comp.text,
        text_label = comp.text_label,
        space = comp.space,
        btn_py = comp.btn_py,
        btn_px = comp.btn_px,
        input_py = comp.input_py,
        input_px = comp.input_px,
        card_p = comp.card_p,
    )
}

/// Generate the theme stylesheet and write it to `path`.
pub fn write_theme(config: &ThemeConfig, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_css(config))?;
    info!(path = %path.display(), "wrote theme css");
    Ok(())
}
