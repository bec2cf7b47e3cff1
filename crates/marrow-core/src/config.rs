//! Theme configuration management.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Conventional file name of the theme configuration.
pub const CONFIG_FILE_NAME: &str = "marrow.config.toml";

/// Prefix of environment overrides (`MARROW__MENUACCENT=bold`).
pub const ENV_PREFIX: &str = "MARROW";

/// Top-level keys as spelled in the configuration file.
const FIELD_NAMES: &[&str] = &[
    "theme",
    "colors",
    "radius",
    "compactness",
    "fonts",
    "menuAccent",
    "iconLibrary",
    "transitionDuration",
    "shadow",
];

/// An ordered palette of color name to HSL triple (`"H S% L%"`).
///
/// Order follows the configuration file so generated CSS is stable.
pub type ColorPalette = IndexMap<String, String>;

/// Main theme configuration for Marrow UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Default color scheme ("light" or "dark").
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Light and dark palettes.
    pub colors: Colors,

    /// Border radius preset name or raw CSS length.
    #[serde(default)]
    pub radius: Option<String>,

    /// Density preset name.
    #[serde(default)]
    pub compactness: Option<String>,

    /// Heading and body font families.
    pub fonts: Fonts,

    /// Visual weight of active menu items.
    #[serde(default = "default_menu_accent")]
    pub menu_accent: String,

    /// Iconify icon set used by the templates.
    #[serde(default = "default_icon_library")]
    pub icon_library: String,

    /// Transition preset name or raw CSS duration.
    #[serde(default)]
    pub transition_duration: Option<String>,

    /// Shadow preset name or raw `box-shadow` value.
    #[serde(default)]
    pub shadow: Option<String>,
}

/// Color palettes for both schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    /// Palette applied under `:root`.
    pub light: ColorPalette,

    /// Palette applied under `.dark`.
    pub dark: ColorPalette,
}

/// Font families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_menu_accent() -> String {
    "subtle".to_string()
}

fn default_icon_library() -> String {
    "lucide".to_string()
}

impl ThemeConfig {
    /// Load configuration from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::not_found(path));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content, ConfigFormat::from_path(path)).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded theme config");
        Ok(config)
    }

    /// Load configuration layered with `MARROW__*` environment overrides.
    ///
    /// Nested keys use `__` (`MARROW__COLORS__LIGHT__PRIMARY`). Variable names
    /// match keys case-insensitively, so `MARROW__TRANSITIONDURATION` sets
    /// `transitionDuration`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        Self::load_layered(
            path,
            config::Environment::with_prefix(ENV_PREFIX).separator("__"),
        )
    }

    fn load_layered(path: &Path, env: config::Environment) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::not_found(path));
        }

        let content = std::fs::read_to_string(path)?;
        let mut document: serde_json::Value = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => toml::from_str(&content)?,
            ConfigFormat::Json => serde_json::from_str(&content)?,
        };

        // The config crate lowercases keys, so overrides are matched by hand.
        let overrides: serde_json::Value = config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()?;
        if let (Some(base), serde_json::Value::Object(overrides)) =
            (document.as_object_mut(), overrides)
        {
            tracing::debug!(count = overrides.len(), "applying environment overrides");
            overlay(base, overrides, FIELD_NAMES);
        }

        let config: ThemeConfig = serde_json::from_value(document)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded theme config");
        Ok(config)
    }

    /// Parse configuration text in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.fonts.heading.trim().is_empty() {
            return Err(CoreError::config("fonts.heading cannot be empty"));
        }

        if self.fonts.body.trim().is_empty() {
            return Err(CoreError::config("fonts.body cannot be empty"));
        }

        if self.theme != "light" && self.theme != "dark" {
            tracing::warn!(theme = %self.theme, "theme should be \"light\" or \"dark\"");
        }

        Ok(())
    }
}

/// Merge `overrides` into `base`, matching keys case-insensitively against
/// existing keys, then `names`. Unmatched keys are inserted as given.
fn overlay(
    base: &mut serde_json::Map<String, serde_json::Value>,
    overrides: serde_json::Map<String, serde_json::Value>,
    names: &[&str],
) {
    for (key, value) in overrides {
        let target = base
            .keys()
            .find(|k| k.eq_ignore_ascii_case(&key))
            .cloned()
            .or_else(|| {
                names
                    .iter()
                    .find(|n| n.eq_ignore_ascii_case(&key))
                    .map(|n| n.to_string())
            })
            .unwrap_or(key);

        match base.get_mut(&target) {
            Some(serde_json::Value::Object(existing)) if value.is_object() => {
                if let serde_json::Value::Object(nested) = value {
                    overlay(existing, nested, &[]);
                }
            }
            _ => {
                base.insert(target, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
theme = "dark"
radius = "sm"
compactness = "compact"
transitionDuration = "fast"
shadow = "none"
menuAccent = "bold"

[colors.light]
primary = "220 90% 56%"
primaryForeground = "0 0% 100%"
background = "0 0% 100%"

[colors.dark]
primary = "220 90% 56%"
background = "222 47% 6%"

[fonts]
heading = "Cal Sans"
body = "Inter"
"#;

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, SAMPLE).expect("write");

        let config = ThemeConfig::load(&config_path).expect("load config");

        assert_eq!(config.theme, "dark");
        assert_eq!(config.radius.as_deref(), Some("sm"));
        assert_eq!(config.compactness.as_deref(), Some("compact"));
        assert_eq!(config.transition_duration.as_deref(), Some("fast"));
        assert_eq!(config.shadow.as_deref(), Some("none"));
        assert_eq!(config.menu_accent, "bold");
        assert_eq!(config.icon_library, "lucide");
        assert_eq!(config.fonts.heading, "Cal Sans");
        assert_eq!(config.fonts.body, "Inter");
    }

    #[test]
    fn test_palette_keeps_file_order() {
        let config = ThemeConfig::parse(SAMPLE, ConfigFormat::Toml).expect("parse");
        let keys: Vec<_> = config.colors.light.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["primary", "primaryForeground", "background"]);
    }

    #[test]
    fn test_config_defaults() {
        let minimal = r#"
[colors.light]
primary = "220 90% 56%"

[colors.dark]
primary = "220 90% 56%"

[fonts]
heading = "Inter"
body = "Inter"
"#;
        let config = ThemeConfig::parse(minimal, ConfigFormat::Toml).expect("parse");

        assert_eq!(config.theme, "light");
        assert_eq!(config.menu_accent, "subtle");
        assert_eq!(config.icon_library, "lucide");
        assert!(config.radius.is_none());
        assert!(config.compactness.is_none());
        assert!(config.transition_duration.is_none());
        assert!(config.shadow.is_none());
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("marrow.config.json");
        let json = r#"{
  "radius": "xl",
  "colors": {
    "light": { "primary": "220 90% 56%", "ring": "220 90% 56%" },
    "dark": { "primary": "224 76% 48%" }
  },
  "fonts": { "heading": "Inter", "body": "DM Sans" }
}"#;
        std::fs::write(&config_path, json).expect("write");

        let config = ThemeConfig::load(&config_path).expect("load config");

        assert_eq!(config.radius.as_deref(), Some("xl"));
        assert_eq!(config.colors.light.len(), 2);
        assert_eq!(config.colors.dark["primary"], "224 76% 48%");
        assert_eq!(config.fonts.body, "DM Sans");
    }

    #[test]
    fn test_missing_fonts_fails() {
        let no_fonts = r#"
[colors.light]
primary = "220 90% 56%"

[colors.dark]
primary = "220 90% 56%"
"#;
        let result = ThemeConfig::parse(no_fonts, ConfigFormat::Toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("fonts"));
    }

    #[test]
    fn test_missing_dark_palette_fails() {
        let no_dark = r#"
[colors.light]
primary = "220 90% 56%"

[fonts]
heading = "Inter"
body = "Inter"
"#;
        assert!(ThemeConfig::parse(no_dark, ConfigFormat::Toml).is_err());
    }

    #[test]
    fn test_empty_font_rejected() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        let content = r#"
[colors.light]
primary = "220 90% 56%"

[colors.dark]
primary = "220 90% 56%"

[fonts]
heading = ""
body = "Inter"
"#;
        std::fs::write(&config_path, content).expect("write");

        let result = ThemeConfig::load(&config_path);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("fonts.heading cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = ThemeConfig::load(Path::new("/nonexistent/marrow.config.toml"));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("not found"));
        assert!(message.contains("/nonexistent/marrow.config.toml"));
    }

    fn env_with(vars: &[(&str, &str)]) -> config::Environment {
        let vars: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(Some(vars))
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, SAMPLE).expect("write");

        let layered = ThemeConfig::load_layered(&config_path, env_with(&[])).expect("load config");
        let plain = ThemeConfig::load(&config_path).expect("load config");

        assert_eq!(layered, plain);
        assert_eq!(layered.transition_duration.as_deref(), Some("fast"));
        assert_eq!(layered.menu_accent, "bold");
        assert_eq!(
            layered.colors.light.keys().collect::<Vec<_>>(),
            vec!["primary", "primaryForeground", "background"]
        );
    }

    #[test]
    fn test_env_overrides_camel_case_keys() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, SAMPLE).expect("write");

        let config = ThemeConfig::load_layered(
            &config_path,
            env_with(&[
                ("MARROW__RADIUS", "xl"),
                ("MARROW__TRANSITIONDURATION", "slow"),
                ("MARROW__ICONLIBRARY", "tabler"),
                ("MARROW__COLORS__LIGHT__PRIMARYFOREGROUND", "0 0% 0%"),
                ("MARROW__FONTS__HEADING", "Geist"),
            ]),
        )
        .expect("load config");

        assert_eq!(config.radius.as_deref(), Some("xl"));
        assert_eq!(config.transition_duration.as_deref(), Some("slow"));
        assert_eq!(config.icon_library, "tabler");
        assert_eq!(config.menu_accent, "bold");
        assert_eq!(config.fonts.heading, "Geist");
        assert_eq!(config.colors.light["primaryForeground"], "0 0% 0%");
        assert_eq!(config.colors.light.len(), 3);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("marrow.config.json")),
            ConfigFormat::Json
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("marrow.config.toml")),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("marrow.config")),
            ConfigFormat::Toml
        );
    }
}
